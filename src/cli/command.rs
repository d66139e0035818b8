use clap::Subcommand;

use crate::cli::inspection_cmd::InspectionCmd;
use crate::cli::site_cmd::SiteCmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Site management commands",
        long_about = "Create, list, show, update and delete construction sites. Deleting a site also deletes its inspections."
    )]
    Site {
        #[command(subcommand)]
        cmd: SiteCmd,
    },
    #[command(
        about = "Inspection management commands",
        long_about = "Record, list and delete inspections attached to a site."
    )]
    Inspection {
        #[command(subcommand)]
        cmd: InspectionCmd,
    },
}
