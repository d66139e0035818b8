use clap::Subcommand;

use crate::types::InspectionStatus;

#[derive(Subcommand, Debug, Clone)]
pub enum InspectionCmd {
    #[command(
        about = "Record an inspection for a site",
        long_about = "Record an inspection for SITE_ID and print its id. STATUS is one of 'on schedule', 'delayed' or 'stopped' (case-insensitive; 'Em Dia', 'Atrasada' and 'Parada' are accepted too)."
    )]
    Add {
        #[arg(value_name = "SITE_ID")]
        site_id: String,
        #[arg(long, value_name = "DATE")]
        date: String,
        #[arg(long, value_name = "STATUS")]
        status: InspectionStatus,
        #[arg(long, default_value = "")]
        observations: String,
        #[arg(
            long,
            value_name = "DEG",
            requires = "lon",
            allow_negative_numbers = true
        )]
        lat: Option<f64>,
        #[arg(
            long,
            value_name = "DEG",
            requires = "lat",
            allow_negative_numbers = true
        )]
        lon: Option<f64>,
        #[arg(long, value_name = "REF", help = "Opaque reference to a stored photo")]
        photo: Option<String>,
    },
    #[command(about = "List inspections, optionally only those of one site")]
    List {
        #[arg(long = "site", value_name = "SITE_ID")]
        site_id: Option<String>,
    },
    #[command(about = "Delete an inspection")]
    Delete {
        #[arg(value_name = "SITE_ID")]
        site_id: String,
        #[arg(value_name = "INSPECTION_ID")]
        inspection_id: String,
    },
}
