use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::cli::command::Command;
use crate::configuration::Backend;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Track construction sites and their inspections",
    long_about = "Local store for construction-site records and their periodic inspections. Each subcommand performs one operation and prints JSON to stdout. Without a subcommand the site listing (with inspection counts) is printed.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "SITEWATCH_DATA_DIR",
        default_value = ".sitewatch/",
        value_name = "DIR",
        help = "Directory to store persistent data"
    )]
    pub data_dir: PathBuf,

    #[arg(
        long,
        env = "SITEWATCH_BACKEND",
        value_enum,
        default_value_t = Backend::Sqlite,
        help = "Storage backend for the collections"
    )]
    pub backend: Backend,

    #[arg(
        long,
        default_value_t = false,
        help = "Reset all persisted state (delete stored collections) before running"
    )]
    pub reset: bool,

    #[arg(
        long,
        env = "SITEWATCH_ALLOW_ORPHANS",
        default_value_t = false,
        help = "Accept inspections that reference a site which does not exist"
    )]
    pub allow_orphans: bool,

    #[arg(
        long = "log-file",
        env = "SITEWATCH_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
