mod args;
mod command;
mod inspection_cmd;
mod site_cmd;

pub use args::Cli;
pub use command::Command;
pub use inspection_cmd::InspectionCmd;
pub use site_cmd::SiteCmd;

pub use args::parse;
