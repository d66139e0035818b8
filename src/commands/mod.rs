use serde::Serialize;

use crate::cli::Command;
use crate::repository::Repository;
use crate::types::Point;

pub mod inspection;
pub mod site;

pub trait CommandRunner {
    fn run(&self, repo: &Repository) -> anyhow::Result<()>;
}

impl Command {
    pub fn run(&self, repo: &Repository) -> anyhow::Result<()> {
        match self {
            Command::Site { cmd } => cmd.run(repo),
            Command::Inspection { cmd } => cmd.run(repo),
        }
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// clap guarantees both or neither are present.
pub(crate) fn point(lat: Option<f64>, lon: Option<f64>) -> Option<Point> {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Some(Point::new(latitude, longitude)),
        _ => None,
    }
}
