mod wiring;

use crate::{cli, configuration::Configuration, repository::Repository};
use anyhow::{Context as AnyhowContext, Result};

pub use wiring::{build_repository, init_data_dir, init_storage};

pub struct App {
    pub config: Configuration,
    pub repository: Repository,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let config = Configuration::from_cli(&cli);

        crate::tracing::init(config.log_file.as_deref());
        log::debug!("🚀 Starting sitewatch");
        log::debug!("📂 Data dir: {}", config.data_dir.to_string_lossy());
        log::debug!("🗄️ Backend: {:?}", config.backend);
        log::debug!("🔗 Reference policy: {:?}", config.reference_policy);
        if let Some(path) = config.log_file.as_deref() {
            log::debug!("📝 Log file: {}", path.to_string_lossy());
        }

        let app = Self::new(config)?;
        Ok((app, cli))
    }

    pub fn new(config: Configuration) -> Result<Self> {
        wiring::init_data_dir(&config).context("initializing data dir")?;
        let store = wiring::init_storage(&config)?;
        let repository = wiring::build_repository(&config, store);
        Ok(Self { config, repository })
    }
}

pub fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    match &cli.cmd {
        Some(cmd) => cmd.run(&app.repository),
        None => crate::commands::print_json(&app.repository.site_summaries()?),
    }
}
