pub mod lookup;
pub mod metrics;
pub mod render;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use salesdash_core::config::ReportConfig;
use salesdash_data::{load, LoadOutcome};

/// Dataset and configuration options shared by every subcommand.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// CSV file to report on; `-` reads stdin. Defaults to the configured local file.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Report configuration YAML.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load(&self) -> Result<(ReportConfig, LoadOutcome), Box<dyn Error>> {
        let config = ReportConfig::load_or_default(self.config.as_deref())?;
        let outcome = load(self.input.as_deref(), &config.default_source)?;
        Ok((config, outcome))
    }
}
