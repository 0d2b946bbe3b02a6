use std::error::Error;

use clap::Args;
use salesdash_core::serde::to_canonical_json_bytes;
use salesdash_data::LoadOutcome;
use salesdash_metrics::{prepare_dataset, MetricRegistry, ReportContext};

use super::SourceArgs;

#[derive(Args, Debug)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Print availability as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &MetricsArgs) -> Result<(), Box<dyn Error>> {
    let (config, outcome) = args.source.load()?;
    let notice = outcome.notice();
    let LoadOutcome::Loaded(loaded) = outcome else {
        eprintln!("warning: {}", notice.message);
        return Ok(());
    };
    let mut dataset = loaded.dataset;
    prepare_dataset(&mut dataset, &config);
    let ctx = ReportContext::new(&dataset, &config);
    let availability = MetricRegistry::standard().availability(&ctx);
    if args.json {
        println!("{}", String::from_utf8(to_canonical_json_bytes(&availability)?)?);
        return Ok(());
    }
    for entry in &availability {
        let status = if entry.is_available() {
            "available".to_string()
        } else {
            format!("missing: {}", entry.missing.join(", "))
        };
        println!("{:<22} {:<36} {}", entry.id.as_str(), entry.title, status);
    }
    Ok(())
}
