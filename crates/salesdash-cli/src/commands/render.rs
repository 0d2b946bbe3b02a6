use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use salesdash_metrics::{build_report, LookupRequest, MetricRegistry};
use salesdash_web::build_site;

use super::SourceArgs;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Output directory for index.html, report.json and manifest.json
    #[arg(long)]
    pub out: PathBuf,
    /// Order id to summarize on the page
    #[arg(long)]
    pub lookup: Option<String>,
}

pub fn run(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let (config, outcome) = args.source.load()?;
    let request = args.lookup.clone().and_then(LookupRequest::new);
    if args.lookup.is_some() && request.is_none() {
        log::warn!("ignoring empty --lookup value");
    }
    let document = build_report(outcome, &config, &MetricRegistry::standard(), request.as_ref());
    let manifest = build_site(&document, &config, &args.out)?;
    println!(
        "built report with {} sections in {}",
        manifest.sections.len(),
        args.out.display()
    );
    Ok(())
}
