use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    lookup::{self, LookupArgs},
    metrics::{self, MetricsArgs},
    render::{self, RenderArgs},
};
use salesdash_core::logging;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "salesdash", about = "E-commerce sales report generator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the report page, JSON document and manifest into a directory.
    Render(RenderArgs),
    /// Summarize a single order by its id.
    Lookup(LookupArgs),
    /// List report views and whether the dataset supports them.
    Metrics(MetricsArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let result = match cli.command {
        Command::Render(args) => render::run(&args),
        Command::Lookup(args) => lookup::run(&args),
        Command::Metrics(args) => metrics::run(&args),
    };
    if let Err(err) = &result {
        log::error!("{err}");
    }
    result
}
