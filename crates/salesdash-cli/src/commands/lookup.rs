use std::error::Error;

use clap::Args;
use salesdash_core::money::format_currency;
use salesdash_core::serde::to_canonical_json_bytes;
use salesdash_data::LoadOutcome;
use salesdash_metrics::{
    lookup_order, prepare_dataset, LookupOutcome, LookupRequest, ReportContext,
};

use super::SourceArgs;

#[derive(Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Order id to look up (exact match)
    #[arg(long)]
    pub order_id: String,
    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &LookupArgs) -> Result<(), Box<dyn Error>> {
    let Some(request) = LookupRequest::new(args.order_id.as_str()) else {
        eprintln!("warning: enter an Order ID to look up");
        return Ok(());
    };
    let (config, outcome) = args.source.load()?;
    let notice = outcome.notice();
    let LoadOutcome::Loaded(loaded) = outcome else {
        eprintln!("warning: {}", notice.message);
        return Ok(());
    };
    let mut dataset = loaded.dataset;
    prepare_dataset(&mut dataset, &config);
    let ctx = ReportContext::new(&dataset, &config);
    let result = lookup_order(&ctx, &request);
    if args.json {
        println!("{}", String::from_utf8(to_canonical_json_bytes(&result)?)?);
        return Ok(());
    }
    match &result {
        LookupOutcome::Found(summary) => {
            println!("Order ID: {}", summary.order_id);
            println!("Line Items: {}", summary.row_count);
            println!(
                "Total Revenue: {}",
                format_currency(summary.total_amount, &config.currency_symbol)
            );
            println!("City: {}", summary.ship_city);
            println!("State: {}", summary.ship_state);
            println!("Sales Channel: {}", summary.sales_channel);
        }
        other => {
            if let Some(notice) = other.notice() {
                println!("{}", notice.message);
            }
        }
    }
    Ok(())
}
