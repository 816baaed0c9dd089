//! Terminal front end for the fee quoter
//!
//! Reproduces the reference presentation: for a given budget, print the
//! primary and discounted fee per complexity category as formatted currency.

use std::process::ExitCode;

use clap::Parser;

use fee_quoter_core_rs::{
    format_currency, Complexity, FeeSchedule, QuoteRequest,
};

#[derive(Parser, Debug)]
#[command(name = "fee-quoter", about = "Tiered professional-fee quotation")]
struct Cli {
    /// Project budget (currency units, minimum 1)
    budget: f64,

    /// Quote a single category instead of all three (low, medium, high)
    #[arg(long)]
    category: Option<String>,

    /// Emit quote records as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli, schedule: &FeeSchedule) -> Result<(), String> {
    let categories: Vec<Complexity> = match &cli.category {
        Some(label) => vec![label.parse().map_err(|e| format!("{e}"))?],
        None => Complexity::ALL.to_vec(),
    };

    for complexity in categories {
        let quote = schedule
            .quote(QuoteRequest::new(cli.budget, complexity))
            .map_err(|e| format!("{e}"))?;

        if cli.json {
            let record = serde_json::to_string(&quote).map_err(|e| format!("{e}"))?;
            println!("{record}");
        } else {
            println!(
                "{} complexity fee:            R {}",
                capitalize(complexity.as_str()),
                format_currency(quote.primary_fee)
            );
            println!(
                "{} complexity discounted fee: R {}",
                capitalize(complexity.as_str()),
                format_currency(quote.discounted_fee)
            );
        }
    }

    Ok(())
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let schedule = FeeSchedule::builtin();

    match run(&cli, &schedule) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
