use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rentbuy::api::{build_projection_response, run_http_server};
use rentbuy::cli::{Cli, Command, reconcile_args};
use rentbuy::core::{
    calculate_monthly_rent_data, calculate_mortgage_amortization, summarize_amortization_years,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Serve { port } => {
            if let Err(e) = run_http_server(port).await {
                tracing::error!("server error: {e}");
                std::process::exit(1);
            }
            return;
        }
        Command::Mortgage { loan, yearly } => {
            let inputs = reconcile_args(Some(&loan), None);
            let mortgage = calculate_mortgage_amortization(
                inputs.price,
                inputs.down_payment_percent,
                inputs.interest_rate,
                inputs.term_years,
            );
            if yearly {
                print_json(&summarize_amortization_years(&mortgage))
            } else {
                print_json(&mortgage)
            }
        }
        Command::Rent { rent } => {
            let inputs = reconcile_args(None, Some(&rent));
            print_json(&calculate_monthly_rent_data(
                inputs.monthly_rent,
                inputs.analysis_years,
                inputs.rent_increase,
            ))
        }
        Command::Compare { loan, rent } => {
            let inputs = reconcile_args(Some(&loan), Some(&rent));
            print_json(&build_projection_response(inputs))
        }
    };

    if let Err(e) = result {
        tracing::error!("failed to write output: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
