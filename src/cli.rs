use clap::{Args, Parser, Subcommand};

use crate::api::{ProjectionInputs, ProjectionPayload, RawNumber, reconcile_inputs};
use crate::field::{
    ANALYSIS_YEARS, HOME_PRICE, INTEREST_RATE, MONTHLY_RENT, RENT_INCREASE, TERM_YEARS,
};

#[derive(Parser, Debug)]
#[command(
    name = "rentbuy",
    about = "Buy vs. rent projections: mortgage amortization, rent growth and cumulative cost"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print the amortization schedule
    Mortgage {
        #[command(flatten)]
        loan: LoanArgs,
        #[arg(long, help = "Print one row per loan year instead of per month")]
        yearly: bool,
    },
    /// Print the rent projection
    Rent {
        #[command(flatten)]
        rent: RentArgs,
    },
    /// Print the full buy vs. rent projection
    Compare {
        #[command(flatten)]
        loan: LoanArgs,
        #[command(flatten)]
        rent: RentArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LoanArgs {
    #[arg(long, default_value_t = HOME_PRICE.default_value(), help = "Purchase price")]
    pub price: f64,
    #[arg(
        long,
        help = "Down payment in percent of price; defaults to 20 unless --down-payment is given"
    )]
    pub down_payment_percent: Option<f64>,
    #[arg(long, help = "Down payment amount, converted to a percentage of price")]
    pub down_payment: Option<f64>,
    #[arg(
        long,
        default_value_t = INTEREST_RATE.default_value(),
        help = "Annual mortgage rate in percent"
    )]
    pub interest_rate: f64,
    #[arg(long, default_value_t = TERM_YEARS.default_value(), help = "Mortgage term in years")]
    pub term_years: u32,
}

#[derive(Args, Debug, Clone)]
pub struct RentArgs {
    #[arg(long, default_value_t = MONTHLY_RENT.default_value())]
    pub monthly_rent: f64,
    #[arg(
        long,
        default_value_t = ANALYSIS_YEARS.default_value(),
        help = "Number of years to project"
    )]
    pub analysis_years: u32,
    #[arg(
        long,
        default_value_t = RENT_INCREASE.default_value(),
        help = "Annual rent increase in percent"
    )]
    pub rent_increase: f64,
}

/// Runs CLI values through the same field policies as the HTTP API.
pub fn reconcile_args(loan: Option<&LoanArgs>, rent: Option<&RentArgs>) -> ProjectionInputs {
    let mut payload = ProjectionPayload::default();

    if let Some(loan) = loan {
        payload.price = Some(RawNumber::Number(loan.price));
        payload.down_payment_percent = loan.down_payment_percent.map(RawNumber::Number);
        payload.down_payment = loan.down_payment.map(RawNumber::Number);
        payload.interest_rate = Some(RawNumber::Number(loan.interest_rate));
        payload.term_years = Some(RawNumber::Number(loan.term_years as f64));
    }
    if let Some(rent) = rent {
        payload.monthly_rent = Some(RawNumber::Number(rent.monthly_rent));
        payload.analysis_years = Some(RawNumber::Number(rent.analysis_years as f64));
        payload.rent_increase = Some(RawNumber::Number(rent.rent_increase));
    }

    reconcile_inputs(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_defaults_match_field_policies() {
        let cli = Cli::try_parse_from(["rentbuy", "compare"]).expect("valid args");
        let Command::Compare { loan, rent } = cli.command else {
            panic!("expected compare command");
        };

        assert_eq!(reconcile_args(Some(&loan), Some(&rent)), ProjectionInputs::default());
    }

    #[test]
    fn mortgage_args_are_reconciled() {
        let cli = Cli::try_parse_from([
            "rentbuy",
            "mortgage",
            "--price",
            "500000",
            "--down-payment",
            "125000",
            "--interest-rate",
            "35",
            "--term-years",
            "25",
            "--yearly",
        ])
        .expect("valid args");
        let Command::Mortgage { loan, yearly } = cli.command else {
            panic!("expected mortgage command");
        };
        let inputs = reconcile_args(Some(&loan), None);

        assert!(yearly);
        assert_eq!(inputs.down_payment_percent, 25.0);
        assert_eq!(inputs.interest_rate, 20.0);
        assert_eq!(inputs.term_years, 25);
    }

    #[test]
    fn serve_port_defaults_to_8080() {
        let cli = Cli::try_parse_from(["rentbuy", "serve"]).expect("valid args");
        assert!(matches!(cli.command, Command::Serve { port: 8080 }));
    }

    #[test]
    fn non_numeric_args_are_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["rentbuy", "rent", "--monthly-rent", "lots"]).is_err());
    }
}
