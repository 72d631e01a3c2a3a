use super::types::{AmortizationMonth, AmortizationYear, MortgageAmortizationData};

const MONTHS_PER_YEAR: u32 = 12;
/// Longest term the schedule is built for; longer terms are truncated.
pub const MAX_TERM_YEARS: u32 = 1_000;

pub fn calculate_mortgage_amortization(
    price: f64,
    down_payment_percent: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> MortgageAmortizationData {
    let principal = price * (1.0 - down_payment_percent / 100.0);
    let monthly_rate = annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64;
    if term_years > MAX_TERM_YEARS {
        tracing::warn!(term_years, max = MAX_TERM_YEARS, "mortgage term truncated");
    }
    let total_months = term_years.min(MAX_TERM_YEARS) * MONTHS_PER_YEAR;

    if total_months == 0 {
        return MortgageAmortizationData {
            monthly_payment: 0.0,
            total_principal_paid: 0.0,
            total_interest_paid: 0.0,
            total_paid: 0.0,
            months: Vec::new(),
        };
    }

    let payment = level_payment(principal, monthly_rate, total_months);
    let mut months = Vec::with_capacity(total_months as usize);
    let mut balance = principal;
    let mut cumulative_principal = 0.0;
    let mut cumulative_interest = 0.0;

    for index in 1..=total_months {
        let interest = balance * monthly_rate;
        // The last month absorbs whatever rounding residue the level payment
        // left behind, so the loan closes at exactly zero.
        let (principal_portion, month_payment, balance_end) = if index == total_months {
            (balance, interest + balance, 0.0)
        } else {
            let portion = payment - interest;
            (portion, payment, balance - portion)
        };

        cumulative_principal += principal_portion;
        cumulative_interest += interest;

        months.push(AmortizationMonth {
            index,
            year: index.div_ceil(MONTHS_PER_YEAR),
            month_in_year: (index - 1) % MONTHS_PER_YEAR + 1,
            payment: month_payment,
            interest,
            principal: principal_portion,
            balance_start: balance,
            balance_end,
            cumulative_principal,
            cumulative_interest,
        });

        balance = balance_end;
    }

    MortgageAmortizationData {
        monthly_payment: payment,
        total_principal_paid: cumulative_principal,
        total_interest_paid: cumulative_interest,
        total_paid: cumulative_principal + cumulative_interest,
        months,
    }
}

pub fn summarize_amortization_years(data: &MortgageAmortizationData) -> Vec<AmortizationYear> {
    data.months
        .chunk_by(|a, b| a.year == b.year)
        .filter_map(|chunk| {
            let last = chunk.last()?;
            Some(AmortizationYear {
                year: last.year,
                payment: chunk.iter().map(|m| m.payment).sum(),
                interest: chunk.iter().map(|m| m.interest).sum(),
                principal: chunk.iter().map(|m| m.principal).sum(),
                balance_end: last.balance_end,
                cumulative_principal: last.cumulative_principal,
                cumulative_interest: last.cumulative_interest,
            })
        })
        .collect()
}

fn level_payment(principal: f64, monthly_rate: f64, total_months: u32) -> f64 {
    let n = total_months as f64;
    if monthly_rate.abs() < 1e-12 {
        return principal / n;
    }

    let growth = (1.0 + monthly_rate).powf(n);
    principal * monthly_rate * growth / (growth - 1.0)
}
