use super::mortgage::summarize_amortization_years;
use super::types::{CostComparisonYear, MonthlyRentData, MortgageAmortizationData};

pub fn compare_buy_vs_rent(
    down_payment: f64,
    mortgage: &MortgageAmortizationData,
    rent: &MonthlyRentData,
) -> Vec<CostComparisonYear> {
    let mortgage_years = summarize_amortization_years(mortgage);
    let mut rent_cumulative = 0.0;
    let mut buy_cumulative = down_payment;
    let mut rows = Vec::with_capacity(rent.years.len());

    for rent_year in &rent.years {
        let loan_year = mortgage_years.iter().find(|y| y.year == rent_year.year);
        let mortgage_year_total = loan_year.map(|y| y.payment).unwrap_or(0.0);
        let remaining_balance = loan_year.map(|y| y.balance_end).unwrap_or(0.0);

        rent_cumulative += rent_year.year_total;
        buy_cumulative += mortgage_year_total;

        rows.push(CostComparisonYear {
            year: rent_year.year,
            rent_year_total: rent_year.year_total,
            rent_cumulative,
            mortgage_year_total,
            buy_cumulative,
            remaining_balance,
            buy_minus_rent: buy_cumulative - rent_cumulative,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{calculate_monthly_rent_data, calculate_mortgage_amortization};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn comparison_follows_rent_horizon() {
        let mortgage = calculate_mortgage_amortization(500_000.0, 20.0, 5.0, 25);
        let rent = calculate_monthly_rent_data(2_500.0, 3, 2.5);
        let rows = compare_buy_vs_rent(100_000.0, &mortgage, &rent);

        assert_eq!(rows.len(), 3);
        assert_approx(rows[0].rent_cumulative, 30_000.0);
        assert_approx(rows[2].rent_cumulative, 92_268.75);
        assert_approx(rows[0].buy_cumulative, 100_000.0 + rows[0].mortgage_year_total);
        assert_approx(rows[0].remaining_balance, mortgage.months[11].balance_end);
        for row in &rows {
            assert_approx(row.buy_minus_rent, row.buy_cumulative - row.rent_cumulative);
        }
    }

    #[test]
    fn years_after_payoff_add_no_mortgage_cost() {
        let mortgage = calculate_mortgage_amortization(200_000.0, 50.0, 0.0, 2);
        let rent = calculate_monthly_rent_data(1_000.0, 4, 0.0);
        let rows = compare_buy_vs_rent(100_000.0, &mortgage, &rent);

        assert_eq!(rows.len(), 4);
        assert_approx(rows[0].mortgage_year_total, 50_000.0);
        assert_approx(rows[1].remaining_balance, 0.0);
        assert_eq!(rows[2].mortgage_year_total, 0.0);
        assert_eq!(rows[3].remaining_balance, 0.0);
        assert_approx(rows[3].buy_cumulative, 200_000.0);
        assert_approx(rows[3].rent_cumulative, 48_000.0);
    }

    #[test]
    fn empty_rent_horizon_gives_no_rows() {
        let mortgage = calculate_mortgage_amortization(200_000.0, 20.0, 4.0, 30);
        let rent = calculate_monthly_rent_data(1_000.0, 0, 0.0);
        assert!(compare_buy_vs_rent(40_000.0, &mortgage, &rent).is_empty());
    }
}
