use super::types::{MonthlyRentData, YearlyRent};

pub fn calculate_monthly_rent_data(
    monthly_rent: f64,
    analysis_years: u32,
    annual_increase_percent: f64,
) -> MonthlyRentData {
    let growth = 1.0 + annual_increase_percent / 100.0;
    let mut years = Vec::with_capacity(analysis_years as usize);
    let mut total_paid = 0.0;

    for year in 1..=analysis_years {
        // Rent steps up once per year, not per month.
        let effective_monthly_rent = monthly_rent * growth.powi((year - 1) as i32);
        let year_total = effective_monthly_rent * 12.0;
        total_paid += year_total;
        years.push(YearlyRent { year, year_total });
    }

    MonthlyRentData { years, total_paid }
}
