mod compare;
mod mortgage;
mod rent;
mod types;

pub use compare::compare_buy_vs_rent;
pub use mortgage::{
    MAX_TERM_YEARS, calculate_mortgage_amortization, summarize_amortization_years,
};
pub use rent::calculate_monthly_rent_data;
pub use types::{
    AmortizationMonth, AmortizationYear, CostComparisonYear, MonthlyRentData,
    MortgageAmortizationData, YearlyRent,
};
