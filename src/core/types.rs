use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationMonth {
    pub index: u32,
    pub year: u32,
    pub month_in_year: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance_start: f64,
    pub balance_end: f64,
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageAmortizationData {
    pub monthly_payment: f64,
    pub total_principal_paid: f64,
    pub total_interest_paid: f64,
    pub total_paid: f64,
    pub months: Vec<AmortizationMonth>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationYear {
    pub year: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance_end: f64,
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRent {
    pub year: u32,
    pub year_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRentData {
    pub years: Vec<YearlyRent>,
    pub total_paid: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComparisonYear {
    pub year: u32,
    pub rent_year_total: f64,
    pub rent_cumulative: f64,
    pub mortgage_year_total: f64,
    pub buy_cumulative: f64,
    pub remaining_balance: f64,
    pub buy_minus_rent: f64,
}
