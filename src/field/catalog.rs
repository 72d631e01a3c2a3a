use serde::Serialize;

use super::policy::{ClampedNumericField, FieldFormat, FieldScalar};

const WHOLE_DOLLARS: FieldFormat = FieldFormat::Currency { decimals: 0 };

pub const HOME_PRICE: ClampedNumericField<f64> =
    ClampedNumericField::unchecked(10_000.0, 10_000_000.0, 1.0, 500_000.0, WHOLE_DOLLARS);

pub const DOWN_PAYMENT_PERCENT: ClampedNumericField<f64> = ClampedNumericField::unchecked(
    0.0,
    100.0,
    0.1,
    20.0,
    FieldFormat::Fixed { decimals: 1 },
);

pub const DOWN_PAYMENT_AMOUNT: ClampedNumericField<f64> =
    ClampedNumericField::unchecked(0.0, 10_000_000.0, 1.0, 100_000.0, WHOLE_DOLLARS);

pub const INTEREST_RATE: ClampedNumericField<f64> = ClampedNumericField::unchecked(
    0.0,
    20.0,
    0.01,
    5.0,
    FieldFormat::Fixed { decimals: 2 },
);

pub const TERM_YEARS: ClampedNumericField<u32> =
    ClampedNumericField::unchecked(1, 40, 1.0, 30, FieldFormat::Fixed { decimals: 0 });

pub const MONTHLY_RENT: ClampedNumericField<f64> =
    ClampedNumericField::unchecked(0.0, 50_000.0, 1.0, 2_500.0, WHOLE_DOLLARS);

pub const ANALYSIS_YEARS: ClampedNumericField<u32> =
    ClampedNumericField::unchecked(1, 50, 1.0, 10, FieldFormat::Fixed { decimals: 0 });

pub const RENT_INCREASE: ClampedNumericField<f64> = ClampedNumericField::unchecked(
    0.0,
    20.0,
    0.1,
    3.0,
    FieldFormat::Fixed { decimals: 1 },
);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub format: FieldFormat,
}

impl FieldDescriptor {
    fn describe<T: FieldScalar>(key: &'static str, field: &ClampedNumericField<T>) -> Self {
        Self {
            key,
            min: field.min().to_f64(),
            max: field.max().to_f64(),
            step: field.step(),
            default: field.default_value().to_f64(),
            format: field.format_kind(),
        }
    }
}

/// Every projection input keyed by its query-string name.
pub fn projection_field_descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::describe("price", &HOME_PRICE),
        FieldDescriptor::describe("downPaymentPercent", &DOWN_PAYMENT_PERCENT),
        FieldDescriptor::describe("downPayment", &DOWN_PAYMENT_AMOUNT),
        FieldDescriptor::describe("interestRate", &INTEREST_RATE),
        FieldDescriptor::describe("termYears", &TERM_YEARS),
        FieldDescriptor::describe("monthlyRent", &MONTHLY_RENT),
        FieldDescriptor::describe("analysisYears", &ANALYSIS_YEARS),
        FieldDescriptor::describe("rentIncrease", &RENT_INCREASE),
    ]
}
