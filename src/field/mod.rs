mod catalog;
mod mirror;
mod policy;
mod state;
mod value;

pub use catalog::{
    ANALYSIS_YEARS, DOWN_PAYMENT_AMOUNT, DOWN_PAYMENT_PERCENT, FieldDescriptor, HOME_PRICE,
    INTEREST_RATE, MONTHLY_RENT, RENT_INCREASE, TERM_YEARS, projection_field_descriptors,
};
pub use mirror::{MirroredQuantity, Representation, amount_to_percentage, percentage_to_amount};
pub use policy::{ClampedNumericField, FieldFormat, FieldScalar};
pub use state::{CHANGE_EPSILON, FieldMode, FieldState};
pub use value::{
    FieldValue, clamp, format_currency, format_fixed, parse_field_text, raw_text, round_to_step,
};
