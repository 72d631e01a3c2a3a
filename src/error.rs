use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("field text is empty")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("number is not finite: {0:?}")]
    NotFinite(String),

    #[error("invalid field policy: {0}")]
    InvalidPolicy(String),
}
