use std::fmt;

use serde::Serialize;

use super::value::{
    FieldValue, clamp, format_currency, format_fixed, grid_bounds, parse_field_text,
};
use crate::error::FieldError;

/// Scalar types a field can store once reconciled.
pub trait FieldScalar: Copy + PartialEq + fmt::Debug {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl FieldScalar for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl FieldScalar for u32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        // `as` saturates and maps NaN to zero.
        value.round() as u32
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldFormat {
    Currency { decimals: u8 },
    Fixed { decimals: u8 },
}

impl FieldFormat {
    pub fn render(self, value: f64) -> String {
        match self {
            FieldFormat::Currency { decimals } => format_currency(value, decimals),
            FieldFormat::Fixed { decimals } => format_fixed(value, decimals),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampedNumericField<T> {
    min: T,
    max: T,
    step: f64,
    default: T,
    format: FieldFormat,
}

impl<T: FieldScalar> ClampedNumericField<T> {
    pub fn new(
        min: T,
        max: T,
        step: f64,
        default: T,
        format: FieldFormat,
    ) -> Result<Self, FieldError> {
        let field = Self::unchecked(min, max, step, default, format);
        field.validate()?;
        Ok(field)
    }

    pub(crate) const fn unchecked(
        min: T,
        max: T,
        step: f64,
        default: T,
        format: FieldFormat,
    ) -> Self {
        Self {
            min,
            max,
            step,
            default,
            format,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        let (min, max, default) = (self.min.to_f64(), self.max.to_f64(), self.default.to_f64());
        if !min.is_finite() || !max.is_finite() {
            return Err(FieldError::InvalidPolicy(
                "bounds must be finite".to_string(),
            ));
        }
        if min > max {
            return Err(FieldError::InvalidPolicy(format!(
                "min {min} exceeds max {max}"
            )));
        }
        if !default.is_finite() {
            return Err(FieldError::InvalidPolicy(
                "default must be finite".to_string(),
            ));
        }
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(FieldError::InvalidPolicy(format!(
                "step must be >= 0, got {}",
                self.step
            )));
        }
        if grid_bounds(min, max, self.step).is_none() {
            return Err(FieldError::InvalidPolicy(format!(
                "no multiple of step {} between {min} and {max}",
                self.step
            )));
        }
        Ok(())
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn default_value(&self) -> T {
        self.clamp_f64(self.default.to_f64())
    }

    pub fn format_kind(&self) -> FieldFormat {
        self.format
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min.to_f64() && value <= self.max.to_f64()
    }

    pub fn clamp_f64(&self, raw: f64) -> T {
        T::from_f64(clamp(
            raw,
            self.min.to_f64(),
            self.max.to_f64(),
            self.step,
            self.default.to_f64(),
        ))
    }

    pub fn clamp(&self, raw: FieldValue) -> T {
        let Some(value) = raw.finite() else {
            tracing::debug!(?raw, default = ?self.default, "non-numeric field input, using default");
            return self.clamp_f64(f64::NAN);
        };

        let clamped = self.clamp_f64(value);
        if (clamped.to_f64() - value).abs() > f64::EPSILON * value.abs().max(1.0) {
            tracing::debug!(raw = value, ?clamped, "field input clamped");
        }
        clamped
    }

    /// Parses display or raw text and clamps it, falling back to the default.
    pub fn reconcile_text(&self, text: &str) -> T {
        match parse_field_text(text) {
            Ok(value) => self.clamp(FieldValue::Number(value)),
            Err(err) => {
                tracing::debug!(%err, "unparseable field text, using default");
                self.clamp(FieldValue::Empty)
            }
        }
    }

    pub fn format(&self, value: T) -> String {
        self.format.render(value.to_f64())
    }
}
