use serde::Serialize;

use super::policy::{ClampedNumericField, FieldScalar};
use super::value::{FieldValue, parse_field_text, raw_text};

/// Difference between typed and clamped value below which a blur is silent.
pub const CHANGE_EPSILON: f64 = 0.001;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldMode {
    Unfocused,
    Focused,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState<T> {
    mode: FieldMode,
    raw_text: String,
    committed: T,
}

impl<T: FieldScalar> FieldState<T> {
    pub fn new(field: &ClampedNumericField<T>) -> Self {
        Self::with_value(field, FieldValue::Empty)
    }

    pub fn with_value(field: &ClampedNumericField<T>, value: FieldValue) -> Self {
        let committed = field.clamp(value);
        Self {
            mode: FieldMode::Unfocused,
            raw_text: field.format(committed),
            committed,
        }
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn display_text(&self) -> &str {
        &self.raw_text
    }

    pub fn committed(&self) -> T {
        self.committed
    }

    pub fn focus(self) -> Self {
        if self.mode == FieldMode::Focused {
            return self;
        }
        Self {
            mode: FieldMode::Focused,
            raw_text: raw_text(self.committed.to_f64()),
            committed: self.committed,
        }
    }

    pub fn input(self, field: &ClampedNumericField<T>, text: &str) -> (Self, Option<T>) {
        if self.mode != FieldMode::Focused {
            return (self, None);
        }

        let parsed = parse_field_text(text)
            .ok()
            .filter(|value| field.contains(*value))
            .map(T::from_f64);
        let changed = parsed.filter(|value| *value != self.committed);

        let next = Self {
            mode: FieldMode::Focused,
            raw_text: text.to_string(),
            committed: parsed.unwrap_or(self.committed),
        };
        (next, changed)
    }

    pub fn blur(self, field: &ClampedNumericField<T>) -> (Self, Option<T>) {
        if self.mode != FieldMode::Focused {
            return (self, None);
        }

        let typed = parse_field_text(&self.raw_text).ok();
        let committed = field.clamp(FieldValue::from(typed));
        let emit = match typed {
            Some(value) => (committed.to_f64() - value).abs() > CHANGE_EPSILON,
            None => true,
        };

        let next = Self {
            mode: FieldMode::Unfocused,
            raw_text: field.format(committed),
            committed,
        };
        (next, emit.then_some(committed))
    }

    /// Commits a value from outside the text box, e.g. a slider or a URL.
    pub fn set_value(
        self,
        field: &ClampedNumericField<T>,
        value: FieldValue,
    ) -> (Self, Option<T>) {
        let committed = field.clamp(value);
        let raw_text = match self.mode {
            FieldMode::Focused => raw_text(committed.to_f64()),
            FieldMode::Unfocused => field.format(committed),
        };
        let changed = (committed != self.committed).then_some(committed);

        let next = Self {
            mode: self.mode,
            raw_text,
            committed,
        };
        (next, changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldFormat;

    fn price_field() -> ClampedNumericField<f64> {
        ClampedNumericField::new(
            10_000.0,
            10_000_000.0,
            1.0,
            500_000.0,
            FieldFormat::Currency { decimals: 0 },
        )
        .expect("valid policy")
    }

    fn price_state(value: f64) -> FieldState<f64> {
        FieldState::with_value(&price_field(), FieldValue::Number(value))
    }

    #[test]
    fn starts_unfocused_with_formatted_default() {
        let state = FieldState::new(&price_field());
        assert_eq!(state.mode(), FieldMode::Unfocused);
        assert_eq!(state.display_text(), "$500,000");
        assert_eq!(state.committed(), 500_000.0);
    }

    #[test]
    fn focus_shows_raw_number() {
        let state = price_state(400_000.0).focus();
        assert_eq!(state.mode(), FieldMode::Focused);
        assert_eq!(state.display_text(), "400000");
    }

    #[test]
    fn valid_keystrokes_commit_optimistically() {
        let field = price_field();
        let state = price_state(400_000.0).focus();

        let (state, changed) = state.input(&field, "450000");
        assert_eq!(changed, Some(450_000.0));
        assert_eq!(state.committed(), 450_000.0);
        assert_eq!(state.display_text(), "450000");
    }

    #[test]
    fn partial_entry_keeps_text_and_value() {
        let field = price_field();
        let state = price_state(400_000.0).focus();

        let (state, changed) = state.input(&field, "-");
        assert_eq!(changed, None);
        assert_eq!(state.display_text(), "-");
        assert_eq!(state.committed(), 400_000.0);

        let (state, changed) = state.input(&field, ".");
        assert_eq!(changed, None);
        assert_eq!(state.display_text(), ".");
        assert_eq!(state.committed(), 400_000.0);
    }

    #[test]
    fn out_of_domain_keystrokes_are_not_clamped_early() {
        let field = price_field();
        let state = price_state(400_000.0).focus();

        let (state, changed) = state.input(&field, "50");
        assert_eq!(changed, None);
        assert_eq!(state.committed(), 400_000.0);
        assert_eq!(state.display_text(), "50");
    }

    #[test]
    fn blur_clamps_and_reformats() {
        let field = price_field();
        let state = price_state(400_000.0).focus();
        let (state, _) = state.input(&field, "50");

        let (state, changed) = state.blur(&field);
        assert_eq!(state.mode(), FieldMode::Unfocused);
        assert_eq!(changed, Some(10_000.0));
        assert_eq!(state.committed(), 10_000.0);
        assert_eq!(state.display_text(), "$10,000");
    }

    #[test]
    fn blur_is_silent_when_clamp_is_a_no_op() {
        let field = price_field();
        let state = price_state(400_000.0).focus();
        let (state, _) = state.input(&field, "450000");

        let (state, changed) = state.blur(&field);
        assert_eq!(changed, None);
        assert_eq!(state.committed(), 450_000.0);
        assert_eq!(state.display_text(), "$450,000");
    }

    #[test]
    fn blur_is_silent_for_sub_epsilon_rounding() {
        let field = price_field();
        let state = price_state(400_000.0).focus();
        let (state, _) = state.input(&field, "450000.0004");

        let (state, changed) = state.blur(&field);
        assert_eq!(changed, None);
        assert_eq!(state.committed(), 450_000.0);
    }

    #[test]
    fn blur_on_empty_text_restores_default() {
        let field = price_field();
        let state = price_state(400_000.0).focus();
        let (state, _) = state.input(&field, "");

        let (state, changed) = state.blur(&field);
        assert_eq!(changed, Some(500_000.0));
        assert_eq!(state.display_text(), "$500,000");
    }

    #[test]
    fn unfocused_input_and_blur_are_ignored() {
        let field = price_field();
        let state = price_state(400_000.0);

        let (state, changed) = state.input(&field, "123456");
        assert_eq!(changed, None);
        assert_eq!(state.committed(), 400_000.0);

        let (state, changed) = state.blur(&field);
        assert_eq!(changed, None);
        assert_eq!(state.display_text(), "$400,000");
    }

    #[test]
    fn set_value_clamps_and_tracks_mode() {
        let field = price_field();

        let (state, changed) = price_state(400_000.0).set_value(&field, FieldValue::Number(2e7));
        assert_eq!(changed, Some(10_000_000.0));
        assert_eq!(state.display_text(), "$10,000,000");

        let (state, changed) = state.focus().set_value(&field, FieldValue::Number(10_000_000.0));
        assert_eq!(changed, None);
        assert_eq!(state.display_text(), "10000000");
    }
}
