use crate::error::FieldError;

/// Largest number of decimals a step is allowed to carry when snapping.
const MAX_STEP_DECIMALS: i32 = 10;

/// A reconciled input: either a number or an explicit blank, which is not zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FieldValue {
    Empty,
    Number(f64),
}

impl FieldValue {
    pub fn from_text(text: &str) -> Self {
        match parse_field_text(text) {
            Ok(value) => FieldValue::Number(value),
            Err(_) => FieldValue::Empty,
        }
    }

    pub fn finite(self) -> Option<f64> {
        match self {
            FieldValue::Number(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Number)
    }
}

pub fn round_to_step(raw: f64, step: f64) -> f64 {
    if !raw.is_finite() || !step.is_finite() || step <= 0.0 {
        return raw;
    }

    let snapped = (raw / step).round() * step;
    if !snapped.is_finite() {
        return raw;
    }

    let scale = 10f64.powi(step_decimals(step));
    let cleaned = (snapped * scale).round() / scale;
    let rounded = if cleaned.is_finite() { cleaned } else { snapped };
    // Avoid handing out -0.0 for values that snapped to zero.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// `round_to_step(raw, step)` bounded to the multiples of `step` inside
/// `[min, max]`, with non-finite input replaced by `default` first.
pub fn clamp(raw: f64, min: f64, max: f64, step: f64, default: f64) -> f64 {
    let source = if raw.is_finite() { raw } else { default };
    let (lo, hi) = grid_bounds(min, max, step).unwrap_or((min, max));
    round_to_step(source, step)
        .min(hi)
        .max(lo)
        .min(max)
        .max(min)
}

pub(crate) fn grid_bounds(min: f64, max: f64, step: f64) -> Option<(f64, f64)> {
    if !step.is_finite() || step <= 0.0 {
        return Some((min, max));
    }

    let lo = round_to_step(grid_index(min / step, f64::ceil) * step, step);
    let hi = round_to_step(grid_index(max / step, f64::floor) * step, step);
    (lo <= hi).then_some((lo, hi))
}

fn grid_index(steps: f64, direction: fn(f64) -> f64) -> f64 {
    let nearest = steps.round();
    if (steps - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
        nearest
    } else {
        direction(steps)
    }
}

pub fn parse_field_text(text: &str) -> Result<f64, FieldError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '$' | ',' | '%'))
        .collect();
    if cleaned.is_empty() {
        return Err(FieldError::Empty);
    }

    let value = cleaned
        .parse::<f64>()
        .map_err(|_| FieldError::NotANumber(text.to_string()))?;
    if !value.is_finite() {
        return Err(FieldError::NotFinite(text.to_string()));
    }
    Ok(value)
}

/// Plain numeric text for editing: no grouping, no currency symbol.
pub fn raw_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

pub fn format_fixed(value: f64, decimals: u8) -> String {
    let text = format!("{:.*}", decimals as usize, value);
    if is_negative_zero_text(&text) {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

pub fn format_currency(value: f64, decimals: u8) -> String {
    let fixed = format!("{:.*}", decimals as usize, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}

fn step_decimals(step: f64) -> i32 {
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < MAX_STEP_DECIMALS
        && (scaled - scaled.round()).abs() > 1e-9 * scaled.max(1.0)
    {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

fn is_negative_zero_text(text: &str) -> bool {
    text.starts_with('-') && text.chars().all(|c| matches!(c, '-' | '0' | '.'))
}
