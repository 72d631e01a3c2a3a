use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Representation {
    Percentage,
    Amount,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MirroredQuantity {
    representation: Representation,
    value: f64,
    inactive: f64,
}

impl MirroredQuantity {
    pub fn new(representation: Representation, value: f64, inactive: f64) -> Self {
        Self {
            representation,
            value,
            inactive,
        }
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }

    // Falls back to `inactive` when there is no usable total to convert against.
    pub fn switch_representation(self, target: Representation, total: Option<f64>) -> Self {
        if target == self.representation {
            return self;
        }

        let converted = match self.representation {
            Representation::Percentage => percentage_to_amount(self.value, total),
            Representation::Amount => amount_to_percentage(self.value, total),
        };

        match converted {
            Some(value) => Self {
                representation: target,
                value,
                inactive: self.value,
            },
            None => {
                tracing::debug!(?target, ?total, "total unknown, keeping stored value");
                Self {
                    representation: target,
                    value: self.inactive,
                    inactive: self.value,
                }
            }
        }
    }

    pub fn percentage(&self, total: Option<f64>) -> Option<f64> {
        match self.representation {
            Representation::Percentage => Some(self.value),
            Representation::Amount => amount_to_percentage(self.value, total),
        }
    }

    pub fn amount(&self, total: Option<f64>) -> Option<f64> {
        match self.representation {
            Representation::Amount => Some(self.value),
            Representation::Percentage => percentage_to_amount(self.value, total),
        }
    }
}

pub fn percentage_to_amount(percentage: f64, total: Option<f64>) -> Option<f64> {
    usable_total(total).map(|total| percentage / 100.0 * total)
}

pub fn amount_to_percentage(amount: f64, total: Option<f64>) -> Option<f64> {
    usable_total(total).map(|total| amount / total * 100.0)
}

fn usable_total(total: Option<f64>) -> Option<f64> {
    total.filter(|t| t.is_finite() && *t != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn switching_converts_against_total() {
        let down = MirroredQuantity::new(Representation::Percentage, 20.0, 0.0);

        let as_amount = down.switch_representation(Representation::Amount, Some(500_000.0));
        assert_eq!(as_amount.representation(), Representation::Amount);
        assert_approx(as_amount.value(), 100_000.0);

        let back = as_amount.switch_representation(Representation::Percentage, Some(400_000.0));
        assert_approx(back.value(), 25.0);
    }

    #[test]
    fn unknown_total_leaves_inactive_value_untouched() {
        let down = MirroredQuantity::new(Representation::Percentage, 20.0, 75_000.0);

        for total in [None, Some(0.0), Some(f64::NAN)] {
            let switched = down.switch_representation(Representation::Amount, total);
            assert_eq!(switched.representation(), Representation::Amount);
            assert_eq!(switched.value(), 75_000.0);

            let restored = switched.switch_representation(Representation::Percentage, total);
            assert_eq!(restored.value(), 20.0);
        }
    }

    #[test]
    fn switching_to_same_representation_is_a_no_op() {
        let down = MirroredQuantity::new(Representation::Amount, 60_000.0, 12.0);
        assert_eq!(down.switch_representation(Representation::Amount, None), down);
    }

    #[test]
    fn derived_views_need_a_total() {
        let down = MirroredQuantity::new(Representation::Amount, 60_000.0, 0.0);
        assert_eq!(down.amount(None), Some(60_000.0));
        assert_eq!(down.percentage(None), None);
        assert_eq!(down.percentage(Some(0.0)), None);
        assert_approx(down.percentage(Some(300_000.0)).unwrap_or(f64::NAN), 20.0);
    }

    #[test]
    fn edits_apply_to_the_active_representation() {
        let down = MirroredQuantity::new(Representation::Percentage, 20.0, 0.0).with_value(30.0);
        assert_eq!(down.percentage(None), Some(30.0));
        assert_approx(down.amount(Some(200_000.0)).unwrap_or(f64::NAN), 60_000.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_percentage_amount_round_trip(
            pct_bp in 0u32..10_001,
            total in 1u32..50_000_000
        ) {
            let pct = pct_bp as f64 / 100.0;
            let total = Some(total as f64);
            let down = MirroredQuantity::new(Representation::Percentage, pct, 0.0)
                .switch_representation(Representation::Amount, total)
                .switch_representation(Representation::Percentage, total);

            prop_assert!((down.value() - pct).abs() <= 1e-9);
        }
    }
}
