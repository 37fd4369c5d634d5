//! Ease-out curves for spin deceleration
//!
//! Every curve is monotone non-decreasing on [0, 1] with f(0)=0 and f(1)=1
//! and a derivative approaching zero at 1 — a decelerating finish with no
//! overshoot or bounce. Monotonicity is the correctness requirement (a
//! non-monotone curve reads as a reverse-spin); the exact shape is a
//! presentation choice.

use serde::{Deserialize, Serialize};

/// Ease-out curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseCurve {
    /// y = 1 - (1-t)^3 — the classic wheel deceleration
    #[default]
    CubicOut,
    /// y = 1 - (1-t)^4 — slightly harder brake at the end
    QuartOut,
    /// y = 1 - (1-t)^5
    QuintOut,
}

impl EaseCurve {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            EaseCurve::CubicOut => "CubicOut",
            EaseCurve::QuartOut => "QuartOut",
            EaseCurve::QuintOut => "QuintOut",
        }
    }

    /// Evaluate the curve at progress `t` (clamped to 0.0 - 1.0)
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            EaseCurve::CubicOut => 1.0 - inv.powi(3),
            EaseCurve::QuartOut => 1.0 - inv.powi(4),
            EaseCurve::QuintOut => 1.0 - inv.powi(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CURVES: [EaseCurve; 3] = [
        EaseCurve::CubicOut,
        EaseCurve::QuartOut,
        EaseCurve::QuintOut,
    ];

    #[test]
    fn endpoints_fixed() {
        for curve in CURVES {
            assert_relative_eq!(curve.evaluate(0.0), 0.0);
            assert_relative_eq!(curve.evaluate(1.0), 1.0);
        }
    }

    #[test]
    fn monotone_non_decreasing() {
        for curve in CURVES {
            let mut last = 0.0;
            for step in 0..=1000 {
                let value = curve.evaluate(step as f64 / 1000.0);
                assert!(value >= last, "{} decreased at step {step}", curve.name());
                assert!(value <= 1.0 + 1e-12);
                last = value;
            }
        }
    }

    #[test]
    fn input_clamped() {
        for curve in CURVES {
            assert_relative_eq!(curve.evaluate(-2.5), 0.0);
            assert_relative_eq!(curve.evaluate(7.0), 1.0);
        }
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&EaseCurve::CubicOut).unwrap(),
            "\"cubic_out\""
        );
        let back: EaseCurve = serde_json::from_str("\"quart_out\"").unwrap();
        assert_eq!(back, EaseCurve::QuartOut);
    }

    #[test]
    fn decelerates_near_the_end() {
        // Second half covers less ground than the first half.
        for curve in CURVES {
            let first = curve.evaluate(0.5) - curve.evaluate(0.0);
            let second = curve.evaluate(1.0) - curve.evaluate(0.5);
            assert!(first > second);
        }
    }
}
