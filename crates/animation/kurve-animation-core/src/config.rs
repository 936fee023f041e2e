//! Shared animation parameters.
//!
//! Every variant carries an explicit, typed `AnimParams`; there is no dynamic
//! option merging. Variant-specific knobs live in variant-local config structs
//! next to their animation.

use serde::{Deserialize, Serialize};

use crate::rate::RateFunc;

/// How a scalar alpha is redistributed across a drawable's leaf members.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmobjectMode {
    /// Every leaf gets the same alpha.
    #[default]
    AllAtOnce,
    /// Leaves complete strictly in order, each over a 1/N-wide window.
    OneAtATime,
    /// Overlapping stagger controlled by `lag_factor`.
    LaggedStart,
}

impl SubmobjectMode {
    /// Alpha for leaf `index` of `count` at global `alpha`.
    pub fn leaf_alpha(self, alpha: f32, index: usize, count: usize, lag_factor: f32) -> f32 {
        if count == 0 {
            return alpha;
        }
        let n = count as f32;
        let i = index as f32;
        match self {
            SubmobjectMode::AllAtOnce => alpha,
            SubmobjectMode::OneAtATime => (n * alpha - i).clamp(0.0, 1.0),
            SubmobjectMode::LaggedStart => {
                let lag = lag_factor.max(1.0);
                ((alpha - i / (n * lag)) * lag).clamp(0.0, 1.0)
            }
        }
    }
}

/// Parameters common to every animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimParams {
    /// Duration in time units; zero means "instantaneous, alpha 1 once started".
    pub run_time: f32,
    pub rate_func: RateFunc,
    /// Whether the scene should drop the drawable once the animation finishes.
    pub remover: bool,
    pub submobject_mode: SubmobjectMode,
    /// Stagger intensity for `SubmobjectMode::LaggedStart`.
    pub lag_factor: f32,
}

impl Default for AnimParams {
    fn default() -> Self {
        Self {
            run_time: 1.0,
            rate_func: RateFunc::default(),
            remover: false,
            submobject_mode: SubmobjectMode::default(),
            lag_factor: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_at_a_time_windows() {
        let mode = SubmobjectMode::OneAtATime;
        // Four leaves: leaf 0 finishes at 0.25, leaf 3 only at 1.0.
        assert_eq!(mode.leaf_alpha(0.25, 0, 4, 2.0), 1.0);
        assert_eq!(mode.leaf_alpha(0.25, 1, 4, 2.0), 0.0);
        assert_eq!(mode.leaf_alpha(0.5, 1, 4, 2.0), 1.0);
        assert!(mode.leaf_alpha(0.99, 3, 4, 2.0) < 1.0);
        assert_eq!(mode.leaf_alpha(1.0, 3, 4, 2.0), 1.0);
    }

    #[test]
    fn lagged_start_overlaps() {
        let mode = SubmobjectMode::LaggedStart;
        // Midway through, both the first and second of three leaves are in
        // flight at once: the windows overlap instead of running in sequence.
        let a0 = mode.leaf_alpha(0.4, 0, 3, 2.0);
        let a1 = mode.leaf_alpha(0.4, 1, 3, 2.0);
        assert!((a0 - 0.8).abs() < 1e-6);
        assert!(a1 > 0.0, "second leaf should already be moving");
        assert!(a0 > a1);
        // Everything completes by alpha 1.
        for i in 0..3 {
            assert_eq!(mode.leaf_alpha(1.0, i, 3, 2.0), 1.0);
        }
    }

    #[test]
    fn params_default_round_trip() {
        let params = AnimParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: AnimParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
