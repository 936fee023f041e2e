//! Rate functions: remap linear time progress to perceptual progress.
//!
//! Named functions only, so animation configs stay serializable. A rate
//! function may be non-monotone (`SmoothReverse` plays an animation
//! backwards, `ThereAndBack` goes out and returns).

use serde::{Deserialize, Serialize};

#[inline]
fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFunc {
    /// Identity remap.
    #[default]
    Linear,
    /// Ease in and out.
    Smooth,
    /// 1 - smooth(t): runs the effect in reverse (uncreation).
    SmoothReverse,
    /// Out over the first half, back over the second.
    ThereAndBack,
}

impl RateFunc {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            RateFunc::Linear => t,
            RateFunc::Smooth => smoothstep(t),
            RateFunc::SmoothReverse => 1.0 - smoothstep(t),
            RateFunc::ThereAndBack => {
                let u = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smoothstep(u)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        for rf in [RateFunc::Linear, RateFunc::Smooth] {
            assert_eq!(rf.apply(0.0), 0.0);
            assert_eq!(rf.apply(1.0), 1.0);
        }
        assert_eq!(RateFunc::SmoothReverse.apply(0.0), 1.0);
        assert_eq!(RateFunc::SmoothReverse.apply(1.0), 0.0);
        assert_eq!(RateFunc::ThereAndBack.apply(0.0), 0.0);
        assert_eq!(RateFunc::ThereAndBack.apply(1.0), 0.0);
        assert_eq!(RateFunc::ThereAndBack.apply(0.5), 1.0);
    }

    #[test]
    fn smooth_is_monotone() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = RateFunc::Smooth.apply(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn reverse_reflects_smooth() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let sum = RateFunc::Smooth.apply(t) + RateFunc::SmoothReverse.apply(t);
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }
}
