//! Progressive reveal: draw each leaf as the sub-segment of its snapshot
//! between fractional bounds computed from alpha.
//!
//! Concrete policies:
//! - `Grow`: bounds (0, alpha) — creation. Reversed through `SmoothReverse`
//!   it uncreates and marks the drawable for removal.
//! - `Window`: a sliding window of relative width `time_width` centered at
//!   alpha, clamped to [0,1] at both ends — a traveling highlight.
//!
//! Driving a reveal without a bounds policy is a construction-time bug and
//! surfaces as `AnimationError::AbstractContract` on the first update.

use serde::{Deserialize, Serialize};

use crate::animation::{Animation, BaseAnimation};
use crate::config::{AnimParams, SubmobjectMode};
use crate::container::DrawableHandle;
use crate::drawable::Drawable;
use crate::error::AnimationError;
use crate::rate::RateFunc;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealBounds {
    Grow,
    Window { time_width: f32 },
}

impl RevealBounds {
    /// Fractional (lower, upper) bounds at `alpha`.
    pub fn bounds(self, alpha: f32) -> (f32, f32) {
        match self {
            RevealBounds::Grow => (0.0, alpha),
            RevealBounds::Window { time_width } => {
                let center = alpha * (1.0 + time_width) - time_width / 2.0;
                let lower = (center - time_width / 2.0).clamp(0.0, 1.0);
                let upper = (center + time_width / 2.0).clamp(0.0, 1.0);
                (lower, upper)
            }
        }
    }
}

/// Reveal config as it may arrive from serialized scene descriptions; a
/// missing policy is tolerated here and rejected when the animation is driven.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub bounds: Option<RevealBounds>,
    pub params: AnimParams,
}

pub struct PartialReveal {
    base: BaseAnimation,
    bounds: Option<RevealBounds>,
}

impl PartialReveal {
    pub fn with_policy(mobject: DrawableHandle, bounds: RevealBounds, params: AnimParams) -> Self {
        Self {
            base: BaseAnimation::new(mobject, params),
            bounds: Some(bounds),
        }
    }

    pub fn from_config(mobject: DrawableHandle, config: RevealConfig) -> Self {
        Self {
            base: BaseAnimation::new(mobject, config.params),
            bounds: config.bounds,
        }
    }

    /// Classic creation: leaves grow in strictly one at a time.
    pub fn create(mobject: DrawableHandle) -> Self {
        Self::with_policy(
            mobject,
            RevealBounds::Grow,
            AnimParams {
                submobject_mode: SubmobjectMode::OneAtATime,
                ..AnimParams::default()
            },
        )
    }

    /// Visually uncreate: creation run through a reflecting rate function,
    /// flagged for removal on completion.
    pub fn uncreate(mobject: DrawableHandle) -> Self {
        Self::with_policy(
            mobject,
            RevealBounds::Grow,
            AnimParams {
                submobject_mode: SubmobjectMode::OneAtATime,
                rate_func: RateFunc::SmoothReverse,
                remover: true,
                ..AnimParams::default()
            },
        )
    }

    /// Write-on reveal for text-like drawables: duration and stagger are
    /// inferred from how many leaves the drawable decomposes into. Callers
    /// needing explicit timing use `with_policy` instead.
    pub fn write(mobject: DrawableHandle) -> Self {
        let leaves = mobject.borrow().family_len();
        let run_time = if leaves < 5 {
            1.0
        } else if leaves < 15 {
            2.0
        } else {
            3.0
        };
        Self::with_policy(
            mobject,
            RevealBounds::Grow,
            AnimParams {
                run_time,
                lag_factor: (run_time - 1.0).max(2.0),
                submobject_mode: SubmobjectMode::LaggedStart,
                ..AnimParams::default()
            },
        )
    }

    /// A traveling highlight of relative width `time_width`.
    pub fn passing_flash(mobject: DrawableHandle, time_width: f32) -> Self {
        Self::with_policy(
            mobject,
            RevealBounds::Window { time_width },
            AnimParams::default(),
        )
    }

    pub fn bounds(&self) -> Option<RevealBounds> {
        self.bounds
    }
}

impl Animation for PartialReveal {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_submobject(
        &self,
        leaf: &mut dyn Drawable,
        starting_leaf: &dyn Drawable,
        alpha: f32,
    ) -> Result<(), AnimationError> {
        let policy = self.bounds.ok_or(AnimationError::AbstractContract)?;
        let (lower, upper) = policy.bounds(alpha);
        leaf.pointwise_become_partial(starting_leaf, lower, upper);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_bounds() {
        assert_eq!(RevealBounds::Grow.bounds(0.0), (0.0, 0.0));
        assert_eq!(RevealBounds::Grow.bounds(0.5), (0.0, 0.5));
        assert_eq!(RevealBounds::Grow.bounds(1.0), (0.0, 1.0));
    }

    #[test]
    fn window_bounds_centered_and_clamped() {
        let window = RevealBounds::Window { time_width: 0.1 };
        let (lower, upper) = window.bounds(0.5);
        assert!((lower - 0.45).abs() < 1e-6);
        assert!((upper - 0.55).abs() < 1e-6);
        assert_eq!(window.bounds(0.0), (0.0, 0.0));
        assert_eq!(window.bounds(1.0), (1.0, 1.0));
    }
}
