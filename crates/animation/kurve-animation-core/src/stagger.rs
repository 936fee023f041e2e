//! Per-point staggering: replace the scalar alpha with a per-point alpha
//! array following a power law, so earlier points approach completion faster.
//!
//! Point n of N (0-indexed) gets exponent `1 + (n+1)/N * (max_power - 1)` and
//! value `alpha^exponent`. Only animations opting into `PointwiseAnimation`
//! can be wrapped; the scalar base contract is untouched.

use serde::{Deserialize, Serialize};

use crate::animation::{Animation, BaseAnimation, PointwiseAnimation};
use crate::error::AnimationError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayByOrderConfig {
    /// Exponent applied to the last point; the first point stays near linear.
    pub max_power: f32,
}

impl Default for DelayByOrderConfig {
    fn default() -> Self {
        Self { max_power: 5.0 }
    }
}

pub struct DelayByOrder {
    base: BaseAnimation,
    inner: Box<dyn PointwiseAnimation>,
    max_power: f32,
    num_points: usize,
}

impl DelayByOrder {
    pub fn new(inner: Box<dyn PointwiseAnimation>, config: DelayByOrderConfig) -> Self {
        // Point count is captured once; the snapshot geometry it indexes is
        // immutable for the animation's lifetime.
        let num_points = inner.base().mobject().borrow().num_points();
        let base = BaseAnimation::new(
            inner.base().mobject().clone(),
            inner.base().params().clone(),
        );
        Self {
            base,
            inner,
            max_power: config.max_power,
            num_points,
        }
    }

    /// The alpha assigned to point `index` at global `alpha`.
    pub fn point_alpha(&self, alpha: f32, index: usize) -> f32 {
        let n = self.num_points.max(1) as f32;
        let prop = (index + 1) as f32 / n;
        let power = 1.0 + prop * (self.max_power - 1.0);
        alpha.powf(power)
    }
}

impl Animation for DelayByOrder {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        let alphas: Vec<f32> = (0..self.num_points.max(1))
            .map(|i| self.point_alpha(alpha, i))
            .collect();
        self.inner.update_mobject_pointwise(&alphas)
    }

    fn clean_up(&mut self) {
        self.inner.clean_up();
    }
}
