//! Whole-object rotation.
//!
//! Unlike the per-leaf variants, rotation refreshes each leaf from the
//! snapshot and then rotates the whole drawable in one go, so the angle is
//! always absolute (`alpha * radians` from the snapshot), never accumulated.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::animation::{distribute_leaf_alphas, Animation, BaseAnimation};
use crate::config::AnimParams;
use crate::container::DrawableHandle;
use crate::drawable::Drawable;
use crate::error::AnimationError;
use crate::point::{Point, OUT};
use crate::rate::RateFunc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatingConfig {
    /// Rotation axes applied in order; empty means the default `OUT` axis.
    pub axes: Vec<Point>,
    /// Total angle at alpha 1; one full turn by default.
    pub radians: f32,
    /// Fixed pivot. `None` pivots on the drawable's center, captured once the
    /// first time it is needed.
    pub about_point: Option<Point>,
    pub params: AnimParams,
}

impl Default for RotatingConfig {
    fn default() -> Self {
        Self {
            axes: Vec::new(),
            radians: TAU,
            about_point: None,
            params: AnimParams {
                run_time: 5.0,
                rate_func: RateFunc::Linear,
                ..AnimParams::default()
            },
        }
    }
}

pub struct Rotating {
    base: BaseAnimation,
    config: RotatingConfig,
    pivot: Option<Point>,
}

impl Rotating {
    pub fn new(mobject: DrawableHandle, config: RotatingConfig) -> Self {
        let base = BaseAnimation::new(mobject, config.params.clone());
        Self {
            base,
            config,
            pivot: None,
        }
    }
}

impl Animation for Rotating {
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
        _alpha: f32,
    ) -> Result<(), AnimationError> {
        leaf.set_points(starting_leaf.points());
        Ok(())
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        {
            let this = &*self;
            distribute_leaf_alphas(this.base(), alpha, &mut |leaf, start, leaf_alpha| {
                this.update_submobject(leaf, start, leaf_alpha)
            })?;
        }
        if self.pivot.is_none() {
            self.pivot = Some(match self.config.about_point {
                Some(point) => point,
                None => self.base.mobject().borrow().get_center(),
            });
        }
        let axes: &[Point] = if self.config.axes.is_empty() {
            &[OUT]
        } else {
            &self.config.axes
        };
        self.base
            .mobject()
            .borrow_mut()
            .rotate(alpha * self.config.radians, axes, self.pivot);
        Ok(())
    }
}
