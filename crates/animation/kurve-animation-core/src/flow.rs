//! Phase flow: integrate a velocity field over virtual time.
//!
//! This is the one variant whose output legitimately depends on call history:
//! each update advances every point by `dt * field(p)` where
//! `dt = virtual_time * (alpha - previous_alpha)`. The first call has no
//! previous alpha and performs no displacement.

use serde::{Deserialize, Serialize};

use crate::animation::{Animation, BaseAnimation};
use crate::config::AnimParams;
use crate::container::DrawableHandle;
use crate::error::AnimationError;
use crate::point::{add, scale, Point};

/// p -> velocity at p.
pub type VectorField = Box<dyn Fn(Point) -> Point>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseFlowConfig {
    /// How much field time one unit of alpha represents.
    pub virtual_time: f32,
    pub params: AnimParams,
}

impl Default for PhaseFlowConfig {
    fn default() -> Self {
        Self {
            virtual_time: 1.0,
            params: AnimParams::default(),
        }
    }
}

pub struct PhaseFlow {
    base: BaseAnimation,
    field: VectorField,
    virtual_time: f32,
    previous_alpha: Option<f32>,
}

impl PhaseFlow {
    pub fn new(field: VectorField, mobject: DrawableHandle, config: PhaseFlowConfig) -> Self {
        Self {
            base: BaseAnimation::new(mobject, config.params),
            field,
            virtual_time: config.virtual_time,
            previous_alpha: None,
        }
    }

    pub fn previous_alpha(&self) -> Option<f32> {
        self.previous_alpha
    }
}

impl Animation for PhaseFlow {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        if let Some(previous) = self.previous_alpha {
            let dt = self.virtual_time * (alpha - previous);
            let field = &self.field;
            self.base
                .mobject()
                .borrow_mut()
                .apply_function(&mut |p| add(p, scale(field(p), dt)));
        }
        self.previous_alpha = Some(alpha);
        Ok(())
    }

    /// Integration state survives handoffs; re-basing would discard it.
    fn supports_rebase(&self) -> bool {
        false
    }
}
