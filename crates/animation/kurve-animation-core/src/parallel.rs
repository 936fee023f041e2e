//! Parallel composition: N children driven together with time rescaling.
//!
//! Each child precomputes a multiplier `overall / own` duration; every frame
//! the child receives `clip(alpha * multiplier, 0, 1)`, so shorter children
//! finish early and hold at alpha 1. Zero-duration children get a saturating
//! multiplier instead of floating-point infinity: alpha 1 for any positive
//! global alpha, alpha 0 at exactly zero.

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::{Animation, BaseAnimation};
use crate::config::AnimParams;
use crate::container::{DrawableHandle, SharedGroup};
use crate::error::AnimationError;

pub struct AnimationGroup {
    base: BaseAnimation,
    anims: Vec<Box<dyn Animation>>,
    /// `None` marks a zero-duration child (saturating rescale).
    multipliers: Vec<Option<f32>>,
}

impl AnimationGroup {
    /// Overall duration defaults to the longest child's duration.
    pub fn new(anims: Vec<Box<dyn Animation>>) -> Self {
        let max = Self::max_run_time(&anims);
        Self::build(anims, max)
    }

    pub fn with_run_time(anims: Vec<Box<dyn Animation>>, run_time: f32) -> Self {
        Self::build(anims, run_time)
    }

    fn max_run_time(anims: &[Box<dyn Animation>]) -> f32 {
        anims.iter().map(|a| a.run_time()).fold(0.0, f32::max)
    }

    fn build(anims: Vec<Box<dyn Animation>>, run_time: f32) -> Self {
        let max = Self::max_run_time(&anims);
        let multipliers = anims
            .iter()
            .map(|a| {
                let own = a.run_time();
                (own > 0.0).then(|| max / own)
            })
            .collect();
        let handles: Vec<DrawableHandle> =
            anims.iter().map(|a| a.base().mobject().clone()).collect();
        let aggregate: DrawableHandle = Rc::new(RefCell::new(SharedGroup::new(handles)));
        let base = BaseAnimation::new(
            aggregate,
            AnimParams {
                run_time,
                ..AnimParams::default()
            },
        );
        Self {
            base,
            anims,
            multipliers,
        }
    }
}

impl Animation for AnimationGroup {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        for (anim, multiplier) in self.anims.iter_mut().zip(&self.multipliers) {
            let sub_alpha = match multiplier {
                Some(m) => (alpha * m).clamp(0.0, 1.0),
                None => {
                    if alpha > 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                }
            };
            anim.update(sub_alpha)?;
        }
        Ok(())
    }

    fn clean_up(&mut self) {
        for anim in &mut self.anims {
            anim.clean_up();
        }
    }
}
