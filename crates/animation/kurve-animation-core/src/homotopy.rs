//! Homotopy: a time-parameterized space warp f(x, y, z, t).
//!
//! Each update resets every leaf to its snapshot geometry, then applies
//! `f(.., alpha)` pointwise, so the warp is always absolute in alpha. The
//! smoothed variant re-smooths vector geometry after the warp.

use crate::animation::{distribute_leaf_alphas, Animation, BaseAnimation, PointwiseAnimation};
use crate::config::AnimParams;
use crate::container::DrawableHandle;
use crate::drawable::Drawable;
use crate::error::AnimationError;
use crate::point::Point;

/// (x, y, z, t) -> warped point.
pub type HomotopyFn = Box<dyn Fn(f32, f32, f32, f32) -> Point>;

pub struct Homotopy {
    base: BaseAnimation,
    function: HomotopyFn,
    smooth_after: bool,
}

impl Homotopy {
    pub fn new(function: HomotopyFn, mobject: DrawableHandle) -> Self {
        Self::with_params(
            function,
            mobject,
            AnimParams {
                run_time: 3.0,
                ..AnimParams::default()
            },
        )
    }

    pub fn with_params(function: HomotopyFn, mobject: DrawableHandle, params: AnimParams) -> Self {
        Self {
            base: BaseAnimation::new(mobject, params),
            function,
            smooth_after: false,
        }
    }

    /// Re-smooth vector geometry after each warp.
    pub fn smoothed(function: HomotopyFn, mobject: DrawableHandle) -> Self {
        let mut anim = Self::new(function, mobject);
        anim.smooth_after = true;
        anim
    }
}

impl Animation for Homotopy {
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
        leaf.set_points(starting_leaf.points());
        leaf.apply_function(&mut |p| (self.function)(p[0], p[1], p[2], alpha));
        if self.smooth_after {
            leaf.make_smooth();
        }
        Ok(())
    }
}

impl PointwiseAnimation for Homotopy {
    /// Warp every point with its own alpha, indexed by global point order
    /// across the family. Trailing points reuse the last entry.
    fn update_mobject_pointwise(&mut self, alphas: &[f32]) -> Result<(), AnimationError> {
        if alphas.is_empty() {
            return Ok(());
        }
        let this = &*self;
        let mut next_point = 0usize;
        distribute_leaf_alphas(this.base(), 0.0, &mut |leaf, start, _| {
            leaf.set_points(start.points());
            leaf.apply_function(&mut |p| {
                let alpha = alphas[next_point.min(alphas.len() - 1)];
                next_point += 1;
                (this.function)(p[0], p[1], p[2], alpha)
            });
            if this.smooth_after {
                leaf.make_smooth();
            }
            Ok(())
        })
    }
}
