//! Base animation contract.
//!
//! An animation owns a handle to the drawable it mutates plus an immutable
//! snapshot of that drawable captured at construction. Every frame the driver
//! supplies a progress value `t`; the animation remaps it through its rate
//! function to an alpha in [0,1] and rewrites the live drawable from the
//! snapshot. Repeated calls with the same `t` therefore produce bit-identical
//! state (the one documented exception is `PhaseFlow`, which integrates).

use crate::config::AnimParams;
use crate::container::DrawableHandle;
use crate::drawable::Drawable;
use crate::error::AnimationError;

/// State shared by every animation variant: the mutated drawable, its
/// start-of-animation snapshot, and the common parameters.
pub struct BaseAnimation {
    mobject: DrawableHandle,
    starting: Box<dyn Drawable>,
    params: AnimParams,
}

impl BaseAnimation {
    /// Capture the snapshot and take over mutation of `mobject`.
    pub fn new(mobject: DrawableHandle, params: AnimParams) -> Self {
        let starting = mobject.borrow().deep_copy();
        Self {
            mobject,
            starting,
            params,
        }
    }

    pub fn mobject(&self) -> &DrawableHandle {
        &self.mobject
    }

    /// The immutable start-of-animation snapshot.
    pub fn starting(&self) -> &dyn Drawable {
        self.starting.as_ref()
    }

    pub fn params(&self) -> &AnimParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut AnimParams {
        &mut self.params
    }

    /// Recapture the snapshot from the live drawable's current state.
    pub fn recapture(&mut self) {
        self.starting = self.mobject.borrow().deep_copy();
    }
}

pub trait Animation {
    fn base(&self) -> &BaseAnimation;

    fn base_mut(&mut self) -> &mut BaseAnimation;

    /// Remap `t` through the rate function, clamp to [0,1], and mutate the
    /// drawable accordingly.
    fn update(&mut self, t: f32) -> Result<(), AnimationError> {
        let alpha = self.base().params().rate_func.apply(t).clamp(0.0, 1.0);
        self.update_mobject(alpha)
    }

    /// Apply `alpha` to the drawable. The default redistributes it across all
    /// leaf members according to the configured `SubmobjectMode` and hands
    /// each (live, snapshot) leaf pair to `update_submobject`. Variants with
    /// whole-object semantics override this instead.
    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        let this = &*self;
        distribute_leaf_alphas(this.base(), alpha, &mut |leaf, start, leaf_alpha| {
            this.update_submobject(leaf, start, leaf_alpha)
        })
    }

    /// Per-leaf interpolation hook for the default `update_mobject`.
    fn update_submobject(
        &self,
        _leaf: &mut dyn Drawable,
        _starting_leaf: &dyn Drawable,
        _alpha: f32,
    ) -> Result<(), AnimationError> {
        Ok(())
    }

    /// Retirement hook: invoked exactly once when the animation is dropped
    /// from a composite or by the driver. The default drives the animation to
    /// completion so a successor picks up from the finished state; it is safe
    /// to call even if the animation never reached alpha 1 on its own.
    fn clean_up(&mut self) {
        if let Err(err) = self.update(1.0) {
            log::warn!("clean_up completion failed: {err}");
        }
    }

    /// Whether a sequential composite may recapture this animation's snapshot
    /// at handoff when it shares its drawable with the previous child.
    fn supports_rebase(&self) -> bool {
        true
    }

    /// Recapture the snapshot from the live drawable so chained mutations on
    /// one drawable compose continuously.
    fn rebase(&mut self) {
        self.base_mut().recapture();
    }

    fn run_time(&self) -> f32 {
        self.base().params().run_time
    }

    /// Whether the scene should drop the drawable once this animation is done.
    fn is_remover(&self) -> bool {
        self.base().params().remover
    }
}

/// Opt-in extension for variants whose per-leaf step tolerates a per-point
/// alpha array instead of a scalar. `alphas` is indexed by global point order
/// across the drawable's family; the last entry applies to any trailing
/// points. This deliberately stays a separate trait: the base contract is
/// scalar-alpha only.
pub trait PointwiseAnimation: Animation {
    fn update_mobject_pointwise(&mut self, alphas: &[f32]) -> Result<(), AnimationError>;
}

/// Drive each (live, snapshot) leaf pair in family order with the
/// mode-redistributed alpha. Fails fast when the structures diverge.
pub(crate) fn distribute_leaf_alphas(
    base: &BaseAnimation,
    alpha: f32,
    per_leaf: &mut dyn FnMut(&mut dyn Drawable, &dyn Drawable, f32) -> Result<(), AnimationError>,
) -> Result<(), AnimationError> {
    let mut live = base.mobject.borrow_mut();
    let live_len = live.family_len();
    let snapshot_len = base.starting.family_len();
    if live_len != snapshot_len {
        return Err(AnimationError::StructuralMismatch {
            live: live_len,
            snapshot: snapshot_len,
        });
    }
    let mode = base.params.submobject_mode;
    let lag = base.params.lag_factor;
    for i in 0..live_len {
        let leaf_alpha = mode.leaf_alpha(alpha, i, live_len, lag);
        let start = base
            .starting
            .family_member(i)
            .ok_or(AnimationError::OpaqueAggregate)?;
        let leaf = live
            .family_member_mut(i)
            .ok_or(AnimationError::OpaqueAggregate)?;
        per_leaf(leaf, start, leaf_alpha)?;
    }
    Ok(())
}
