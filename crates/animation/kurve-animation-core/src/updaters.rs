//! Callback-driven updaters and relative-position tracking, for drawables
//! whose state depends on another animation being driven in lockstep.

use crate::animation::{Animation, BaseAnimation};
use crate::config::AnimParams;
use crate::container::DrawableHandle;
use crate::drawable::Drawable;
use crate::error::AnimationError;
use crate::point::{add, sub, Point};

/// Delegates each frame to a caller-supplied function of the drawable.
pub struct UpdateFromFunc {
    base: BaseAnimation,
    function: Box<dyn FnMut(&mut dyn Drawable)>,
}

impl UpdateFromFunc {
    pub fn new(
        mobject: DrawableHandle,
        function: Box<dyn FnMut(&mut dyn Drawable)>,
        params: AnimParams,
    ) -> Self {
        Self {
            base: BaseAnimation::new(mobject, params),
            function,
        }
    }
}

impl Animation for UpdateFromFunc {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, _alpha: f32) -> Result<(), AnimationError> {
        (self.function)(&mut *self.base.mobject().borrow_mut());
        Ok(())
    }
}

/// Like `UpdateFromFunc`, but the callback also receives alpha.
pub struct UpdateFromAlphaFunc {
    base: BaseAnimation,
    function: Box<dyn FnMut(&mut dyn Drawable, f32)>,
}

impl UpdateFromAlphaFunc {
    pub fn new(
        mobject: DrawableHandle,
        function: Box<dyn FnMut(&mut dyn Drawable, f32)>,
        params: AnimParams,
    ) -> Self {
        Self {
            base: BaseAnimation::new(mobject, params),
            function,
        }
    }
}

impl Animation for UpdateFromAlphaFunc {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        (self.function)(&mut *self.base.mobject().borrow_mut(), alpha);
        Ok(())
    }
}

/// Keeps a drawable at a fixed offset from an independently animated
/// drawable's tracked reference point. The offset is computed once at
/// construction and reapplied every frame.
pub struct MaintainPositionRelativeTo {
    base: BaseAnimation,
    tracked: DrawableHandle,
    direction: Point,
    offset: Point,
}

impl MaintainPositionRelativeTo {
    pub fn new(
        mobject: DrawableHandle,
        tracked: DrawableHandle,
        direction: Point,
        params: AnimParams,
    ) -> Self {
        let offset = sub(
            mobject.borrow().get_critical_point(direction),
            tracked.borrow().get_critical_point(direction),
        );
        Self {
            base: BaseAnimation::new(mobject, params),
            tracked,
            direction,
            offset,
        }
    }
}

impl Animation for MaintainPositionRelativeTo {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, _alpha: f32) -> Result<(), AnimationError> {
        let anchor = self.tracked.borrow().get_critical_point(self.direction);
        let own = self
            .base
            .mobject()
            .borrow()
            .get_critical_point(self.direction);
        let delta = add(sub(anchor, own), self.offset);
        self.base.mobject().borrow_mut().shift(delta);
        Ok(())
    }
}
