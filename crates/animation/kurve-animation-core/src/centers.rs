//! Center extraction: run an inner animation against a synthetic drawable of
//! extracted center points, and each frame shift every real drawable by the
//! delta between its synthetic point's new center and its own.
//!
//! The synthetic container and the target list are built together, so their
//! orderings stay aligned 1:1 by construction.

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::{Animation, BaseAnimation};
use crate::container::{DrawableHandle, Group, SharedGroup};
use crate::drawable::Drawable;
use crate::error::AnimationError;
use crate::point::sub;

pub struct ApplyToCenters {
    base: BaseAnimation,
    inner: Box<dyn Animation>,
    centers: Rc<RefCell<Group>>,
    targets: Vec<DrawableHandle>,
}

impl ApplyToCenters {
    /// `build` receives the synthetic centers drawable and constructs the
    /// inner animation that will drive it.
    pub fn new(
        targets: Vec<DrawableHandle>,
        build: impl FnOnce(DrawableHandle) -> Box<dyn Animation>,
    ) -> Self {
        let points: Vec<Box<dyn Drawable>> = targets
            .iter()
            .map(|target| target.borrow().point_drawable())
            .collect();
        let centers = Rc::new(RefCell::new(Group::new(points)));
        let centers_handle: DrawableHandle = centers.clone();
        let inner = build(centers_handle);

        let aggregate: DrawableHandle =
            Rc::new(RefCell::new(SharedGroup::new(targets.clone())));
        let base = BaseAnimation::new(aggregate, inner.base().params().clone());
        Self {
            base,
            inner,
            centers,
            targets,
        }
    }
}

impl Animation for ApplyToCenters {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        self.inner.update_mobject(alpha)?;
        let centers = self.centers.borrow();
        for (i, target) in self.targets.iter().enumerate() {
            let Some(center_mob) = centers.child(i) else {
                continue;
            };
            let mut target = target.borrow_mut();
            let delta = sub(center_mob.get_center(), target.get_center());
            target.shift(delta);
        }
        Ok(())
    }

    fn clean_up(&mut self) {
        self.inner.clean_up();
    }
}
