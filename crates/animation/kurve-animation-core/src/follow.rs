//! Path following: move the drawable's center to the point at fractional
//! position alpha along a supplied path.

use crate::animation::{Animation, BaseAnimation};
use crate::config::AnimParams;
use crate::container::DrawableHandle;
use crate::drawable::Path;
use crate::error::AnimationError;

pub struct MoveAlongPath {
    base: BaseAnimation,
    path: Box<dyn Path>,
}

impl MoveAlongPath {
    pub fn new(mobject: DrawableHandle, path: Box<dyn Path>, params: AnimParams) -> Self {
        Self {
            base: BaseAnimation::new(mobject, params),
            path,
        }
    }
}

impl Animation for MoveAlongPath {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        let target = self.path.point_from_proportion(alpha);
        self.base.mobject().borrow_mut().move_to(target);
        Ok(())
    }
}
