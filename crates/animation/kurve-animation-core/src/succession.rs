//! Sequential composition: N children played back to back within one alpha.
//!
//! Global alpha a selects `index = min(floor(a*N), N-1)` and drives that child
//! with local alpha `a*N - index`. Crossing a boundary retires the previous
//! child (exactly one `clean_up`); when consecutive children share the same
//! drawable handle, the incoming child's snapshot is recaptured from the
//! post-previous state so chained mutations compose continuously.

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::{Animation, BaseAnimation};
use crate::config::AnimParams;
use crate::container::{DrawableHandle, SharedGroup};
use crate::error::AnimationError;

pub struct Succession {
    base: BaseAnimation,
    anims: Vec<Box<dyn Animation>>,
    last_index: usize,
    cleaned: Vec<bool>,
}

impl Succession {
    /// Total duration defaults to the sum of the children's durations.
    pub fn new(anims: Vec<Box<dyn Animation>>) -> Self {
        let total = anims.iter().map(|a| a.run_time()).sum();
        Self::build(anims, total)
    }

    pub fn with_run_time(anims: Vec<Box<dyn Animation>>, run_time: f32) -> Self {
        Self::build(anims, run_time)
    }

    fn build(anims: Vec<Box<dyn Animation>>, run_time: f32) -> Self {
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
        let count = anims.len();
        Self {
            base,
            anims,
            last_index: 0,
            cleaned: vec![false; count],
        }
    }

    /// Index of the child driven by the most recent update.
    pub fn current_index(&self) -> usize {
        self.last_index
    }
}

impl Animation for Succession {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), AnimationError> {
        if self.anims.is_empty() {
            return Ok(());
        }
        let count = self.anims.len();
        let scaled = alpha * count as f32;
        let index = (scaled.floor() as usize).min(count - 1);

        if index != self.last_index {
            let previous = self.last_index;
            log::debug!("succession switchover {previous} -> {index}");
            if !self.cleaned[previous] {
                self.anims[previous].clean_up();
                self.cleaned[previous] = true;
            }
            let previous_mobject = self.anims[previous].base().mobject().clone();
            let current = &mut self.anims[index];
            if Rc::ptr_eq(&previous_mobject, current.base().mobject())
                && current.supports_rebase()
            {
                current.rebase();
            }
        }

        self.anims[index].update(scaled - index as f32)?;
        self.last_index = index;
        Ok(())
    }

    fn clean_up(&mut self) {
        for (anim, cleaned) in self.anims.iter_mut().zip(self.cleaned.iter_mut()) {
            if !*cleaned {
                anim.clean_up();
                *cleaned = true;
            }
        }
    }
}
