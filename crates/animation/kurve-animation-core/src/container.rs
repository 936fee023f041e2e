//! Tree containers over the drawable capability interface.
//!
//! - `Group`: an owned drawable tree. Used for snapshots, synthetic
//!   center-point containers, and as the general-purpose grouping node.
//! - `SharedGroup`: aggregates shared drawable handles without owning them.
//!   Composites use it as their bookkeeping mobject; mutation of the members
//!   always happens through the child animations' own handles.
//!
//! Neither container does real geometry: every operation delegates to members
//! and the only math here is bounding-box aggregation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::drawable::Drawable;
use crate::point::{Point, ORIGIN};

/// Shared handle to a drawable; exactly one animation mutates it at a time.
pub type DrawableHandle = Rc<RefCell<dyn Drawable>>;

fn fold_bounds(lo: &mut Point, hi: &mut Point, part: &dyn Drawable) {
    for k in 0..3 {
        let mut dir = ORIGIN;
        dir[k] = -1.0;
        lo[k] = lo[k].min(part.get_critical_point(dir)[k]);
        dir[k] = 1.0;
        hi[k] = hi[k].max(part.get_critical_point(dir)[k]);
    }
}

fn critical_from_bounds(bounds: Option<(Point, Point)>, direction: Point) -> Point {
    let Some((lo, hi)) = bounds else {
        return ORIGIN;
    };
    let mut out = ORIGIN;
    for k in 0..3 {
        out[k] = if direction[k] < 0.0 {
            lo[k]
        } else if direction[k] > 0.0 {
            hi[k]
        } else {
            (lo[k] + hi[k]) / 2.0
        };
    }
    out
}

/// Owned drawable tree node.
#[derive(Default)]
pub struct Group {
    children: Vec<Box<dyn Drawable>>,
}

impl Group {
    pub fn new(children: Vec<Box<dyn Drawable>>) -> Self {
        Self { children }
    }

    pub fn push(&mut self, child: Box<dyn Drawable>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn Drawable>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Drawable>] {
        &mut self.children
    }

    fn bounds(&self) -> Option<(Point, Point)> {
        let mut lo = [f32::INFINITY; 3];
        let mut hi = [f32::NEG_INFINITY; 3];
        let mut any = false;
        for child in &self.children {
            if child.num_points() == 0 {
                continue;
            }
            fold_bounds(&mut lo, &mut hi, child.as_ref());
            any = true;
        }
        any.then_some((lo, hi))
    }
}

impl Drawable for Group {
    fn get_center(&self) -> Point {
        critical_from_bounds(self.bounds(), ORIGIN)
    }

    fn get_critical_point(&self, direction: Point) -> Point {
        critical_from_bounds(self.bounds(), direction)
    }

    fn shift(&mut self, delta: Point) {
        for child in &mut self.children {
            child.shift(delta);
        }
    }

    fn rotate(&mut self, angle: f32, axes: &[Point], about_point: Option<Point>) {
        // Resolve the pivot once so children rotate around a common point.
        let pivot = about_point.unwrap_or_else(|| self.get_center());
        for child in &mut self.children {
            child.rotate(angle, axes, Some(pivot));
        }
    }

    fn apply_function(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        for child in &mut self.children {
            child.apply_function(f);
        }
    }

    fn pointwise_become_partial(&mut self, source: &dyn Drawable, lower: f32, upper: f32) {
        for i in 0..self.family_len() {
            if let Some(src) = source.family_member(i) {
                if let Some(leaf) = self.family_member_mut(i) {
                    leaf.pointwise_become_partial(src, lower, upper);
                }
            }
        }
    }

    fn deep_copy(&self) -> Box<dyn Drawable> {
        Box::new(Group {
            children: self.children.iter().map(|c| c.deep_copy()).collect(),
        })
    }

    fn family_len(&self) -> usize {
        self.children.iter().map(|c| c.family_len()).sum()
    }

    fn family_member(&self, index: usize) -> Option<&dyn Drawable> {
        let mut offset = index;
        for child in &self.children {
            let n = child.family_len();
            if offset < n {
                return child.family_member(offset);
            }
            offset -= n;
        }
        None
    }

    fn family_member_mut(&mut self, index: usize) -> Option<&mut dyn Drawable> {
        let mut offset = index;
        for child in &mut self.children {
            let n = child.family_len();
            if offset < n {
                return child.family_member_mut(offset);
            }
            offset -= n;
        }
        None
    }

    fn num_points(&self) -> usize {
        self.children.iter().map(|c| c.num_points()).sum()
    }

    fn children_len(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&dyn Drawable> {
        self.children.get(index).map(|c| c.as_ref())
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Drawable> {
        match self.children.get_mut(index) {
            Some(c) => Some(c.as_mut()),
            None => None,
        }
    }

    fn align_data(&mut self, other: &mut dyn Drawable) {
        let n = self.family_len().min(other.family_len());
        for i in 0..n {
            if let Some(leaf) = self.family_member_mut(i) {
                if let Some(other_leaf) = other.family_member_mut(i) {
                    leaf.align_data(other_leaf);
                }
            }
        }
    }

    fn points(&self) -> &[Point] {
        &[]
    }

    fn set_points(&mut self, _points: &[Point]) {}

    fn make_smooth(&mut self) {
        for child in &mut self.children {
            child.make_smooth();
        }
    }

    fn point_drawable(&self) -> Box<dyn Drawable> {
        match self.children.first() {
            Some(child) => {
                let mut point = child.point_drawable();
                point.move_to(self.get_center());
                point
            }
            None => Box::new(Group::default()),
        }
    }
}

/// Aggregation-only container over shared handles. Reports structure and
/// forwards whole-tree mutation, but never exposes member references: per-leaf
/// interpolation against a `SharedGroup` is a contract violation surfaced as
/// `AnimationError::OpaqueAggregate`.
pub struct SharedGroup {
    handles: Vec<DrawableHandle>,
}

impl SharedGroup {
    pub fn new(handles: Vec<DrawableHandle>) -> Self {
        Self { handles }
    }

    pub fn handles(&self) -> &[DrawableHandle] {
        &self.handles
    }

    fn bounds(&self) -> Option<(Point, Point)> {
        let mut lo = [f32::INFINITY; 3];
        let mut hi = [f32::NEG_INFINITY; 3];
        let mut any = false;
        for handle in &self.handles {
            let part = handle.borrow();
            if part.num_points() == 0 {
                continue;
            }
            fold_bounds(&mut lo, &mut hi, &*part);
            any = true;
        }
        any.then_some((lo, hi))
    }
}

impl Drawable for SharedGroup {
    fn get_center(&self) -> Point {
        critical_from_bounds(self.bounds(), ORIGIN)
    }

    fn get_critical_point(&self, direction: Point) -> Point {
        critical_from_bounds(self.bounds(), direction)
    }

    fn shift(&mut self, delta: Point) {
        for handle in &self.handles {
            handle.borrow_mut().shift(delta);
        }
    }

    fn rotate(&mut self, angle: f32, axes: &[Point], about_point: Option<Point>) {
        let pivot = about_point.unwrap_or_else(|| self.get_center());
        for handle in &self.handles {
            handle.borrow_mut().rotate(angle, axes, Some(pivot));
        }
    }

    fn apply_function(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        for handle in &self.handles {
            handle.borrow_mut().apply_function(f);
        }
    }

    fn pointwise_become_partial(&mut self, source: &dyn Drawable, lower: f32, upper: f32) {
        for (i, handle) in self.handles.iter().enumerate() {
            if let Some(src) = source.child(i) {
                handle.borrow_mut().pointwise_become_partial(src, lower, upper);
            }
        }
    }

    fn deep_copy(&self) -> Box<dyn Drawable> {
        Box::new(Group::new(
            self.handles.iter().map(|h| h.borrow().deep_copy()).collect(),
        ))
    }

    fn family_len(&self) -> usize {
        self.handles.iter().map(|h| h.borrow().family_len()).sum()
    }

    fn family_member(&self, _index: usize) -> Option<&dyn Drawable> {
        None
    }

    fn family_member_mut(&mut self, _index: usize) -> Option<&mut dyn Drawable> {
        None
    }

    fn num_points(&self) -> usize {
        self.handles.iter().map(|h| h.borrow().num_points()).sum()
    }

    fn children_len(&self) -> usize {
        self.handles.len()
    }

    fn child(&self, _index: usize) -> Option<&dyn Drawable> {
        None
    }

    fn child_mut(&mut self, _index: usize) -> Option<&mut dyn Drawable> {
        None
    }

    fn align_data(&mut self, _other: &mut dyn Drawable) {
        // Aggregates hold no geometry of their own; alignment happens on the
        // members through their owning animations.
    }

    fn points(&self) -> &[Point] {
        &[]
    }

    fn set_points(&mut self, _points: &[Point]) {}

    fn make_smooth(&mut self) {
        for handle in &self.handles {
            handle.borrow_mut().make_smooth();
        }
    }

    fn point_drawable(&self) -> Box<dyn Drawable> {
        match self.handles.first() {
            Some(handle) => {
                let mut point = handle.borrow().point_drawable();
                point.move_to(self.get_center());
                point
            }
            None => Box::new(Group::default()),
        }
    }
}
