//! Drawable capability interface.
//!
//! The engine never does concrete geometry itself: rotation matrices, path
//! sampling and smoothing live behind this trait, implemented by whatever
//! renderer or fixture supplies the drawables. The engine only composes these
//! capabilities over time.
//!
//! Structure model:
//! - A drawable is a tree. Leaves hold raw point geometry; containers hold
//!   children and no points of their own.
//! - `family_len` counts leaves that actually carry points, in a stable
//!   depth-first order. That count is the N used by alpha redistribution.
//! - Aggregation-only containers (see `SharedGroup`) report structure but
//!   cannot hand out member references; their accessors return `None`.

use crate::point::{sub, Point};

pub trait Drawable {
    /// Center of the drawable's bounding box.
    fn get_center(&self) -> Point;

    /// Extreme point of the bounding box in `direction` (per axis: negative
    /// component selects the minimum, positive the maximum, zero the center).
    fn get_critical_point(&self, direction: Point) -> Point;

    /// Translate all geometry in place.
    fn shift(&mut self, delta: Point);

    /// Rotate all geometry by `angle` radians about each axis in `axes`, in
    /// order, around `about_point` (the drawable's own center when `None`).
    fn rotate(&mut self, angle: f32, axes: &[Point], about_point: Option<Point>);

    /// Move the center to `point`.
    fn move_to(&mut self, point: Point) {
        let delta = sub(point, self.get_center());
        self.shift(delta);
    }

    /// Pointwise remap of all geometry.
    fn apply_function(&mut self, f: &mut dyn FnMut(Point) -> Point);

    /// Replace this drawable's geometry with the sub-segment of `source`
    /// between fractional bounds `lower..upper` of its arc.
    fn pointwise_become_partial(&mut self, source: &dyn Drawable, lower: f32, upper: f32);

    /// Deep, independent snapshot of the whole tree.
    fn deep_copy(&self) -> Box<dyn Drawable>;

    /// Number of leaves with point geometry, in stable depth-first order.
    fn family_len(&self) -> usize;

    /// Leaf with points at `index` in family order, `None` past the end or on
    /// aggregation-only containers.
    fn family_member(&self, index: usize) -> Option<&dyn Drawable>;

    fn family_member_mut(&mut self, index: usize) -> Option<&mut dyn Drawable>;

    /// Total number of geometry points in the tree.
    fn num_points(&self) -> usize;

    /// Number of direct children (zero for leaves).
    fn children_len(&self) -> usize;

    fn child(&self, index: usize) -> Option<&dyn Drawable>;

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Drawable>;

    /// Make two drawables' leaf structures compatible for pairwise
    /// interpolation (used by drivers before sequential handoff).
    fn align_data(&mut self, other: &mut dyn Drawable);

    /// Raw leaf geometry; containers return an empty slice.
    fn points(&self) -> &[Point];

    /// Replace raw leaf geometry; no-op on containers.
    fn set_points(&mut self, points: &[Point]);

    /// Re-smooth vector geometry after a pointwise warp.
    fn make_smooth(&mut self);

    /// A single-point drawable at this drawable's center, used to animate
    /// centers independently of full geometry.
    fn point_drawable(&self) -> Box<dyn Drawable>;
}

/// Path objects a drawable can travel along.
pub trait Path {
    /// Point at fractional position `alpha` in [0,1] along the path.
    fn point_from_proportion(&self, alpha: f32) -> Point;
}
