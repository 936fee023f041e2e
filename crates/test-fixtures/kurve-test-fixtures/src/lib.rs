//! Concrete drawable fixtures for exercising the animation core.
//!
//! `VPath` is a flat polyline: the minimal leaf drawable with real geometry
//! (bounding boxes, Rodrigues rotation, proportional partial reveal,
//! neighbor-average smoothing). Trees are built by putting `VPath` leaves
//! into the core's `Group` container.

use kurve_animation_core::container::Group;
use kurve_animation_core::drawable::{Drawable, Path};
use kurve_animation_core::point::{self, Point, ORIGIN};

/// Rotate `p` around `axis` (through the origin) by `angle` radians.
fn rotate_about_axis(p: Point, axis: Point, angle: f32) -> Point {
    let k = point::normalize(axis);
    let (sin, cos) = angle.sin_cos();
    // Rodrigues: v cosθ + (k×v) sinθ + k (k·v)(1−cosθ)
    point::add(
        point::add(point::scale(p, cos), point::scale(point::cross(k, p), sin)),
        point::scale(k, point::dot(k, p) * (1.0 - cos)),
    )
}

/// Point at fractional index `t` (in units of segments) along `points`.
fn sample_at(points: &[Point], t: f32) -> Point {
    let last = points.len() - 1;
    let i = (t.floor() as usize).min(last);
    if i == last {
        return points[last];
    }
    point::lerp_point(points[i], points[i + 1], t - i as f32)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VPath {
    points: Vec<Point>,
}

impl VPath {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Straight line from `a` to `b` sampled into `segments` segments.
    pub fn line(a: Point, b: Point, segments: usize) -> Self {
        let n = segments.max(1);
        let points = (0..=n)
            .map(|i| point::lerp_point(a, b, i as f32 / n as f32))
            .collect();
        Self { points }
    }

    /// Axis-aligned closed square centered on the origin.
    pub fn square(side: f32) -> Self {
        let h = side / 2.0;
        Self::new(vec![
            [h, h, 0.0],
            [-h, h, 0.0],
            [-h, -h, 0.0],
            [h, -h, 0.0],
            [h, h, 0.0],
        ])
    }

    /// Closed polygonal approximation of a circle.
    pub fn circle(radius: f32, segments: usize) -> Self {
        let n = segments.max(3);
        let points = (0..=n)
            .map(|i| {
                let theta = std::f32::consts::TAU * i as f32 / n as f32;
                [radius * theta.cos(), radius * theta.sin(), 0.0]
            })
            .collect();
        Self { points }
    }

    fn bounds(&self) -> Option<(Point, Point)> {
        if self.points.is_empty() {
            return None;
        }
        let mut lo = [f32::INFINITY; 3];
        let mut hi = [f32::NEG_INFINITY; 3];
        for p in &self.points {
            for k in 0..3 {
                lo[k] = lo[k].min(p[k]);
                hi[k] = hi[k].max(p[k]);
            }
        }
        Some((lo, hi))
    }
}

/// A group of `VPath` leaves, the common multi-leaf fixture shape.
pub fn path_group(paths: Vec<VPath>) -> Group {
    Group::new(
        paths
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn Drawable>)
            .collect(),
    )
}

impl Drawable for VPath {
    fn get_center(&self) -> Point {
        match self.bounds() {
            Some((lo, hi)) => [
                (lo[0] + hi[0]) / 2.0,
                (lo[1] + hi[1]) / 2.0,
                (lo[2] + hi[2]) / 2.0,
            ],
            None => ORIGIN,
        }
    }

    fn get_critical_point(&self, direction: Point) -> Point {
        let Some((lo, hi)) = self.bounds() else {
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

    fn shift(&mut self, delta: Point) {
        for p in &mut self.points {
            *p = point::add(*p, delta);
        }
    }

    fn rotate(&mut self, angle: f32, axes: &[Point], about_point: Option<Point>) {
        let pivot = about_point.unwrap_or_else(|| self.get_center());
        for axis in axes {
            for p in &mut self.points {
                let local = point::sub(*p, pivot);
                *p = point::add(rotate_about_axis(local, *axis, angle), pivot);
            }
        }
    }

    fn apply_function(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        for p in &mut self.points {
            *p = f(*p);
        }
    }

    fn pointwise_become_partial(&mut self, source: &dyn Drawable, lower: f32, upper: f32) {
        let src = source.points();
        if src.is_empty() {
            self.points.clear();
            return;
        }
        let lower = lower.clamp(0.0, 1.0);
        let upper = upper.clamp(lower, 1.0);
        if src.len() == 1 {
            self.points = vec![src[0]];
            return;
        }
        let span = (src.len() - 1) as f32;
        let t0 = lower * span;
        let t1 = upper * span;
        let mut out = vec![sample_at(src, t0)];
        let first_inner = t0.floor() as usize + 1;
        for (i, p) in src.iter().enumerate().skip(first_inner) {
            if (i as f32) < t1 {
                out.push(*p);
            }
        }
        if t1 > t0 {
            out.push(sample_at(src, t1));
        }
        self.points = out;
    }

    fn deep_copy(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }

    fn family_len(&self) -> usize {
        usize::from(!self.points.is_empty())
    }

    fn family_member(&self, index: usize) -> Option<&dyn Drawable> {
        (index == 0 && !self.points.is_empty()).then_some(self as &dyn Drawable)
    }

    fn family_member_mut(&mut self, index: usize) -> Option<&mut dyn Drawable> {
        (index == 0 && !self.points.is_empty()).then_some(self as &mut dyn Drawable)
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn children_len(&self) -> usize {
        0
    }

    fn child(&self, _index: usize) -> Option<&dyn Drawable> {
        None
    }

    fn child_mut(&mut self, _index: usize) -> Option<&mut dyn Drawable> {
        None
    }

    fn align_data(&mut self, other: &mut dyn Drawable) {
        // Pad the shorter polyline by repeating its last point until both
        // carry the same count.
        let target = self.points.len().max(other.points().len());
        let pad = |points: &[Point]| -> Vec<Point> {
            let mut out = points.to_vec();
            let fill = out.last().copied().unwrap_or(ORIGIN);
            out.resize(target, fill);
            out
        };
        if self.points.len() < target {
            self.points = pad(&self.points);
        }
        if other.points().len() < target {
            let padded = pad(other.points());
            other.set_points(&padded);
        }
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn set_points(&mut self, points: &[Point]) {
        self.points = points.to_vec();
    }

    fn make_smooth(&mut self) {
        if self.points.len() < 3 {
            return;
        }
        let old = self.points.clone();
        for i in 1..old.len() - 1 {
            let sum = point::add(
                point::add(old[i - 1], point::scale(old[i], 2.0)),
                old[i + 1],
            );
            self.points[i] = point::scale(sum, 0.25);
        }
    }

    fn point_drawable(&self) -> Box<dyn Drawable> {
        Box::new(VPath::new(vec![self.get_center()]))
    }
}

impl Path for VPath {
    /// Proportional position along the polyline, uniform in segment index.
    fn point_from_proportion(&self, alpha: f32) -> Point {
        if self.points.is_empty() {
            return ORIGIN;
        }
        if self.points.len() == 1 {
            return self.points[0];
        }
        let span = (self.points.len() - 1) as f32;
        sample_at(&self.points, alpha.clamp(0.0, 1.0) * span)
    }
}
