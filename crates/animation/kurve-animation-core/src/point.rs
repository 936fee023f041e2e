//! Point helpers:
//! - component-wise add/sub/scale
//! - lerp_point (linear blend)
//! - direction constants used by critical-point queries

/// All geometry uses f32 triples (x, y, z).
pub type Point = [f32; 3];

pub const ORIGIN: Point = [0.0, 0.0, 0.0];
pub const RIGHT: Point = [1.0, 0.0, 0.0];
pub const LEFT: Point = [-1.0, 0.0, 0.0];
pub const UP: Point = [0.0, 1.0, 0.0];
pub const DOWN: Point = [0.0, -1.0, 0.0];
/// Out of the screen, the default rotation axis.
pub const OUT: Point = [0.0, 0.0, 1.0];
pub const IN: Point = [0.0, 0.0, -1.0];

#[inline]
pub fn add(a: Point, b: Point) -> Point {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(p: Point, s: f32) -> Point {
    [p[0] * s, p[1] * s, p[2] * s]
}

#[inline]
pub fn dot(a: Point, b: Point) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: Point, b: Point) -> Point {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(p: Point) -> f32 {
    dot(p, p).sqrt()
}

/// Normalize, returning the input unchanged when its length is zero.
#[inline]
pub fn normalize(p: Point) -> Point {
    let len = norm(p);
    if len > 0.0 {
        scale(p, len.recip())
    } else {
        p
    }
}

/// Linear interpolation of points.
#[inline]
pub fn lerp_point(a: Point, b: Point, t: f32) -> Point {
    add(a, scale(sub(b, a), t))
}
