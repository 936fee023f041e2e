//! Kurve Animation Core (renderer-agnostic)
//!
//! A timeline/interpolation engine for procedurally generated animation:
//! given a hierarchical drawable and a normalized progress value, produce a
//! deterministic visual state at that instant, and compose many such timed
//! mutations sequentially, in parallel, or with per-point staggering.
//!
//! Concrete geometry (rotation matrices, path sampling, smoothing) lives
//! behind the `Drawable` capability trait; this crate only composes those
//! capabilities over time.

pub mod animation;
pub mod centers;
pub mod config;
pub mod container;
pub mod drawable;
pub mod error;
pub mod flow;
pub mod follow;
pub mod homotopy;
pub mod parallel;
pub mod point;
pub mod rate;
pub mod reveal;
pub mod rotating;
pub mod stagger;
pub mod succession;
pub mod updaters;

// Re-exports for consumers (drivers and drawable implementations).
pub use animation::{Animation, BaseAnimation, PointwiseAnimation};
pub use centers::ApplyToCenters;
pub use config::{AnimParams, SubmobjectMode};
pub use container::{DrawableHandle, Group, SharedGroup};
pub use drawable::{Drawable, Path};
pub use error::AnimationError;
pub use flow::{PhaseFlow, PhaseFlowConfig, VectorField};
pub use follow::MoveAlongPath;
pub use homotopy::{Homotopy, HomotopyFn};
pub use parallel::AnimationGroup;
pub use point::Point;
pub use rate::RateFunc;
pub use reveal::{PartialReveal, RevealBounds, RevealConfig};
pub use rotating::{Rotating, RotatingConfig};
pub use stagger::{DelayByOrder, DelayByOrderConfig};
pub use succession::Succession;
pub use updaters::{MaintainPositionRelativeTo, UpdateFromAlphaFunc, UpdateFromFunc};
