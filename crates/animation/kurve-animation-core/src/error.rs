//! Error taxonomy. Every variant is a programming error surfaced immediately;
//! nothing here is transient or retryable.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimationError {
    /// A progressive-reveal animation was driven without a bounds policy.
    #[error("progressive reveal invoked without a bounds policy")]
    AbstractContract,

    /// Live drawable and snapshot diverged structurally; per-leaf
    /// interpolation is undefined, so fail fast instead of zipping short.
    #[error("structural mismatch: live drawable has {live} leaves, snapshot has {snapshot}")]
    StructuralMismatch { live: usize, snapshot: usize },

    /// Per-leaf interpolation was requested on an aggregation-only container
    /// that cannot expose member references.
    #[error("drawable does not expose leaf references for interpolation")]
    OpaqueAggregate,
}
