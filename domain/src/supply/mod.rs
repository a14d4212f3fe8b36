//! Question supply domain
//!
//! The reuse policy that splits a request between stored and freshly
//! generated questions, and the outcome type describing the split.

pub mod outcome;
pub mod policy;

pub use outcome::{Provenance, SupplyOutcome};
pub use policy::{
    DEFAULT_INITIAL_RATIO, DEFAULT_MATURE_RATIO, DEFAULT_MATURE_THRESHOLD, MaturityTier,
    ReusePolicy,
};
