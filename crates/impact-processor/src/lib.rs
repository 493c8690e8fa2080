//! The core analysis: containment classification and impact aggregation.
//!
//! Given a cleaned roster and a merged [`boundary::ImpactZone`], partition
//! the roster into inside/outside and aggregate the inside set by grade
//! band and gender.

pub mod classify;
pub mod summary;

pub use classify::{classify, Classification};
pub use summary::{summarize, ImpactSummary};
