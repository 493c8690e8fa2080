//! Common types shared across the school-impact workspace.

pub mod bbox;
pub mod category;
pub mod error;
pub mod filter;
pub mod school;

pub use bbox::BoundingBox;
pub use category::{CategoryRules, GradeBand};
pub use error::{ImpactError, ImpactResult};
pub use filter::RosterFilter;
pub use school::{Gender, School};
