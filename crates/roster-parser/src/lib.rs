//! School roster ingestion.
//!
//! Reads tabular school records (CSV) into cleaned [`impact_common::School`]
//! values, tolerating the messiness of real Excel exports.

pub mod error;
pub mod reader;

pub use error::{Result, RosterError};
pub use reader::{parse_roster, read_roster, Roster, RosterStats};
