//! Impact report serialization.
//!
//! Takes the classification and summary from `impact-processor` and writes
//! them out as CSV (Excel-friendly), GeoJSON, JSON, or plain text.

pub mod csv;
pub mod error;
pub mod geojson;
pub mod json;
pub mod text;

pub use crate::csv::{save_schools_csv, write_schools_csv};
pub use crate::geojson::{schools_feature_collection, write_schools_geojson};
pub use crate::json::write_summary_json;
pub use crate::text::{render_school_list, render_summary};
pub use error::{ReportError, Result};
