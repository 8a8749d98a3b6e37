//! # settle-report
//!
//! Report builder: a pure projection over an already-aggregated
//! set of groups. It never recomputes totals or date sets (those are
//! computed once, during aggregation) — it only renders them as CSV
//! rows, per-group extract files, and a ZIP archive.

pub mod archive;
pub mod csv;

pub use archive::{archive_filename, build_archive};
pub use csv::{build_group_extract, build_summary_csv, format_amount, group_extract_filename};
