//! Stable DTOs and IDs used across the depline workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted parse report
//! - stable string codes for rejected lines
//! - canonical input path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::SourcePath;
pub use report::{
    DependencyEntry, DeplineData, InputSummary, Location, ParseReport, Rejection, RuleEntry,
    SCHEMA_REPORT_V1, ToolError, ToolMeta, Verdict,
};
