//! Use case orchestration for depline.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod parse;
mod render;
mod report;

pub use parse::{ParseInput, ParseOutput, build_report, run_parse, verdict_exit_code, verdict_for};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report};
