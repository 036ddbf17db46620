//! Pure line classification (no IO).
//!
//! Input: raw text lines from `mvn dependency:list` output, Bazel WORKSPACE files, or both.
//! Output: dependency records, arbiter rules handed to a registry, and diagnostic counters.

#![forbid(unsafe_code)]

pub mod classify;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use classify::{Classification, Classifier, IgnoreReason, RejectReason, classify_line};
pub use engine::{BatchError, BatchOutcome, LineEvent, process_lines, try_process_lines};
pub use model::{Coordinates, DependencyError, Field, MavenDependency};
pub use rules::{RuleBook, RuleHandle, RuleRegistry};
