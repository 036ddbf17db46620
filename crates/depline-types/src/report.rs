use crate::SourcePath;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for depline parse reports.
pub const SCHEMA_REPORT_V1: &str = "depline.report.v1";

/// Overall result of a parse run; maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: SourcePath,
    /// 1-based line number within `path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// One extracted dependency, flattened for serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub location: Location,
}

impl DependencyEntry {
    /// `group:artifact:version`, with the classifier spliced in when present.
    pub fn coordinates(&self) -> String {
        match &self.classifier {
            Some(c) => format!("{}:{}:{}:{}", self.group, self.artifact, c, self.version),
            None => format!("{}:{}:{}", self.group, self.artifact, self.version),
        }
    }
}

/// An arbiter rule handed to the rule registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub body: String,
    pub location: Location,
}

/// A line that looked like a dependency but could not be turned into one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub code: String,
    pub message: String,
    /// The raw line, verbatim.
    pub raw: String,
    pub location: Location,
}

/// Failure of the tool itself (unreadable input, bad config).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
}

/// Per-input counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSummary {
    pub path: SourcePath,
    pub lines: u32,
    pub dependencies: u32,
    pub ignored: u32,
    pub parse_errors: u32,
}

/// Totals across every input of the run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeplineData {
    pub inputs_scanned: u32,
    pub lines_scanned: u32,
    pub dependencies_found: u32,
    pub ignored_lines: u32,
    pub parse_errors: u32,
    pub rules_registered: u32,
    #[serde(default)]
    pub rules_dropped: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    #[serde(default)]
    pub inputs: Vec<InputSummary>,
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
    #[serde(default)]
    pub rejections: Vec<Rejection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ToolError>,
    pub data: DeplineData,
}
