use serde::{Deserialize, Serialize};

/// `depline.toml` schema v1.
///
/// Every key is optional; a missing file and an empty file mean the same thing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeplineConfigV1 {
    /// Optional schema string for tooling (`depline.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `lenient` (default) or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Five-part lines with an unknown scope: `infer` or `reject`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambiguous_layout: Option<String>,

    /// Coordinate fields: `lenient` (any non-empty text) or `strict` (no whitespace).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,

    /// Hand `# RULE` lines to the rule registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<bool>,

    /// When to fail the run: `never` or `parse_error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,
}
