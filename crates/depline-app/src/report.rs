use anyhow::Context;
use depline_types::{DeplineData, ParseReport, SCHEMA_REPORT_V1, ToolError, ToolMeta, Verdict, ids};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "depline".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ParseReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse depline v1 report")
}

pub fn serialize_report(report: &ParseReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Report written when the run itself failed (unreadable input, bad config).
pub fn runtime_error_report(message: &str) -> ParseReport {
    let now = OffsetDateTime::now_utc();
    ParseReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        inputs: Vec::new(),
        dependencies: Vec::new(),
        rules: Vec::new(),
        rejections: Vec::new(),
        errors: vec![ToolError {
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
        }],
        data: DeplineData::default(),
    }
}
