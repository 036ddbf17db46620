//! Shared test utilities for the depline workspace.
//!
//! Integration tests in several crates compare JSON reports and want log output while
//! debugging, so these helpers live in a crate rather than behind `#[cfg(test)]`.

use serde_json::Value;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Install a test-writer subscriber once per process.
///
/// `level` wins over `RUST_LOG`; with neither, nothing is installed and diagnostics stay quiet.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` when the root object is a parse
///    report (has `schema`, `tool`, `verdict` and `dependencies`).
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_report = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("dependencies");
        if is_report
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// Split fixture text into owned lines, the way a file reader would.
pub fn fixture_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_touches_report_tool_version_and_timestamps() {
        let input = json!({
            "schema": "depline.report.v1",
            "tool": { "name": "depline", "version": "0.1.0" },
            "started_at": "2025-01-01T00:00:00Z",
            "finished_at": "2025-01-01T00:00:01Z",
            "verdict": "pass",
            "dependencies": [
                { "group": "org.slf4j", "artifact": "slf4j-api", "version": "1.6.2" }
            ]
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "depline");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");
        assert_eq!(result["dependencies"][0]["version"], "1.6.2");
    }

    #[test]
    fn root_without_report_keys_keeps_tool_version() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "run": { "started_at": "2025-01-01T00:00:00Z" }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        assert_eq!(result["run"]["started_at"], "__TIMESTAMP__");
    }

    #[test]
    fn fixture_lines_drop_terminators() {
        assert_eq!(fixture_lines("a:b:1\r\nc:d:2\n"), vec!["a:b:1", "c:d:2"]);
    }
}
