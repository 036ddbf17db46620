//! Rendering utilities for CI surfaces (Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;

#[cfg(test)]
pub(crate) mod test_report {
    use depline_types::{
        DependencyEntry, DeplineData, InputSummary, Location, ParseReport, Rejection, RuleEntry,
        SCHEMA_REPORT_V1, SourcePath, ToolMeta, Verdict,
    };
    use time::macros::datetime;

    fn at(path: &str, line: u32) -> Location {
        Location {
            path: SourcePath::new(path),
            line: Some(line),
        }
    }

    pub fn empty(verdict: Verdict) -> ParseReport {
        ParseReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "depline".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2024-01-02 03:04:05 UTC),
            finished_at: datetime!(2024-01-02 03:04:06 UTC),
            verdict,
            inputs: Vec::new(),
            dependencies: Vec::new(),
            rules: Vec::new(),
            rejections: Vec::new(),
            errors: Vec::new(),
            data: DeplineData::default(),
        }
    }

    pub fn sample(verdict: Verdict) -> ParseReport {
        let mut report = empty(verdict);
        report.inputs = vec![InputSummary {
            path: SourcePath::new("third_party/WORKSPACE"),
            lines: 6,
            dependencies: 2,
            ignored: 3,
            parse_errors: 1,
        }];
        report.dependencies = vec![
            DependencyEntry {
                group: "org.slf4j".to_string(),
                artifact: "slf4j-api".to_string(),
                version: "1.6.2".to_string(),
                scope: "compile".to_string(),
                classifier: None,
                location: at("third_party/WORKSPACE", 2),
            },
            DependencyEntry {
                group: "io.netty".to_string(),
                artifact: "netty-transport-native-epoll".to_string(),
                version: "4.1.8.Final".to_string(),
                scope: "compile".to_string(),
                classifier: Some("linux-x86_64".to_string()),
                location: at("third_party/WORKSPACE", 3),
            },
        ];
        report.rules = vec![RuleEntry {
            body: "exclude com.foo:bar".to_string(),
            location: at("third_party/WORKSPACE", 1),
        }];
        report.rejections = vec![Rejection {
            code: "missing_field".to_string(),
            message: "missing artifact".to_string(),
            raw: "org.foo::1.0 | 50%".to_string(),
            location: at("third_party/WORKSPACE", 5),
        }];
        report.data = DeplineData {
            inputs_scanned: 1,
            lines_scanned: 6,
            dependencies_found: 2,
            ignored_lines: 3,
            parse_errors: 1,
            rules_registered: 1,
            rules_dropped: 0,
        };
        report
    }
}
