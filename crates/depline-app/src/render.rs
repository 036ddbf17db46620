//! Render use cases: markdown and GitHub annotations from in-memory reports.

use depline_types::ParseReport;

pub fn render_markdown(report: &ParseReport) -> String {
    depline_render::render_markdown(report)
}

pub fn render_annotations(report: &ParseReport, max: usize) -> Vec<String> {
    depline_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::runtime_error_report;
    use depline_types::{Location, Rejection, SourcePath, Verdict};

    fn sample_report() -> ParseReport {
        let mut report = runtime_error_report("unused");
        report.errors.clear();
        report.verdict = Verdict::Warn;
        for line in [3, 9] {
            report.rejections.push(Rejection {
                code: "missing_field".to_string(),
                message: "missing version".to_string(),
                raw: "a:b:".to_string(),
                location: Location {
                    path: SourcePath::new("deps.txt"),
                    line: Some(line),
                },
            });
        }
        report
    }

    #[test]
    fn render_annotations_respects_max() {
        let report = sample_report();
        assert_eq!(render_annotations(&report, 1).len(), 1);
        assert_eq!(render_annotations(&report, 10).len(), 2);
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.contains("## Rejected lines"));
    }
}
