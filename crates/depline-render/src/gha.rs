use depline_types::{ParseReport, Verdict};

/// Render rejected lines as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::{message}`
///
/// Rejections are errors when the run failed and warnings otherwise. Lines read from stdin carry
/// no `file=`.
pub fn render_github_annotations(report: &ParseReport) -> Vec<String> {
    let level = match report.verdict {
        Verdict::Fail => "error",
        Verdict::Pass | Verdict::Warn => "warning",
    };

    let mut out = Vec::new();

    for r in &report.rejections {
        let mut meta = String::new();
        if !r.location.path.is_stdin() {
            meta.push_str(&format!("file={}", escape_property(r.location.path.as_str())));
            if let Some(line) = r.location.line {
                meta.push_str(&format!(",line={}", line));
            }
        }

        let message = escape_data(&format!("[depline:{}] {}: {}", r.code, r.message, r.raw));

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
