use depline_types::{Location, ParseReport, Verdict};

pub fn render_markdown(report: &ParseReport) -> String {
    let mut out = String::new();

    out.push_str("# Depline report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    let d = &report.data;
    out.push_str(&format!(
        "- Verdict: **{}**\n- Inputs: {} ({} lines)\n- Dependencies: {}\n- Ignored lines: {} ({} parse errors)\n- Rules: {} registered",
        verdict,
        d.inputs_scanned,
        d.lines_scanned,
        d.dependencies_found,
        d.ignored_lines,
        d.parse_errors,
        d.rules_registered,
    ));
    if d.rules_dropped > 0 {
        out.push_str(&format!(", {} dropped", d.rules_dropped));
    }
    out.push_str("\n\n");

    for e in &report.errors {
        out.push_str(&format!("> Error (`{}`): {}\n\n", e.code, e.message));
    }

    if report.inputs.len() > 1 {
        out.push_str("## Inputs\n\n");
        out.push_str("| Input | Lines | Dependencies | Ignored | Parse errors |\n");
        out.push_str("|---|---:|---:|---:|---:|\n");
        for i in &report.inputs {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                cell(i.path.as_str()),
                i.lines,
                i.dependencies,
                i.ignored,
                i.parse_errors
            ));
        }
        out.push('\n');
    }

    if report.dependencies.is_empty() {
        out.push_str("No dependencies found.\n");
    } else {
        out.push_str("## Dependencies\n\n");
        out.push_str("| Coordinates | Scope | Location |\n");
        out.push_str("|---|---|---|\n");
        for dep in &report.dependencies {
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                cell(&dep.coordinates()),
                cell(&dep.scope),
                location(&dep.location)
            ));
        }
    }

    if !report.rules.is_empty() {
        out.push_str("\n## Rules\n\n");
        for rule in &report.rules {
            out.push_str(&format!("- `{}` ({})\n", rule.body, location(&rule.location)));
        }
    }

    if !report.rejections.is_empty() {
        out.push_str("\n## Rejected lines\n\n");
        for r in &report.rejections {
            out.push_str(&format!(
                "- `{}` {}: {}\n  - line: `{}`\n",
                r.code,
                location(&r.location),
                r.message,
                r.raw.trim()
            ));
        }
    }

    out
}

fn location(loc: &Location) -> String {
    match loc.line {
        Some(line) => format!("`{}`:{}", cell(loc.path.as_str()), line),
        None => format!("`{}`", cell(loc.path.as_str())),
    }
}

fn cell(s: &str) -> String {
    s.replace('|', "\\|")
}
