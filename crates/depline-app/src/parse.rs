//! The `parse` use case: classify every input and produce a report.

use anyhow::Context;
use camino::Utf8PathBuf;
use depline_domain::policy::FailOn;
use depline_domain::{Classifier, LineEvent, RuleBook, RuleRegistry};
use depline_repo::ParsedInput;
use depline_settings::{Overrides, ResolvedConfig};
use depline_types::{
    DependencyEntry, DeplineData, InputSummary, Location, ParseReport, Rejection, RuleEntry,
    SCHEMA_REPORT_V1, SourcePath, Verdict,
};
use time::OffsetDateTime;

use crate::report::tool_meta;

/// Input for the parse use case.
#[derive(Clone, Debug)]
pub struct ParseInput<'a> {
    /// Files to read, in order. `-` is standard input.
    pub inputs: &'a [Utf8PathBuf],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the parse use case.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub report: ParseReport,
    pub resolved_config: ResolvedConfig,
    /// Every registered rule, across all inputs.
    pub rules: RuleBook,
}

/// Run the parse use case: resolve config, read and classify inputs, produce a report.
pub fn run_parse(input: ParseInput<'_>) -> anyhow::Result<ParseOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        depline_settings::DeplineConfigV1::default()
    } else {
        depline_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        depline_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    tracing::info!(
        profile = %resolved.profile,
        inputs = input.inputs.len(),
        rules = resolved.policy.rules_enabled,
        "parsing inputs"
    );

    let classifier = Classifier::new(&resolved.policy);
    let mut rules = RuleBook::new();
    let registry: Option<&mut dyn RuleRegistry> = if resolved.policy.rules_enabled {
        Some(&mut rules)
    } else {
        None
    };

    let parsed = depline_repo::parse_inputs(input.inputs, &classifier, registry)?;

    let finished_at = OffsetDateTime::now_utc();
    let report = build_report(&parsed, resolved.policy.fail_on, started_at, finished_at);

    tracing::info!(
        dependencies = report.data.dependencies_found,
        parse_errors = report.data.parse_errors,
        verdict = ?report.verdict,
        "parse finished"
    );

    Ok(ParseOutput {
        report,
        resolved_config: resolved,
        rules,
    })
}

/// Flatten classified inputs into a report. Order follows the inputs, then line order.
pub fn build_report(
    parsed: &[ParsedInput],
    fail_on: FailOn,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> ParseReport {
    let mut inputs = Vec::with_capacity(parsed.len());
    let mut dependencies = Vec::new();
    let mut rules = Vec::new();
    let mut rejections = Vec::new();
    let mut data = DeplineData::default();

    for input in parsed {
        let outcome = &input.outcome;
        let counts = &outcome.counts;

        inputs.push(InputSummary {
            path: input.path.clone(),
            lines: counts.lines,
            dependencies: counts.dependencies,
            ignored: counts.ignored,
            parse_errors: counts.parse_errors,
        });

        data.inputs_scanned += 1;
        data.lines_scanned += counts.lines;
        data.dependencies_found += counts.dependencies;
        data.ignored_lines += counts.ignored;
        data.parse_errors += counts.parse_errors;
        data.rules_registered += counts.rules_registered;
        data.rules_dropped += counts.rules_dropped;

        for event in &outcome.events {
            match event {
                LineEvent::Dependency { line, index } => {
                    let Some(dep) = outcome.dependencies.get(*index) else {
                        continue;
                    };
                    dependencies.push(DependencyEntry {
                        group: dep.group().to_string(),
                        artifact: dep.artifact().to_string(),
                        version: dep.version().to_string(),
                        scope: dep.scope().to_string(),
                        classifier: dep.classifier().map(str::to_string),
                        location: location(&input.path, *line),
                    });
                }
                LineEvent::Rule { line, body, .. } => rules.push(RuleEntry {
                    body: body.clone(),
                    location: location(&input.path, *line),
                }),
                LineEvent::Rejected { line, raw, reason } => rejections.push(Rejection {
                    code: reason.code().to_string(),
                    message: reason.to_string(),
                    raw: raw.clone(),
                    location: location(&input.path, *line),
                }),
                LineEvent::RuleDropped { .. } => {}
            }
        }
    }

    ParseReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: verdict_for(data.parse_errors, fail_on),
        inputs,
        dependencies,
        rules,
        rejections,
        errors: Vec::new(),
        data,
    }
}

/// `pass` without parse errors; otherwise `warn`, or `fail` when the policy says so.
pub fn verdict_for(parse_errors: u32, fail_on: FailOn) -> Verdict {
    match (parse_errors, fail_on) {
        (0, _) => Verdict::Pass,
        (_, FailOn::Never) => Verdict::Warn,
        (_, FailOn::ParseError) => Verdict::Fail,
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass | Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

fn location(path: &SourcePath, line: u32) -> Location {
    Location {
        path: path.clone(),
        line: Some(line),
    }
}
