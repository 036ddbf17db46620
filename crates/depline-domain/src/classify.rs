//! Per-line classification.
//!
//! A line is checked against a fixed, ordered list of guards; the first guard that matches
//! decides the outcome. Later guards assume earlier ones did not match, so the order below is
//! load-bearing:
//!
//! 1. `# RULE ...` hands the rule body to the registry
//! 2. noisy build-log lines (`Finished at`, `Download`, `[INFO] ---`) are ignored
//! 3. other `#` comments are ignored
//! 4. the `[INFO]` prefix, quotes, commas and `artifact =` are stripped
//! 5. what remains is split on `:` and read positionally

use crate::model::{Coordinates, DependencyError, MavenDependency};
use crate::policy::{AmbiguousLayout, CoordinateCheck, ParsePolicy, is_known_scope};
use crate::rules::{RuleHandle, RuleRegistry};
use depline_types::ids;
use std::fmt;
use tracing::{debug, info, warn};

pub const RULE_PREFIX: &str = "# RULE";
pub const COMMENT_MARKER: &str = "#";
pub const INFO_PREFIX: &str = "[INFO]";
pub const ARTIFACT_INTRODUCER: &str = "artifact =";
pub const DIVIDER_PREFIX: &str = "[INFO] ---";

/// `mvn dependency:list` log lines that carry enough colons to pass for coordinates.
pub const NOISE_MARKERS: &[&str] = &["Finished at", "Download"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Build-log line known to look like coordinates.
    Noise,
    Comment,
    Blank,
    /// Fewer than three colon-separated parts.
    NotCoordinates,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Invalid(DependencyError),
    /// Five-part dependency-list line whose last token is not a scope.
    AmbiguousLayout { token: String },
}

impl RejectReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::Invalid(err) => err.code(),
            RejectReason::AmbiguousLayout { .. } => ids::CODE_AMBIGUOUS_LAYOUT,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Invalid(err) => err.fmt(f),
            RejectReason::AmbiguousLayout { token } => write!(
                f,
                "five-part coordinate ends in {token:?}, which is not a scope; \
                 cannot tell group:artifact:type:version:scope from \
                 group:artifact:type:classifier:version"
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    RuleRegistered { handle: RuleHandle, body: String },
    /// A rule line was seen but no registry was supplied.
    RuleDropped { body: String },
    Ignored(IgnoreReason),
    DependencyFound(MavenDependency),
    Rejected(RejectReason),
}

impl Classification {
    pub fn dependency(&self) -> Option<&MavenDependency> {
        match self {
            Classification::DependencyFound(dep) => Some(dep),
            _ => None,
        }
    }

    /// Counts toward the ignored-line counter. Rejections count here too.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            Classification::Ignored(_) | Classification::Rejected(_)
        )
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Classification::Rejected(_))
    }
}

/// Which of the two colon layouts a line was written in. Decided per line, never shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    /// `mvn dependency:list`: `group:artifact:type:version:scope`.
    DependencyList,
    /// Bazel WORKSPACE `artifact = "..."`: `group:artifact:type:classifier:version`.
    Manifest,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classifier {
    ambiguous_layout: AmbiguousLayout,
    coordinate_check: CoordinateCheck,
}

impl Classifier {
    pub fn new(policy: &ParsePolicy) -> Self {
        Self {
            ambiguous_layout: policy.ambiguous_layout,
            coordinate_check: policy.coordinate_check,
        }
    }

    /// Classify one raw line. Never fails; every line ends up in exactly one outcome.
    pub fn classify(
        &self,
        raw_line: &str,
        registry: Option<&mut (dyn RuleRegistry + '_)>,
    ) -> Classification {
        let line = raw_line.trim();

        if let Some(body) = line.strip_prefix(RULE_PREFIX) {
            return register_rule(line, body, registry);
        }

        if NOISE_MARKERS.iter().any(|m| line.contains(m)) || line.starts_with(DIVIDER_PREFIX) {
            debug!(line, "ignoring build log line");
            return Classification::Ignored(IgnoreReason::Noise);
        }

        if line.starts_with(COMMENT_MARKER) {
            return Classification::Ignored(IgnoreReason::Comment);
        }

        let line = line.strip_prefix(INFO_PREFIX).unwrap_or(line);
        let unquoted: String = line.chars().filter(|c| !matches!(c, '"' | ',')).collect();
        let (body, layout) = match unquoted.strip_prefix(ARTIFACT_INTRODUCER) {
            Some(rest) => (rest, Layout::Manifest),
            None => (unquoted.as_str(), Layout::DependencyList),
        };

        let body = body.trim();
        if body.is_empty() {
            return Classification::Ignored(IgnoreReason::Blank);
        }

        let parts = split_coordinates(body);
        if parts.len() < 3 {
            return Classification::Ignored(IgnoreReason::NotCoordinates);
        }

        let coords = match self.interpret(&parts, layout, raw_line) {
            Ok(coords) => coords,
            Err(reason) => return reject(raw_line, reason),
        };

        let built = match self.coordinate_check {
            CoordinateCheck::Lenient => MavenDependency::new(raw_line, coords),
            CoordinateCheck::Strict => MavenDependency::new_strict(raw_line, coords),
        };
        match built {
            Ok(dep) => {
                info!(dependency = %dep, "added dependency");
                Classification::DependencyFound(dep)
            }
            Err(err) => reject(raw_line, RejectReason::Invalid(err)),
        }
    }

    fn interpret<'a>(
        &self,
        parts: &[&'a str],
        layout: Layout,
        raw_line: &str,
    ) -> Result<Coordinates<'a>, RejectReason> {
        let mut coords = Coordinates {
            group: parts[0],
            artifact: parts[1],
            version: parts[2],
            scope: None,
            classifier: None,
        };

        // The type token (parts[2] in the longer forms) is dropped.
        match (parts.len(), layout) {
            (5, Layout::DependencyList) => {
                let scope = parts[4];
                if !is_known_scope(scope) {
                    match self.ambiguous_layout {
                        AmbiguousLayout::Reject => {
                            return Err(RejectReason::AmbiguousLayout {
                                token: scope.to_string(),
                            });
                        }
                        AmbiguousLayout::Infer => warn!(
                            line = raw_line,
                            scope,
                            "five-part coordinate has an unknown scope; reading it as \
                             group:artifact:type:version:scope"
                        ),
                    }
                }
                coords.version = parts[3];
                coords.scope = Some(scope);
            }
            (5, Layout::Manifest) => {
                coords.classifier = Some(parts[3]);
                coords.version = parts[4];
            }
            (6, _) => {
                coords.classifier = Some(parts[3]);
                coords.version = parts[4];
                coords.scope = Some(parts[5]);
            }
            _ => {}
        }

        Ok(coords)
    }
}

/// Classify `raw_line` with the default policy.
pub fn classify_line(
    raw_line: &str,
    registry: Option<&mut (dyn RuleRegistry + '_)>,
) -> Classification {
    Classifier::default().classify(raw_line, registry)
}

fn register_rule(
    line: &str,
    body: &str,
    registry: Option<&mut (dyn RuleRegistry + '_)>,
) -> Classification {
    let body = body.trim_start();
    match registry {
        Some(registry) => {
            let handle = registry.register_rule(body);
            info!(rule = %handle, body, "added arbiter rule");
            Classification::RuleRegistered {
                handle,
                body: body.to_string(),
            }
        }
        None => {
            warn!(line, "found an arbiter rule but no rule registry is configured");
            Classification::RuleDropped {
                body: body.to_string(),
            }
        }
    }
}

fn reject(raw_line: &str, reason: RejectReason) -> Classification {
    warn!(
        line = raw_line,
        reason = %reason,
        "line has colons but does not look like a dependency; ignoring"
    );
    Classification::Rejected(reason)
}

/// Split on `:`, dropping trailing empty parts (`a:b::` has two parts, not four).
fn split_coordinates(body: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = body.split(':').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}
