/// Scopes Maven prints in `dependency:list` output.
pub const KNOWN_SCOPES: &[&str] = &["compile", "provided", "runtime", "test", "system", "import"];

/// What to do with a five-part dependency-list line whose last token is not a known scope.
///
/// Such a line is more likely a `group:artifact:type:classifier:version` manifest coordinate that
/// lost its `artifact =` introducer than a real `group:artifact:type:version:scope` entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbiguousLayout {
    /// Read it as `group:artifact:type:version:scope` anyway and warn.
    #[default]
    Infer,
    /// Reject the line.
    Reject,
}

/// How much a coordinate field may contain once it is known to be non-empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinateCheck {
    /// Any non-empty text.
    #[default]
    Lenient,
    /// No whitespace inside group, artifact or version.
    Strict,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    #[default]
    Never,
    ParseError,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePolicy {
    pub ambiguous_layout: AmbiguousLayout,
    pub coordinate_check: CoordinateCheck,
    /// Hand `# RULE` lines to a registry. When off, rule lines are dropped with a warning.
    pub rules_enabled: bool,
    pub fail_on: FailOn,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self {
            ambiguous_layout: AmbiguousLayout::Infer,
            coordinate_check: CoordinateCheck::Lenient,
            rules_enabled: true,
            fail_on: FailOn::Never,
        }
    }
}

pub fn is_known_scope(token: &str) -> bool {
    token
        .split_whitespace()
        .next()
        .is_some_and(|s| KNOWN_SCOPES.contains(&s))
}
