use depline_domain::policy::{AmbiguousLayout, CoordinateCheck, FailOn, ParsePolicy};

pub const PROFILE_LENIENT: &str = "lenient";
pub const PROFILE_STRICT: &str = "strict";

/// Preset profiles are opinionated defaults.
///
/// `lenient` infers a layout for ambiguous lines, accepts any non-empty field and never fails the
/// run; `strict` refuses to guess, rejects whitespace inside coordinates and fails the run on any
/// parse error.
pub fn preset(profile: &str) -> Option<ParsePolicy> {
    match profile {
        PROFILE_LENIENT => Some(ParsePolicy::default()),
        PROFILE_STRICT => Some(ParsePolicy {
            ambiguous_layout: AmbiguousLayout::Reject,
            coordinate_check: CoordinateCheck::Strict,
            rules_enabled: true,
            fail_on: FailOn::ParseError,
        }),
        _ => None,
    }
}
