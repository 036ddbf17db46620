use crate::model::DeplineConfigV1;
use crate::presets::{self, PROFILE_LENIENT};
use anyhow::Context;
use depline_domain::policy::{AmbiguousLayout, CoordinateCheck, FailOn, ParsePolicy};

/// Values given on the command line; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub ambiguous_layout: Option<String>,
    pub rules: Option<bool>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub profile: String,
    pub policy: ParsePolicy,
}

pub fn resolve_config(
    cfg: DeplineConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| PROFILE_LENIENT.to_string());

    let mut policy = presets::preset(&profile).with_context(|| {
        format!("unknown profile: {profile} (expected 'lenient' or 'strict')")
    })?;

    if let Some(layout) = overrides.ambiguous_layout.or(cfg.ambiguous_layout) {
        policy.ambiguous_layout = parse_ambiguous_layout(&layout)?;
    }

    if let Some(check) = cfg.coordinates {
        policy.coordinate_check = parse_coordinate_check(&check)?;
    }

    if let Some(rules) = overrides.rules.or(cfg.rules) {
        policy.rules_enabled = rules;
    }

    if let Some(fail_on) = overrides.fail_on.or(cfg.fail_on) {
        policy.fail_on = parse_fail_on(&fail_on)?;
    }

    Ok(ResolvedConfig { profile, policy })
}

fn parse_ambiguous_layout(v: &str) -> anyhow::Result<AmbiguousLayout> {
    match v {
        "infer" => Ok(AmbiguousLayout::Infer),
        "reject" => Ok(AmbiguousLayout::Reject),
        other => anyhow::bail!("unknown ambiguous_layout: {other} (expected 'infer' or 'reject')"),
    }
}

fn parse_coordinate_check(v: &str) -> anyhow::Result<CoordinateCheck> {
    match v {
        "lenient" => Ok(CoordinateCheck::Lenient),
        "strict" => Ok(CoordinateCheck::Strict),
        other => anyhow::bail!("unknown coordinates: {other} (expected 'lenient' or 'strict')"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "never" => Ok(FailOn::Never),
        "parse_error" | "parse-error" => Ok(FailOn::ParseError),
        other => anyhow::bail!("unknown fail_on: {other} (expected never|parse_error)"),
    }
}
