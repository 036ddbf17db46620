//! Config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::DeplineConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `depline.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DeplineConfigV1> {
    let cfg: DeplineConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the parse policy used by the classifier (profile + config + overrides).
pub fn resolve_config(
    cfg: DeplineConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
