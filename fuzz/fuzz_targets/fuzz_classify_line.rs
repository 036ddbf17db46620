//! Fuzz target for single-line classification.
//!
//! Goal: the classifier should **never panic**, whatever the line looks like and whichever
//! ambiguity policy is active.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_classify_line
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Structured input: a line built from coordinate-ish pieces, plus the policy switch.
#[derive(Arbitrary, Debug)]
struct LineInput {
    prefix: Prefix,
    parts: Vec<String>,
    quoted: bool,
    reject_ambiguous: bool,
}

#[derive(Arbitrary, Debug)]
enum Prefix {
    None,
    Info,
    Artifact,
    Rule,
    Raw(String),
}

fuzz_target!(|input: LineInput| {
    if input.parts.len() > 12 {
        return;
    }

    let body = input.parts.join(":");
    let body = if input.quoted {
        format!("\"{body}\",")
    } else {
        body
    };
    let line = match input.prefix {
        Prefix::None => body,
        Prefix::Info => format!("[INFO]    {body}"),
        Prefix::Artifact => format!("    artifact = {body}"),
        Prefix::Rule => format!("# RULE {body}"),
        Prefix::Raw(p) => format!("{p}{body}"),
    };

    let _ = depline_repo::fuzz::classify(&line, input.reject_ambiguous);
});
