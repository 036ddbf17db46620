//! Input adapters: turn files and stdin into classified line batches.
//!
//! This crate is allowed to do filesystem IO. Classification itself lives in `depline-domain`;
//! everything here is about obtaining lines and attaching the input path to the result.

#![forbid(unsafe_code)]

mod read;

use camino::Utf8Path;
use depline_domain::{BatchError, BatchOutcome, Classifier, RuleRegistry, try_process_lines};
use depline_types::SourcePath;
use std::io::{self, BufRead};

pub use read::{FileLines, read_lines, reader_lines};

/// Path argument that means "read standard input".
pub const STDIN_ARG: &str = "-";

/// Fuzz-friendly API for exercising the classifier without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;
    use depline_domain::RuleBook;

    /// Run a whole text through the batch driver, rules enabled.
    ///
    /// Returns the number of extracted dependencies. **Never panics** on any input.
    pub fn parse_text(text: &str) -> usize {
        let mut book = RuleBook::new();
        let outcome = depline_domain::process_lines(
            &Classifier::default(),
            text.lines(),
            Some(&mut book),
        );
        outcome.dependencies.len()
    }

    /// Classify one line with the given ambiguity handling.
    ///
    /// **Never panics** on any input.
    pub fn classify(line: &str, reject_ambiguous: bool) -> bool {
        use depline_domain::policy::{AmbiguousLayout, ParsePolicy};

        let policy = ParsePolicy {
            ambiguous_layout: if reject_ambiguous {
                AmbiguousLayout::Reject
            } else {
                AmbiguousLayout::Infer
            },
            ..ParsePolicy::default()
        };
        Classifier::new(&policy)
            .classify(line, None)
            .dependency()
            .is_some()
    }
}

/// The classified lines of one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedInput {
    pub path: SourcePath,
    pub outcome: BatchOutcome,
}

/// Classify one lazily-read line source.
///
/// A read failure aborts with context naming the input and the line number.
pub fn parse_source<I>(
    path: SourcePath,
    lines: I,
    classifier: &Classifier,
    registry: Option<&mut (dyn RuleRegistry + '_)>,
) -> anyhow::Result<ParsedInput>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let outcome = try_process_lines(classifier, lines, registry)
        .map_err(|err| batch_error(&path, err))?;

    tracing::debug!(
        input = %path,
        lines = outcome.counts.lines,
        dependencies = outcome.dependencies.len(),
        "input classified"
    );

    Ok(ParsedInput { path, outcome })
}

/// Classify every input in argument order, sharing one rule registry across all of them.
///
/// `-` reads standard input.
pub fn parse_inputs<P: AsRef<Utf8Path>>(
    paths: &[P],
    classifier: &Classifier,
    mut registry: Option<&mut (dyn RuleRegistry + '_)>,
) -> anyhow::Result<Vec<ParsedInput>> {
    let mut parsed = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let input = if path.as_str() == STDIN_ARG {
            let stdin = io::stdin();
            parse_reader(
                SourcePath::stdin(),
                stdin.lock(),
                classifier,
                registry.as_deref_mut(),
            )?
        } else {
            let lines = read_lines(path)?;
            parse_source(
                SourcePath::from(path),
                lines,
                classifier,
                registry.as_deref_mut(),
            )?
        };
        parsed.push(input);
    }

    Ok(parsed)
}

/// Classify lines from an arbitrary reader.
pub fn parse_reader<R: BufRead>(
    path: SourcePath,
    reader: R,
    classifier: &Classifier,
    registry: Option<&mut (dyn RuleRegistry + '_)>,
) -> anyhow::Result<ParsedInput> {
    parse_source(path, reader_lines(reader), classifier, registry)
}

fn batch_error(path: &SourcePath, err: BatchError<io::Error>) -> anyhow::Error {
    let context = match &err.last_line {
        Some(last) => format!("read {path} (last line read: {last:?})"),
        None => format!("read {path}"),
    };
    anyhow::Error::new(err).context(context)
}
