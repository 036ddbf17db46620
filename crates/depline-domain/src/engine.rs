use crate::classify::{Classification, Classifier, RejectReason};
use crate::model::MavenDependency;
use crate::report::LineCounts;
use crate::rules::{RuleHandle, RuleRegistry};

/// Something worth reporting about a single line, with its 1-based line number.
///
/// Ignored lines only show up in the counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// `index` points into [`BatchOutcome::dependencies`].
    Dependency { line: u32, index: usize },
    Rule {
        line: u32,
        handle: RuleHandle,
        body: String,
    },
    RuleDropped { line: u32, body: String },
    Rejected {
        line: u32,
        raw: String,
        reason: RejectReason,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Extracted dependencies, in input order.
    pub dependencies: Vec<MavenDependency>,
    pub events: Vec<LineEvent>,
    pub counts: LineCounts,
}

impl BatchOutcome {
    pub fn ignored_count(&self) -> u32 {
        self.counts.ignored
    }

    pub fn parse_error_count(&self) -> u32 {
        self.counts.parse_errors
    }

    /// 1-based line number of each dependency, parallel to `dependencies`.
    pub fn dependency_lines(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                LineEvent::Dependency { line, .. } => Some(*line),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, line: u32, raw_line: &str, outcome: Classification) {
        self.counts.record(&outcome);
        match outcome {
            Classification::DependencyFound(dep) => {
                self.events.push(LineEvent::Dependency {
                    line,
                    index: self.dependencies.len(),
                });
                self.dependencies.push(dep);
            }
            Classification::RuleRegistered { handle, body } => {
                self.events.push(LineEvent::Rule { line, handle, body });
            }
            Classification::RuleDropped { body } => {
                self.events.push(LineEvent::RuleDropped { line, body });
            }
            Classification::Rejected(reason) => self.events.push(LineEvent::Rejected {
                line,
                raw: raw_line.to_string(),
                reason,
            }),
            Classification::Ignored(_) => {}
        }
    }
}

/// The line source failed; the batch stops here.
#[derive(Debug, thiserror::Error)]
#[error("failed to read line {line}")]
pub struct BatchError<E> {
    /// 1-based number of the line that could not be read.
    pub line: u32,
    /// The last line that was read successfully, if any.
    pub last_line: Option<String>,
    #[source]
    pub source: E,
}

/// Classify every line in order. Later lines never override earlier ones.
pub fn process_lines<I, S>(
    classifier: &Classifier,
    lines: I,
    registry: Option<&mut (dyn RuleRegistry + '_)>,
) -> BatchOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match try_process_lines(
        classifier,
        lines.into_iter().map(Ok::<S, std::convert::Infallible>),
        registry,
    ) {
        Ok(outcome) => outcome,
        Err(err) => match err.source {},
    }
}

/// Like [`process_lines`], for line sources that can fail (a file being read lazily).
///
/// The first `Err` aborts the batch; everything classified before it is discarded.
pub fn try_process_lines<I, S, E>(
    classifier: &Classifier,
    lines: I,
    mut registry: Option<&mut (dyn RuleRegistry + '_)>,
) -> Result<BatchOutcome, BatchError<E>>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    let mut outcome = BatchOutcome::default();
    let mut last_line: Option<String> = None;

    for (idx, item) in lines.into_iter().enumerate() {
        let line_no = idx as u32 + 1;
        let raw = item.map_err(|source| BatchError {
            line: line_no,
            last_line: last_line.take(),
            source,
        })?;
        let raw = raw.as_ref();

        let classification = classifier.classify(raw, registry.as_deref_mut());
        outcome.record(line_no, raw, classification);
        last_line = Some(raw.to_string());
    }

    Ok(outcome)
}
