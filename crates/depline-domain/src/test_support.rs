use crate::classify::{Classification, RejectReason};
use crate::model::MavenDependency;
use crate::rules::{RuleBook, RuleRegistry};

pub fn dependency(outcome: Classification) -> MavenDependency {
    match outcome {
        Classification::DependencyFound(dep) => dep,
        other => panic!("expected a dependency, got {other:?}"),
    }
}

pub fn rejected_with(outcome: &Classification, reason: RejectReason) {
    assert_eq!(outcome, &Classification::Rejected(reason));
}

/// Run `f` against a fresh [`RuleBook`] and hand the book back for inspection.
pub fn with_book<T>(f: impl FnOnce(&mut dyn RuleRegistry) -> T) -> (T, RuleBook) {
    let mut book = RuleBook::new();
    let out = f(&mut book);
    (out, book)
}

pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
