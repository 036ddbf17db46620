//! Arbiter rule registration.
//!
//! Rules are free-form directives (`exclude com.foo:bar`, `pin ...`) that a separate arbiter
//! applies when resolving version conflicts. The classifier only hands the rule body over; what a
//! rule means is the registry's business.

use std::fmt;

/// Opaque handle returned by a registry, used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleHandle(u32);

impl RuleHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule#{}", self.0)
    }
}

/// Storage for arbiter rules found while classifying lines.
///
/// Registration is infallible: malformed bodies are the registry's own concern and must not abort
/// line processing.
pub trait RuleRegistry {
    fn register_rule(&mut self, body: &str) -> RuleHandle;
}

/// In-memory registry that keeps rule bodies in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleBook {
    rules: Vec<String>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn get(&self, handle: RuleHandle) -> Option<&str> {
        self.rules.get(handle.0 as usize).map(String::as_str)
    }
}

impl RuleRegistry for RuleBook {
    fn register_rule(&mut self, body: &str) -> RuleHandle {
        let handle = RuleHandle(self.rules.len() as u32);
        self.rules.push(body.to_string());
        handle
    }
}
