use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Input path as it appears in reports.
///
/// Normalization is deliberately small:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - `-` stays `-` (standard input)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePath(String);

impl Default for SourcePath {
    fn default() -> Self {
        SourcePath::stdin()
    }
}

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = "-".to_string();
        }
        Self(v)
    }

    /// Placeholder used for lines that did not come from a file.
    pub fn stdin() -> Self {
        Self("-".to_string())
    }

    pub fn is_stdin(&self) -> bool {
        self.0 == "-"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for SourcePath {
    fn from(value: &Utf8Path) -> Self {
        SourcePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for SourcePath {
    fn from(value: Utf8PathBuf) -> Self {
        SourcePath::new(value.as_str())
    }
}
