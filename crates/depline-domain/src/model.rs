use std::fmt;

/// Scope assumed when a line does not carry one.
pub const DEFAULT_SCOPE: &str = "compile";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Group,
    Artifact,
    Version,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Group => "group",
            Field::Artifact => "artifact",
            Field::Version => "version",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DependencyError {
    #[error("missing {0}")]
    MissingField(Field),

    #[error("{field} contains whitespace: {value:?}")]
    InvalidCoordinate { field: Field, value: String },
}

impl DependencyError {
    pub fn code(&self) -> &'static str {
        match self {
            DependencyError::MissingField(_) => depline_types::ids::CODE_MISSING_FIELD,
            DependencyError::InvalidCoordinate { .. } => {
                depline_types::ids::CODE_INVALID_COORDINATE
            }
        }
    }
}

/// Positional fields pulled out of one line, before validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coordinates<'a> {
    pub group: &'a str,
    pub artifact: &'a str,
    pub version: &'a str,
    pub scope: Option<&'a str>,
    pub classifier: Option<&'a str>,
}

/// One resolved Maven dependency.
///
/// Fields are private: a record is only ever built through [`MavenDependency::new`] and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MavenDependency {
    group: String,
    artifact: String,
    version: String,
    scope: String,
    classifier: Option<String>,
    source_line: String,
}

impl MavenDependency {
    /// Validate `coords` and build a record that remembers `source_line` verbatim.
    ///
    /// Group, artifact and version are trimmed and must be non-empty; anything else inside them is
    /// kept as written. The scope keeps only its first word (`compile -- module foo` becomes `compile`) and falls back to
    /// [`DEFAULT_SCOPE`]; an empty classifier counts as absent.
    pub fn new(
        source_line: impl Into<String>,
        coords: Coordinates<'_>,
    ) -> Result<Self, DependencyError> {
        let group = required(Field::Group, coords.group)?;
        let artifact = required(Field::Artifact, coords.artifact)?;
        let version = required(Field::Version, coords.version)?;

        let scope = coords
            .scope
            .and_then(|s| s.split_whitespace().next())
            .unwrap_or(DEFAULT_SCOPE)
            .to_string();
        let classifier = coords
            .classifier
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Self {
            group,
            artifact,
            version,
            scope,
            classifier,
            source_line: source_line.into(),
        })
    }

    /// Like [`MavenDependency::new`], but group, artifact and version must also be free of
    /// whitespace. Prose with colons (`Building app: module: release`) fails here.
    pub fn new_strict(
        source_line: impl Into<String>,
        coords: Coordinates<'_>,
    ) -> Result<Self, DependencyError> {
        let dep = Self::new(source_line, coords)?;
        for (field, value) in [
            (Field::Group, &dep.group),
            (Field::Artifact, &dep.artifact),
            (Field::Version, &dep.version),
        ] {
            if value.chars().any(char::is_whitespace) {
                return Err(DependencyError::InvalidCoordinate {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(dep)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// The line this record was parsed from, untrimmed.
    pub fn source_line(&self) -> &str {
        &self.source_line
    }
}

impl fmt::Display for MavenDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{} ({})", self.version, self.scope)
    }
}

fn required(field: Field, value: &str) -> Result<String, DependencyError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DependencyError::MissingField(field));
    }
    Ok(value.to_string())
}
