//!
//! # Diagnostics
//!
//! Converters never stop at the first problem. Each finding is pushed into a
//! [`Diagnostics`] collector together with the attribute path it refers to,
//! the caller decides at the end whether the conversion is usable.
//!
use std::fmt;

use tracing::warn;

/// Dotted attribute path, e.g. `kafka_target.serializer`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttrPath(String);

impl AttrPath {
    pub fn root(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_owned())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    pub fn index(&self, idx: usize) -> Self {
        Self(format!("{}[{}]", self.0, idx))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// zero or several arms of a one-of block are populated
    #[error("specify exactly one of: {}{}", .expected.join(", "), found_suffix(.found))]
    StructuralAmbiguity {
        expected: Vec<&'static str>,
        found: Vec<&'static str>,
    },
    #[error("unknown {label} `{name}`, expected one of: {}", .expected.join(", "))]
    UnknownEnumName {
        label: &'static str,
        name: String,
        expected: Vec<&'static str>,
    },
    #[error("missing required block `{0}`")]
    MissingRequiredSubBlock(&'static str),
    #[error("missing required value")]
    MissingRequiredValue,
    #[error("value is not known yet and cannot be sent")]
    UnresolvedValue,
    #[error("{0}")]
    InvalidValue(String),
    /// the server sent something this version does not understand
    #[error("unrecognized value from the API ({0}), the provider may need an update")]
    WireParseFailure(String),
}

fn found_suffix(found: &[&'static str]) -> String {
    if found.is_empty() {
        String::new()
    } else {
        format!(" (found: {})", found.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: AttrPath,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        if self.path.as_str().is_empty() {
            write!(f, "{severity}: {}", self.kind)
        } else {
            write!(f, "{severity}: {}: {}", self.path, self.kind)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, path: &AttrPath, kind: DiagnosticKind) {
        self.items.push(Diagnostic {
            severity: Severity::Error,
            path: path.clone(),
            kind,
        });
    }

    pub fn warning(&mut self, path: &AttrPath, kind: DiagnosticKind) {
        self.items.push(Diagnostic {
            severity: Severity::Warning,
            path: path.clone(),
            kind,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|item| item.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|item| item.severity == Severity::Warning)
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// log warnings, fail if any error was collected
    pub fn into_result<T>(self, value: T) -> Result<T, Diagnostics> {
        for item in self.warnings() {
            warn!(path = %item.path, "{}", item.kind);
        }
        if self.has_errors() { Err(self) } else { Ok(value) }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
