//! Structured, source-located diagnostics for configuration problems.
//!
//! Resolution reports expected authoring mistakes (no config file, duplicate
//! config files) as data through an injected sink rather than raising errors,
//! so a hosting build pipeline can decide severity for itself. Diagnostics
//! are observability, not control flow: supplying no sink drops them while
//! resolution proceeds or fails by its own rules.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

/// How serious a diagnostic is, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Advisory; the operation still produced a result.
    Warning,
    /// The operation produced no result.
    Error,
}

/// A structured problem report emitted during configuration resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No candidate file matched the expected configuration file name. Carries
    /// no location since, by definition, there is no file to point at.
    NoConfigFile,

    /// More than one candidate matched the expected name. Resolution keeps
    /// `selected` and ignores `duplicate`; every duplicate is reported against
    /// the first selection, not against the previous duplicate.
    MultipleConfigFiles {
        selected: Utf8PathBuf,
        duplicate: Utf8PathBuf,
    },
}

impl Diagnostic {
    /// The stable identifier tooling keys off, e.g. to suppress or escalate.
    pub fn id(&self) -> &'static str {
        match self {
            Diagnostic::NoConfigFile => "STC0001",
            Diagnostic::MultipleConfigFiles { .. } => "STC0002",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::NoConfigFile => Severity::Error,
            Diagnostic::MultipleConfigFiles { .. } => Severity::Warning,
        }
    }

    /// The file this diagnostic points at, if any.
    pub fn location(&self) -> Option<&Utf8Path> {
        match self {
            Diagnostic::NoConfigFile => None,
            Diagnostic::MultipleConfigFiles { duplicate, .. } => Some(duplicate),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoConfigFile => {
                write!(f, "no configuration file found among the candidate files")
            }
            Diagnostic::MultipleConfigFiles {
                selected,
                duplicate,
            } => write!(
                f,
                "multiple configuration files found: using \"{selected}\", ignoring \"{duplicate}\""
            ),
        }
    }
}

/// An injected callback receiving diagnostics as they are produced.
///
/// Operations take `Option<DiagnosticSink>`; passing `None` silently drops
/// diagnostics without changing behavior.
pub type DiagnosticSink<'a> = &'a mut dyn FnMut(Diagnostic);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_and_severities() {
        let none = Diagnostic::NoConfigFile;
        assert_eq!(none.id(), "STC0001");
        assert_eq!(none.severity(), Severity::Error);
        assert_eq!(none.location(), None);

        let multiple = Diagnostic::MultipleConfigFiles {
            selected: "a/silktouch.json".into(),
            duplicate: "b/silktouch.json".into(),
        };
        assert_eq!(multiple.id(), "STC0002");
        assert_eq!(multiple.severity(), Severity::Warning);
        assert_eq!(
            multiple.location(),
            Some(Utf8Path::new("b/silktouch.json"))
        );
    }

    #[test]
    fn test_display_names_both_paths() {
        let multiple = Diagnostic::MultipleConfigFiles {
            selected: "a/silktouch.json".into(),
            duplicate: "b/silktouch.json".into(),
        };

        let message = multiple.to_string();
        assert!(message.contains("a/silktouch.json"));
        assert!(message.contains("b/silktouch.json"));
    }
}
