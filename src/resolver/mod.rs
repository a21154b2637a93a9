//! Configuration file resolution.
//!
//! Given an ordered collection of candidate files plus project-scoped option
//! overrides, the resolver selects exactly one file to be "the" configuration
//! for a project, or fails with a precise diagnostic. Resolution is a pure
//! function of (override value, ordered candidate list): identical inputs
//! always select the identical file and produce identical diagnostics.
//!
//! Duplicates never silently change which file wins. The first match is kept
//! and every later match is reported as a [`Diagnostic::MultipleConfigFiles`]
//! against that first selection, so the host can choose to treat the warning
//! as fatal.

use std::fs;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use thiserror::Error;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::loader::{self, ConfigFormatError};
use crate::models::ProjectConfiguration;

/// The well-known configuration file name looked for when no override is set.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "silktouch.json";

/// The build-system option key that overrides the configuration file name.
pub const CONFIG_FILE_OPTION: &str = "silktouch_config_file";

/// A file in the build input set that might be the project's configuration
/// document. The resolver matches on the path; contents are only read for the
/// single selected candidate.
pub trait CandidateFile {
    fn path(&self) -> &Utf8Path;

    /// Read the candidate's text. Only called on the selected candidate.
    fn contents(&self) -> anyhow::Result<String>;
}

/// A candidate backed by a file on disk, read lazily on selection.
#[derive(Debug, Clone)]
pub struct FsCandidate {
    path: Utf8PathBuf,
}

impl FsCandidate {
    pub fn new<P: Into<Utf8PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateFile for FsCandidate {
    fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn contents(&self) -> anyhow::Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read candidate file: {}", self.path))
    }
}

/// A candidate whose text the host already holds in memory.
#[derive(Debug, Clone)]
pub struct MemoryCandidate {
    path: Utf8PathBuf,
    text: String,
}

impl MemoryCandidate {
    pub fn new<P: Into<Utf8PathBuf>, S: Into<String>>(path: P, text: S) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

impl CandidateFile for MemoryCandidate {
    fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn contents(&self) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }
}

/// Project-scoped key/value options supplied by the hosting build system.
///
/// The resolver only consults [`CONFIG_FILE_OPTION`] through this lookup.
pub trait OptionLookup {
    fn option(&self, key: &str) -> Option<String>;
}

impl OptionLookup for IndexMap<String, String> {
    fn option(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The outcome of a successful resolution: the parsed configuration together
/// with the identity of the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: ProjectConfiguration,
    pub path: Utf8PathBuf,
}

/// Hard failures during resolution. Missing or duplicate configuration files
/// are diagnostics, not errors; these cover the selected file being unreadable
/// or malformed.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to read configuration file {path}")]
    Content {
        path: Utf8PathBuf,
        source: anyhow::Error,
    },

    #[error(transparent)]
    Format(#[from] ConfigFormatError),
}

/// Select and load "the" configuration file for a project.
///
/// The target file name is the [`CONFIG_FILE_OPTION`] override if present,
/// else [`DEFAULT_CONFIG_FILE_NAME`]. Candidates are scanned in order; a
/// candidate matches when its full path or its final path component equals
/// the target name. The first match wins; each later match emits a
/// [`Diagnostic::MultipleConfigFiles`] naming the first selection and that
/// duplicate, and scanning continues.
///
/// # Returns
/// * `Ok(Some(_))` - a candidate was selected and parsed (possibly alongside
///   duplicate diagnostics)
/// * `Ok(None)` - no candidate matched; one [`Diagnostic::NoConfigFile`] was
///   emitted
/// * `Err(_)` - the selected candidate could not be read or parsed
pub fn resolve_config<C: CandidateFile>(
    options: &dyn OptionLookup,
    candidates: &[C],
    mut sink: Option<DiagnosticSink<'_>>,
) -> Result<Option<ResolvedConfig>, ResolveError> {
    let mut target = DEFAULT_CONFIG_FILE_NAME.to_string();
    if let Some(file) = options.option(CONFIG_FILE_OPTION) {
        tracing::debug!(
            "User has overridden \"{DEFAULT_CONFIG_FILE_NAME}\" to \"{file}\""
        );
        target = file;
    }

    let mut selected: Option<&C> = None;
    for candidate in candidates {
        let path = candidate.path();
        tracing::debug!("Testing \"{path}\" (expecting \"{target}\")...");
        if path.as_str() != target && path.file_name() != Some(target.as_str()) {
            continue;
        }

        tracing::debug!("\"{path}\" is a good match");
        if let Some(first) = selected {
            // First match wins; surface the conflict and keep scanning.
            tracing::debug!("Already selected \"{}\", keeping it", first.path());
            report(&mut sink, Diagnostic::MultipleConfigFiles {
                selected: first.path().to_path_buf(),
                duplicate: path.to_path_buf(),
            });
            continue;
        }

        selected = Some(candidate);
    }

    let Some(candidate) = selected else {
        tracing::debug!("No configuration file found");
        report(&mut sink, Diagnostic::NoConfigFile);
        return Ok(None);
    };

    let text = candidate
        .contents()
        .map_err(|source| ResolveError::Content {
            path: candidate.path().to_path_buf(),
            source,
        })?;
    let config = loader::load(&text)?;
    tracing::debug!("Resolved configuration from \"{}\"", candidate.path());

    Ok(Some(ResolvedConfig {
        config,
        path: candidate.path().to_path_buf(),
    }))
}

fn report(sink: &mut Option<DiagnosticSink<'_>>, diagnostic: Diagnostic) {
    if let Some(sink) = sink {
        sink(diagnostic);
    }
}
