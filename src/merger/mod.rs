//! Global configuration resolution and loading.
//!
//! A project configuration may reference a shared global document through its
//! `globalFile` key. The merger resolves that reference against the directory
//! containing the project config actually used (not the process working
//! directory) and loads it. The merger is stateless: every call re-reads and
//! re-parses, and callers wanting sharing across jobs cache externally —
//! this resolution happens once per pipeline run, not per job.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::loader::{self, ConfigFormatError};
use crate::models::{GlobalConfiguration, ProjectConfiguration};

/// Errors loading the referenced global configuration document.
///
/// A malformed global file is as fatal as a malformed project file, so
/// [`ConfigFormatError`] passes through unwrapped.
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    #[error("failed to read global configuration file {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: io::Error,
    },

    #[error(transparent)]
    Format(#[from] ConfigFormatError),
}

/// Load the global configuration referenced by `config`, if any.
///
/// # Arguments
/// * `config` - The project configuration whose `globalFile` to resolve
/// * `base_dir` - The directory containing the project config file actually
///   used
///
/// # Returns
/// `Ok(None)` when the project references no global configuration; otherwise
/// the loaded [`GlobalConfiguration`] or the read/parse failure.
pub fn load_global_config(
    config: &ProjectConfiguration,
    base_dir: &Utf8Path,
) -> Result<Option<GlobalConfiguration>, GlobalConfigError> {
    let Some(path) = config.global_config_path(base_dir) else {
        return Ok(None);
    };

    let text = fs::read_to_string(&path).map_err(|source| GlobalConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let global = loader::load_global(&text)?;

    tracing::debug!("Loaded global configuration from \"{path}\"");
    Ok(Some(global))
}
