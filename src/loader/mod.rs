//! Pure text ⇄ settings-model conversion.
//!
//! The loader performs no filesystem access and no resolution logic; callers
//! supply already-read document text. Anything that does not parse into the
//! expected shape, including a `null` root, is a [`ConfigFormatError`] — a
//! caller must never receive a usable-looking but empty configuration
//! silently.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{GlobalConfiguration, ProjectConfiguration};

/// Errors produced when a configuration document cannot be converted.
#[derive(Error, Debug)]
pub enum ConfigFormatError {
    #[error("configuration document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration document deserialized to a null root")]
    NullDocument,
}

/// Load a project configuration document.
///
/// # Arguments
/// * `text` - The JSON text of a `silktouch.json` document
///
/// # Returns
/// The deserialized [`ProjectConfiguration`], or a [`ConfigFormatError`] for
/// malformed JSON or a `null` root.
pub fn load(text: &str) -> Result<ProjectConfiguration, ConfigFormatError> {
    let config = load_document::<ProjectConfiguration>(text)?;
    tracing::debug!("Loaded project configuration");
    Ok(config)
}

/// Serialize a project configuration back to document text.
///
/// Round-trip guarantee: `load(&save(&c)?)? == c` for any configuration built
/// from representable values, since absent fields are omitted entirely.
pub fn save(config: &ProjectConfiguration) -> Result<String, ConfigFormatError> {
    save_document(config)
}

/// Load a global configuration document.
pub fn load_global(text: &str) -> Result<GlobalConfiguration, ConfigFormatError> {
    let config = load_document::<GlobalConfiguration>(text)?;
    tracing::debug!("Loaded global configuration");
    Ok(config)
}

/// Serialize a global configuration back to document text.
pub fn save_global(config: &GlobalConfiguration) -> Result<String, ConfigFormatError> {
    save_document(config)
}

// Deserializing through Option<T> makes the null-root case explicit rather
// than relying on serde's per-type null handling.
fn load_document<T: DeserializeOwned>(text: &str) -> Result<T, ConfigFormatError> {
    serde_json::from_str::<Option<T>>(text)?.ok_or(ConfigFormatError::NullDocument)
}

fn save_document<T: Serialize>(value: &T) -> Result<String, ConfigFormatError> {
    Ok(serde_json::to_string_pretty(value)?)
}
