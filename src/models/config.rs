use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Excludes, FormFactors};

/// Common configuration shared across all projects, loaded from the document
/// referenced by [`ProjectConfiguration::global_config_file`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalConfiguration {
    /// Lines of the file header prepended to every generated file.
    #[serde(rename = "fileHeader", skip_serializing_if = "Option::is_none")]
    pub file_header_lines: Option<Vec<String>>,
}

/// The root configuration structure for one project.
///
/// Every field is optional: an absent field means "use the pipeline default",
/// which is resolved by the consuming scraper/emitter stage, never by this
/// model. Instances are created by [`crate::loader::load`] from exactly one
/// document selected by [`crate::resolver::resolve_config`] and are read-only
/// afterward.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    /// Path to the global configuration document, relative to the directory
    /// containing this project's own config file (absolute paths are used
    /// verbatim).
    #[serde(rename = "globalFile", skip_serializing_if = "Option::is_none")]
    pub global_config_file: Option<String>,

    /// Emitter-specific configuration for this project.
    #[serde(rename = "emitter", skip_serializing_if = "Option::is_none")]
    pub emitter: Option<EmitterConfiguration>,

    /// Overloader-specific configuration for this project.
    #[serde(rename = "overloader", skip_serializing_if = "Option::is_none")]
    pub overloader: Option<OverloaderConfiguration>,

    /// Scraper-specific configuration for this project.
    #[serde(rename = "scraper", skip_serializing_if = "Option::is_none")]
    pub scraper: Option<ScraperConfiguration>,

    /// Named environmental conditions under which a command-line driver should
    /// skip this project entirely, e.g. don't generate unless on Windows.
    #[serde(rename = "cliSkipIf", skip_serializing_if = "Option::is_none")]
    pub command_line_skip_if: Option<Vec<String>>,
}

impl ProjectConfiguration {
    /// Resolve [`global_config_file`](Self::global_config_file) against the
    /// directory containing this project's config document.
    ///
    /// Returns `None` when no global file is referenced. An absolute path is
    /// returned verbatim; a relative path is joined onto `base_dir`.
    pub fn global_config_path(&self, base_dir: &Utf8Path) -> Option<Utf8PathBuf> {
        let file = self.global_config_file.as_deref()?;
        let path = Utf8Path::new(file);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(base_dir.join(path))
        }
    }

    /// Check whether a command-line driver should skip this project given the
    /// set of currently active environmental conditions.
    ///
    /// Any single `cliSkipIf` entry matching an active condition is enough.
    pub fn should_skip(&self, active_conditions: &[&str]) -> bool {
        self.command_line_skip_if
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|cond| active_conditions.contains(&cond.as_str()))
    }
}

/// Emitter-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmitterConfiguration {
    /// The form factors in which the emitter should run. Absent means just
    /// the default build-time target.
    #[serde(rename = "mode", skip_serializing_if = "Option::is_none")]
    pub form_factors: Option<FormFactors>,
}

/// Overloader-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverloaderConfiguration {
    /// The form factors in which the overloader should run. Absent means just
    /// the default build-time target.
    #[serde(rename = "mode", skip_serializing_if = "Option::is_none")]
    pub form_factors: Option<FormFactors>,
}

/// Scraper-specific configuration: the list of independent scraper jobs.
///
/// Each job's resources (translation units, include paths, exclusions) are
/// fully isolated from every other job in the sequence; there is no shared
/// state and no dependency ordering between jobs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScraperConfiguration {
    #[serde(rename = "jobs", skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<ScraperJobConfiguration>>,
}

/// Configuration for a single scraper job: one isolated native-header-to-
/// binding translation.
///
/// No field is required. Absent fields are resolved to defaults by the
/// scraper/emitter stage downstream of this model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScraperJobConfiguration {
    /// Lines of a synthetic C/C++ header, usually `#include` directives whose
    /// targets are bound conditional on [`traverse`](Self::traverse).
    #[serde(rename = "headerText", skip_serializing_if = "Option::is_none")]
    pub header_text: Option<Vec<String>>,

    /// Extra directories to search for `#include`d headers.
    #[serde(rename = "include", skip_serializing_if = "Option::is_none")]
    pub include_directories: Option<Vec<String>>,

    /// File paths or glob expressions selecting which headers' declarations
    /// end up in the bindings.
    #[serde(rename = "traverse", skip_serializing_if = "Option::is_none")]
    pub traverse: Option<Vec<String>>,

    /// Whether to make Unix-style low-level layout decisions for constructs
    /// that are not cross-platform, such as bitfield byte allocation.
    #[serde(rename = "unixMode", skip_serializing_if = "Option::is_none")]
    pub unix_mode: Option<bool>,

    /// Native symbols to omit from the generated bindings.
    #[serde(rename = "exclude", skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Excludes>,

    /// Named transformation passes applied to the scraped representation
    /// before emission.
    #[serde(rename = "mods", skip_serializing_if = "Option::is_none")]
    pub mods: Option<Vec<String>>,

    /// Options exposed to mods to customise their behaviour.
    #[serde(rename = "modOptions", skip_serializing_if = "Option::is_none")]
    pub mod_options: Option<IndexMap<String, String>>,

    /// Names of the native libraries the bindings should load at runtime.
    #[serde(rename = "libraryNames", skip_serializing_if = "Option::is_none")]
    pub library_names: Option<Vec<String>>,

    /// The namespace for generated code.
    #[serde(rename = "namespace", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The source language dialect to parse headers as.
    #[serde(rename = "language", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// The language standard to parse headers as.
    #[serde(rename = "std", skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,

    /// Additional raw arguments passed to the compiler front-end.
    #[serde(rename = "clangArgs", skip_serializing_if = "Option::is_none")]
    pub additional_clang_arguments: Option<Vec<String>>,

    /// Preprocessor macros defined ahead of translation-unit creation.
    #[serde(rename = "define", skip_serializing_if = "Option::is_none")]
    pub define_macros: Option<Vec<String>>,

    /// The class name for generated code.
    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// A prefix stripped from the start of native function names.
    #[serde(rename = "methodPrefix", skip_serializing_if = "Option::is_none")]
    pub method_prefix_to_strip: Option<String>,

    /// External files containing native type-name remappings.
    #[serde(rename = "remappingFiles", skip_serializing_if = "Option::is_none")]
    pub remapping_files: Option<Vec<String>>,

    /// Explicit calling conventions keyed by function name.
    #[serde(rename = "conventions", skip_serializing_if = "Option::is_none")]
    pub calling_conventions: Option<IndexMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_path_relative() {
        let config = ProjectConfiguration {
            global_config_file: Some("shared/global.json".to_string()),
            ..Default::default()
        };

        let path = config.global_config_path(Utf8Path::new("/proj")).unwrap();
        assert_eq!(path, Utf8PathBuf::from("/proj/shared/global.json"));
    }

    #[test]
    fn test_global_path_absolute() {
        let config = ProjectConfiguration {
            global_config_file: Some("/abs/global.json".to_string()),
            ..Default::default()
        };

        let path = config.global_config_path(Utf8Path::new("/proj")).unwrap();
        assert_eq!(path, Utf8PathBuf::from("/abs/global.json"));
    }

    #[test]
    fn test_global_path_absent() {
        let config = ProjectConfiguration::default();
        assert!(config.global_config_path(Utf8Path::new("/proj")).is_none());
    }

    #[test]
    fn test_should_skip() {
        let config = ProjectConfiguration {
            command_line_skip_if: Some(vec!["not-windows".to_string()]),
            ..Default::default()
        };

        assert!(config.should_skip(&["not-windows", "ci"]));
        assert!(!config.should_skip(&["ci"]));
        assert!(!ProjectConfiguration::default().should_skip(&["anything"]));
    }
}
