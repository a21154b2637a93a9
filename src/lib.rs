// silktouch-config - configuration resolution and job model for the SilkTouch
// bindings generator.
//
// This crate decides which configuration document governs a project, parses
// it into an immutable settings model, and merges in the shared global
// document. Missing or duplicate configuration is reported as structured
// diagnostics rather than guessed at, since a bad merge or an unnoticed
// duplicate file silently produces wrong bindings for an entire native API
// surface. The scraper, emitter, and overloader stages consume the resolved
// model and live elsewhere.

pub mod diagnostics;
pub mod loader;
pub mod merger;
pub mod models;
pub mod pipeline;
pub mod resolver;

// Re-export commonly used types for convenience
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use loader::ConfigFormatError;
pub use merger::GlobalConfigError;
pub use models::{
    EmitterConfiguration, Excludes, ExclusionHints, FormFactors, GlobalConfiguration,
    OverloaderConfiguration, ProjectConfiguration, ScraperConfiguration, ScraperJobConfiguration,
};
pub use pipeline::{ProjectResolveError, ResolvedProject, resolve_project};
pub use resolver::{
    CONFIG_FILE_OPTION, CandidateFile, DEFAULT_CONFIG_FILE_NAME, FsCandidate, MemoryCandidate,
    OptionLookup, ResolveError, ResolvedConfig, resolve_config,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
