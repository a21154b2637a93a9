//! Per-project orchestration of the resolution control flow.
//!
//! The hosting build pipeline supplies candidate files and option overrides;
//! this module resolves the one applicable config file, loads it, and merges
//! the referenced global configuration, yielding everything the downstream
//! scraper/emitter stages need. One project's outcome never aborts other
//! projects: a project with no resolvable configuration is simply reported as
//! `None` alongside its diagnostics and can be skipped by the host.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::diagnostics::DiagnosticSink;
use crate::merger::{self, GlobalConfigError};
use crate::models::{GlobalConfiguration, ProjectConfiguration, ScraperJobConfiguration};
use crate::resolver::{self, CandidateFile, OptionLookup, ResolveError};

/// A project's fully resolved configuration: the parsed document, the file it
/// came from, and the merged global configuration, if referenced.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProject {
    pub config: ProjectConfiguration,
    pub path: Utf8PathBuf,
    pub global: Option<GlobalConfiguration>,
}

impl ResolvedProject {
    /// The scraper jobs to run for this project, one isolated translation per
    /// entry. Empty when the project configures no scraper.
    pub fn scraper_jobs(&self) -> &[ScraperJobConfiguration] {
        self.config
            .scraper
            .as_ref()
            .and_then(|scraper| scraper.jobs.as_deref())
            .unwrap_or_default()
    }

    /// The file header lines from the merged global configuration, if any.
    pub fn file_header_lines(&self) -> &[String] {
        self.global
            .as_ref()
            .and_then(|global| global.file_header_lines.as_deref())
            .unwrap_or_default()
    }
}

/// Hard failures while resolving one project.
#[derive(Error, Debug)]
pub enum ProjectResolveError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Global(#[from] GlobalConfigError),
}

/// Resolve one project end to end: select the config file, parse it, and load
/// the referenced global configuration relative to the selected file's own
/// directory.
///
/// Returns `Ok(None)` when no configuration file was found (after emitting
/// [`Diagnostic::NoConfigFile`](crate::diagnostics::Diagnostic::NoConfigFile)
/// to the sink); the host decides whether to skip the project or run with
/// pipeline defaults.
pub fn resolve_project<C: CandidateFile>(
    options: &dyn OptionLookup,
    candidates: &[C],
    sink: Option<DiagnosticSink<'_>>,
) -> Result<Option<ResolvedProject>, ProjectResolveError> {
    let Some(resolved) = resolver::resolve_config(options, candidates, sink)? else {
        return Ok(None);
    };

    let base_dir = resolved.path.parent().unwrap_or(Utf8Path::new(""));
    let global = merger::load_global_config(&resolved.config, base_dir)?;

    Ok(Some(ResolvedProject {
        config: resolved.config,
        path: resolved.path,
        global,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScraperConfiguration;
    use crate::resolver::MemoryCandidate;
    use indexmap::IndexMap;

    fn no_options() -> IndexMap<String, String> {
        IndexMap::new()
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let candidates: Vec<MemoryCandidate> = Vec::new();
        let result = resolve_project(&no_options(), &candidates, None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_scraper_jobs_view() {
        let project = ResolvedProject {
            config: ProjectConfiguration {
                scraper: Some(ScraperConfiguration {
                    jobs: Some(vec![ScraperJobConfiguration::default()]),
                }),
                ..Default::default()
            },
            path: "silktouch.json".into(),
            global: None,
        };

        assert_eq!(project.scraper_jobs().len(), 1);
        assert!(project.file_header_lines().is_empty());
    }

    #[test]
    fn test_empty_views_without_scraper_or_global() {
        let project = ResolvedProject {
            config: ProjectConfiguration::default(),
            path: "silktouch.json".into(),
            global: None,
        };

        assert!(project.scraper_jobs().is_empty());
        assert!(project.file_header_lines().is_empty());
    }
}
