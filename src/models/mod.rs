//! The settings model: immutable value objects describing one generation job.
//!
//! - [`ProjectConfiguration`]: the root unit of configuration for one project,
//!   loaded from exactly one `silktouch.json` selected by the resolver
//! - [`GlobalConfiguration`]: cross-project settings referenced via `globalFile`
//! - [`ScraperConfiguration`] / [`ScraperJobConfiguration`]: the ordered
//!   sequence of fully isolated scraper jobs
//! - [`Excludes`] / [`ExclusionHints`]: which native symbols to omit
//! - [`FormFactors`]: which packaging/runtime targets a stage runs under
//!
//! Every field of every model is optional; absence means "pipeline default"
//! and is resolved downstream, never here. Instances are plain owned data:
//! once loaded they are only read, and cloning a job never shares state with
//! its siblings.

pub mod config;
pub mod excludes;
pub mod form_factors;

pub use config::{
    EmitterConfiguration, GlobalConfiguration, OverloaderConfiguration, ProjectConfiguration,
    ScraperConfiguration, ScraperJobConfiguration,
};
pub use excludes::{Excludes, ExclusionHints};
pub use form_factors::FormFactors;
