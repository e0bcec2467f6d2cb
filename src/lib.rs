pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, LogFormat, OutputFormat};

pub use crate::adapters::{BuiltinFixtures, FileFixtureSource, LogPageObserver};
pub use crate::app::{CatalogBrowser, SectionPage};
pub use crate::config::CatalogConfig;
pub use crate::core::filter::Filters;
pub use crate::core::pipeline::{run_pipeline, BrowseState, PageResult, PipelineQuery};
pub use crate::core::section::SectionView;
pub use crate::core::sort::SortKey;
pub use crate::utils::error::{CatalogError, Result};
