pub mod toml_config;

pub use toml_config::{CatalogConfig, SectionConfig};

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "content-pipeline")]
#[command(about = "Browse the portfolio site's blog, case studies and testimonials")]
pub struct CliConfig {
    /// Section to browse: blog, case-studies or testimonials
    #[arg(short, long, default_value = "blog")]
    pub section: String,

    /// Fixture file (.toml or .json); the built-in demo set is used otherwise
    #[arg(long)]
    pub fixtures: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Filter as group=value; repeat for more values
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,

    /// Case-insensitive search text
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// newest, oldest, rating-desc, impact, featured-first, size-desc
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(short, long, default_value = "1")]
    pub page: usize,

    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print value counts for a filter group instead of a page
    #[arg(long)]
    pub facets: Option<String>,

    /// Read search text line by line from stdin, debounced
    #[arg(short, long)]
    pub interactive: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// CLI 參數覆蓋配置檔
    pub fn apply_to(&self, config: &mut CatalogConfig) {
        if let Some(fixtures) = &self.fixtures {
            config.catalog.fixtures = Some(fixtures.clone());
        }
    }
}
