use crate::core::sort::SortKey;
use crate::domain::model::Section;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_PAGE_SIZE: usize = 100;
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: FixtureConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// 未設定時使用內建示範資料
    pub fixtures: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionConfig {
    pub page_size: usize,
    pub default_sort: SortKey,
}

impl SectionConfig {
    fn blog() -> Self {
        Self {
            page_size: 6,
            default_sort: SortKey::Newest,
        }
    }

    fn case_studies() -> Self {
        Self {
            page_size: 6,
            default_sort: SortKey::FeaturedFirst,
        }
    }

    fn testimonials() -> Self {
        Self {
            page_size: 9,
            default_sort: SortKey::Newest,
        }
    }
}

/// 各區塊設定；未寫出的欄位沿用該區塊的預設值
#[derive(Debug, Clone, Serialize)]
pub struct SectionsConfig {
    pub blog: SectionConfig,
    #[serde(rename = "case-studies")]
    pub case_studies: SectionConfig,
    pub testimonials: SectionConfig,
}

#[derive(Debug, Default, Deserialize)]
struct SectionOverrides {
    page_size: Option<usize>,
    default_sort: Option<SortKey>,
}

impl SectionOverrides {
    fn apply(self, base: SectionConfig) -> SectionConfig {
        SectionConfig {
            page_size: self.page_size.unwrap_or(base.page_size),
            default_sort: self.default_sort.unwrap_or(base.default_sort),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSections {
    blog: SectionOverrides,
    #[serde(rename = "case-studies", alias = "case_studies")]
    case_studies: SectionOverrides,
    testimonials: SectionOverrides,
}

impl<'de> Deserialize<'de> for SectionsConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawSections::deserialize(deserializer)?;
        Ok(Self {
            blog: raw.blog.apply(SectionConfig::blog()),
            case_studies: raw.case_studies.apply(SectionConfig::case_studies()),
            testimonials: raw.testimonials.apply(SectionConfig::testimonials()),
        })
    }
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            blog: SectionConfig::blog(),
            case_studies: SectionConfig::case_studies(),
            testimonials: SectionConfig::testimonials(),
        }
    }
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        toml::from_str(&processed_content).map_err(|e| CatalogError::toml("config", e))
    }

    /// 替換環境變數 (例如 ${FIXTURES_DIR})，未定義者保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn section(&self, section: Section) -> &SectionConfig {
        match section {
            Section::Blog => &self.sections.blog,
            Section::CaseStudies => &self.sections.case_studies,
            Section::Testimonials => &self.sections.testimonials,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn fixtures_path(&self) -> Option<&str> {
        self.catalog.fixtures.as_deref()
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.fixtures_path() {
            validate_path("catalog.fixtures", path)?;
            validate_file_extension("catalog.fixtures", path, &["toml", "json"])?;
        }

        validate_range("search.debounce_ms", self.search.debounce_ms, 0, MAX_DEBOUNCE_MS)?;

        for section in [Section::Blog, Section::CaseStudies, Section::Testimonials] {
            let field = format!("sections.{}.page_size", section);
            let page_size = self.section(section).page_size;
            validate_positive_number(&field, page_size, 1)?;
            validate_range(&field, page_size, 1, MAX_PAGE_SIZE)?;
        }

        Ok(())
    }
}
