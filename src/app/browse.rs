use crate::config::CatalogConfig;
use crate::core::filter::facet_counts;
use crate::core::pipeline::{run_pipeline, BrowseState, PageResult, PipelineQuery};
use crate::core::{Catalog, ContentItem, FilterGroup, Section};
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Flat view of an item for table and CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub featured: bool,
}

impl ItemRow {
    fn from_item<T: ContentItem>(item: &T) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().to_string(),
            date: item.date(),
            featured: item.featured(),
        }
    }
}

/// One rendered page, independent of the section's item type.
#[derive(Debug, Clone, Serialize)]
pub struct SectionPage {
    pub section: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub items: Vec<serde_json::Value>,
    #[serde(skip)]
    pub rows: Vec<ItemRow>,
}

impl SectionPage {
    fn from_result<T: ContentItem + Serialize>(
        section: Section,
        result: PageResult<'_, T>,
    ) -> Result<Self> {
        let items = result
            .visible_items
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let rows = result.visible_items.iter().map(|item| ItemRow::from_item(*item)).collect();

        Ok(Self {
            section: section.to_string(),
            page: result.page,
            total_pages: result.total_pages,
            total_count: result.total_count,
            items,
            rows,
        })
    }
}

/// Owns the loaded catalog and per-section settings; runs queries against it.
pub struct CatalogBrowser {
    catalog: Catalog,
    config: CatalogConfig,
}

impl CatalogBrowser {
    pub fn new(catalog: Catalog, config: CatalogConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fresh browse state using the section's configured page size and sort.
    pub fn initial_state(&self, section: Section) -> BrowseState {
        let settings = self.config.section(section);
        BrowseState::new(settings.page_size, settings.default_sort)
    }

    pub fn browse(&self, section: Section, query: &PipelineQuery) -> Result<SectionPage> {
        tracing::debug!("Browsing {} with {:?}", section, query);
        match section {
            Section::Blog => {
                SectionPage::from_result(section, run_pipeline(&self.catalog.blog_posts, query))
            }
            Section::CaseStudies => {
                SectionPage::from_result(section, run_pipeline(&self.catalog.case_studies, query))
            }
            Section::Testimonials => {
                SectionPage::from_result(section, run_pipeline(&self.catalog.testimonials, query))
            }
        }
    }

    /// Value counts over the unfiltered section.
    pub fn facets(&self, section: Section, group: FilterGroup) -> BTreeMap<String, usize> {
        match section {
            Section::Blog => facet_counts(&self.catalog.blog_posts, group),
            Section::CaseStudies => facet_counts(&self.catalog.case_studies, group),
            Section::Testimonials => facet_counts(&self.catalog.testimonials, group),
        }
    }
}
