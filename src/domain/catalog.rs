use crate::domain::model::{Catalog, Taxonomy};
use crate::domain::ports::ContentItem;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, Validate};

/// Demo fixture set compiled into the crate.
pub const BUILTIN_FIXTURES: &str = include_str!("../../fixtures/site.toml");

impl Catalog {
    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::toml("fixtures", e))
    }

    /// 從 JSON 字串解析
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 內建示範資料
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_toml_str(BUILTIN_FIXTURES)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.blog_posts.len() + self.case_studies.len() + self.testimonials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_ids<T: ContentItem>(collection: &str, items: &[T]) -> Result<()> {
    for item in items {
        validate_non_empty_string(&format!("{}.id", collection), item.id())?;
    }
    validate_unique_ids(collection, items.iter().map(ContentItem::id))
}

/// An empty taxonomy list means "not enforced".
fn check_member(allowed: &[String], taxonomy: &str, id: &str, value: &str) -> Result<()> {
    if allowed.is_empty() || allowed.iter().any(|v| v == value) {
        return Ok(());
    }
    Err(CatalogError::UnknownTaxonomyValue {
        id: id.to_string(),
        taxonomy: taxonomy.to_string(),
        value: value.to_string(),
    })
}

fn check_taxonomy(catalog: &Catalog) -> Result<()> {
    let Taxonomy {
        categories,
        security_domains,
        industries,
    } = &catalog.taxonomy;

    for post in &catalog.blog_posts {
        check_member(categories, "category", &post.id, &post.category)?;
    }

    for study in &catalog.case_studies {
        check_member(industries, "industry", &study.id, &study.industry)?;
        for domain in &study.security_domains {
            check_member(security_domains, "security domain", &study.id, domain)?;
        }
    }

    for testimonial in &catalog.testimonials {
        check_member(industries, "industry", &testimonial.id, &testimonial.industry)?;
        check_member(
            security_domains,
            "security domain",
            &testimonial.id,
            &testimonial.service,
        )?;
    }

    Ok(())
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        check_ids("blog_posts", &self.blog_posts)?;
        check_ids("case_studies", &self.case_studies)?;
        check_ids("testimonials", &self.testimonials)?;

        for testimonial in &self.testimonials {
            if !testimonial.rating.is_valid() {
                return Err(CatalogError::InvalidRating {
                    id: testimonial.id.clone(),
                    value: testimonial.rating.value(),
                });
            }
        }

        check_taxonomy(self)?;

        tracing::debug!(
            "Catalog validated: {} posts, {} case studies, {} testimonials",
            self.blog_posts.len(),
            self.case_studies.len(),
            self.testimonials.len()
        );
        Ok(())
    }
}
