use crate::domain::model::{Catalog, CompanySize, FilterGroup, Rating, Section};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Shape shared by every browsable record (blog post, case study, testimonial).
pub trait ContentItem {
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    /// Fields probed by search, in a fixed per-entity order.
    fn search_fields(&self) -> Vec<&str>;

    /// Filter groups this entity understands. Anything else is ignored.
    fn filter_groups(&self) -> &'static [FilterGroup];

    /// Categorical values for a tag-set group. Empty when not applicable.
    fn tags(&self, group: FilterGroup) -> Vec<&str>;

    fn date(&self) -> Option<NaiveDate> {
        None
    }

    fn rating(&self) -> Option<Rating> {
        None
    }

    fn metric_count(&self) -> usize {
        0
    }

    fn company_size(&self) -> Option<CompanySize> {
        None
    }

    fn featured(&self) -> bool;
}

/// Supplies the static fixture set. Loaded once at start-up.
pub trait FixtureSource: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Catalog>> + Send;
}

/// Side effects (scroll to top, analytics) run after a page change,
/// never inside the pipeline itself.
pub trait PageObserver {
    fn page_changed(&self, section: Section, page: usize);
}
