pub mod debounce;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod search;
pub mod section;
pub mod sort;

pub use crate::domain::model::{
    BlogPost, CaseStudy, Catalog, CompanySize, FilterGroup, Rating, Section, Taxonomy, Testimonial,
};
pub use crate::domain::ports::{ContentItem, FixtureSource, PageObserver};
pub use crate::utils::error::Result;
