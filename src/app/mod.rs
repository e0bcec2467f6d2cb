pub mod browse;
pub mod output;

pub use browse::{CatalogBrowser, ItemRow, SectionPage};
