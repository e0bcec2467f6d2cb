use crate::core::{PageObserver, Section};

/// Stands in for the browser's scroll-to-top: records the page change in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPageObserver;

impl PageObserver for LogPageObserver {
    fn page_changed(&self, section: Section, page: usize) {
        tracing::info!("📄 {} moved to page {}, scrolling to top", section, page);
    }
}
