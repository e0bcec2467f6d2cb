use crate::core::pipeline::{run_pipeline, BrowseState, PageResult};
use crate::domain::model::Section;
use crate::domain::ports::{ContentItem, PageObserver};

/// One browsable section: its fixture items, the caller's browse state and
/// the observers notified after a page change.
pub struct SectionView<'a, T: ContentItem> {
    section: Section,
    items: &'a [T],
    state: BrowseState,
    observers: Vec<Box<dyn PageObserver + 'a>>,
    last_page: Option<usize>,
}

impl<'a, T: ContentItem> SectionView<'a, T> {
    pub fn new(section: Section, items: &'a [T], state: BrowseState) -> Self {
        Self {
            section,
            items,
            state,
            observers: Vec::new(),
            last_page: None,
        }
    }

    pub fn with_observer(mut self, observer: impl PageObserver + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BrowseState {
        &mut self.state
    }

    /// Runs the pipeline, then notifies observers if the served page moved.
    pub fn render(&mut self) -> PageResult<'a, T> {
        let result = run_pipeline(self.items, self.state.query());

        // 觀察者只在管線回傳後觸發
        if self.last_page != Some(result.page) {
            if self.last_page.is_some() {
                for observer in &self.observers {
                    observer.page_changed(self.section, result.page);
                }
            }
            self.last_page = Some(result.page);
        }

        result
    }

    /// Navigating away drops all browse state.
    pub fn leave(&mut self) {
        self.state.reset();
        self.last_page = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::SortKey;
    use crate::domain::model::{Rating, Testimonial};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<usize>>>);

    impl PageObserver for Recorder {
        fn page_changed(&self, _section: Section, page: usize) {
            self.0.borrow_mut().push(page);
        }
    }

    fn testimonials(n: usize) -> Vec<Testimonial> {
        (0..n)
            .map(|i| Testimonial {
                id: format!("t{}", i),
                name: format!("Reviewer {}", i),
                role: String::new(),
                company: "Initech".to_string(),
                quote: "Solid engagement".to_string(),
                industry: "technology".to_string(),
                service: "security-audit".to_string(),
                rating: Rating::new(5).unwrap(),
                company_size: None,
                date: None,
                featured: false,
            })
            .collect()
    }

    #[test]
    fn test_observers_fire_only_on_page_change() {
        let items = testimonials(10);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut view = SectionView::new(
            Section::Testimonials,
            &items,
            BrowseState::new(3, SortKey::Identity),
        )
        .with_observer(Recorder(Rc::clone(&seen)));

        view.render();
        assert!(seen.borrow().is_empty());

        view.state_mut().set_page(2);
        let page = view.render();
        assert_eq!(page.page, 2);
        view.render();
        assert_eq!(*seen.borrow(), vec![2]);

        // clamped to the last page
        view.state_mut().set_page(40);
        assert_eq!(view.render().page, 4);
        assert_eq!(*seen.borrow(), vec![2, 4]);

        view.state_mut().set_query("solid");
        view.render();
        assert_eq!(*seen.borrow(), vec![2, 4, 1]);
    }

    #[test]
    fn test_leave_resets_state() {
        let items = testimonials(4);
        let mut view = SectionView::new(
            Section::Testimonials,
            &items,
            BrowseState::new(2, SortKey::Identity),
        );
        view.state_mut().set_query("nothing matches this");
        assert_eq!(view.render().total_count, 0);

        view.leave();
        assert_eq!(view.render().total_count, 4);
        assert_eq!(view.section(), Section::Testimonials);
    }
}
