use crate::domain::model::{BlogPost, CaseStudy, CompanySize, FilterGroup, Rating, Testimonial};
use crate::domain::ports::ContentItem;
use chrono::NaiveDate;

const BLOG_GROUPS: &[FilterGroup] = &[
    FilterGroup::Category,
    FilterGroup::Tag,
    FilterGroup::DateRange,
];

const CASE_STUDY_GROUPS: &[FilterGroup] = &[
    FilterGroup::Category,
    FilterGroup::Domain,
    FilterGroup::Industry,
    FilterGroup::Size,
    FilterGroup::DateRange,
];

const TESTIMONIAL_GROUPS: &[FilterGroup] = &[
    FilterGroup::Category,
    FilterGroup::Domain,
    FilterGroup::Industry,
    FilterGroup::Size,
    FilterGroup::Rating,
    FilterGroup::DateRange,
];

impl ContentItem for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
            self.author.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn filter_groups(&self) -> &'static [FilterGroup] {
        BLOG_GROUPS
    }

    fn tags(&self, group: FilterGroup) -> Vec<&str> {
        match group {
            FilterGroup::Category => vec![self.category.as_str()],
            FilterGroup::Tag => self.tags.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        self.published
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

impl ContentItem for CaseStudy {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.subtitle.as_str(),
            self.description.as_str(),
            self.client.as_str(),
        ];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }

    fn filter_groups(&self) -> &'static [FilterGroup] {
        CASE_STUDY_GROUPS
    }

    fn tags(&self, group: FilterGroup) -> Vec<&str> {
        match group {
            // 案例的分類即資安領域
            FilterGroup::Category | FilterGroup::Domain => {
                self.security_domains.iter().map(String::as_str).collect()
            }
            FilterGroup::Industry => vec![self.industry.as_str()],
            FilterGroup::Size => self.company_size.map(CompanySize::as_str).into_iter().collect(),
            _ => Vec::new(),
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        self.started
    }

    fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    fn company_size(&self) -> Option<CompanySize> {
        self.company_size
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

impl ContentItem for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.quote.as_str(),
            self.company.as_str(),
            self.service.as_str(),
        ]
    }

    fn filter_groups(&self) -> &'static [FilterGroup] {
        TESTIMONIAL_GROUPS
    }

    fn tags(&self, group: FilterGroup) -> Vec<&str> {
        match group {
            FilterGroup::Category | FilterGroup::Domain => vec![self.service.as_str()],
            FilterGroup::Industry => vec![self.industry.as_str()],
            FilterGroup::Size => self.company_size.map(CompanySize::as_str).into_iter().collect(),
            _ => Vec::new(),
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn rating(&self) -> Option<Rating> {
        Some(self.rating)
    }

    fn company_size(&self) -> Option<CompanySize> {
        self.company_size
    }

    fn featured(&self) -> bool {
        self.featured
    }
}
