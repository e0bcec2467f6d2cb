use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 評分，合法範圍 1..=5（載入時由 `Catalog::validate` 檢查）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Startup,
    SmallBusiness,
    MidMarket,
    Enterprise,
}

impl CompanySize {
    /// Ranking used by the `size-desc` ordering.
    pub fn rank(self) -> u8 {
        match self {
            CompanySize::Enterprise => 4,
            CompanySize::MidMarket => 3,
            CompanySize::SmallBusiness => 2,
            CompanySize::Startup => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::SmallBusiness => "small-business",
            CompanySize::MidMarket => "mid-market",
            CompanySize::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "startup" => Ok(CompanySize::Startup),
            "small-business" => Ok(CompanySize::SmallBusiness),
            "mid-market" => Ok(CompanySize::MidMarket),
            "enterprise" => Ok(CompanySize::Enterprise),
            other => Err(format!("unknown company size '{}'", other)),
        }
    }
}

/// Named filter groups. A group an entity does not support is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterGroup {
    Category,
    Domain,
    Industry,
    Size,
    Rating,
    Tag,
    DateRange,
}

impl FilterGroup {
    pub const ALL: [FilterGroup; 7] = [
        FilterGroup::Category,
        FilterGroup::Domain,
        FilterGroup::Industry,
        FilterGroup::Size,
        FilterGroup::Rating,
        FilterGroup::Tag,
        FilterGroup::DateRange,
    ];

    /// Unknown names yield `None`; callers treat that as "no restriction".
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "category" | "categories" => Some(FilterGroup::Category),
            "domain" | "security-domain" | "service" => Some(FilterGroup::Domain),
            "industry" => Some(FilterGroup::Industry),
            "size" | "company-size" => Some(FilterGroup::Size),
            "rating" => Some(FilterGroup::Rating),
            "tag" | "tags" => Some(FilterGroup::Tag),
            "date-range" | "date" | "year" => Some(FilterGroup::DateRange),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterGroup::Category => "category",
            FilterGroup::Domain => "domain",
            FilterGroup::Industry => "industry",
            FilterGroup::Size => "size",
            FilterGroup::Rating => "rating",
            FilterGroup::Tag => "tag",
            FilterGroup::DateRange => "date-range",
        }
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: Option<NaiveDate>,
    #[serde(default)]
    pub read_minutes: u32,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub client: String,
    pub industry: String,
    #[serde(default)]
    pub security_domains: Vec<String>,
    pub company_size: Option<CompanySize>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub started: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub company: String,
    pub quote: String,
    pub industry: String,
    pub service: String,
    pub rating: Rating,
    pub company_size: Option<CompanySize>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
}

/// Valid filter values, read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub security_domains: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
}

/// The full fixture set for the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub taxonomy: Taxonomy,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Blog,
    CaseStudies,
    Testimonials,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Blog => "blog",
            Section::CaseStudies => "case-studies",
            Section::Testimonials => "testimonials",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = crate::utils::error::CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blog" | "posts" => Ok(Section::Blog),
            "case-studies" | "case_studies" | "cases" => Ok(Section::CaseStudies),
            "testimonials" => Ok(Section::Testimonials),
            other => Err(crate::utils::error::CatalogError::UnknownSection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert_eq!(Rating::new(5).map(Rating::value), Some(5));
        assert!(Rating::new(6).is_none());
    }

    #[test]
    fn test_company_size_rank_order() {
        assert!(CompanySize::Enterprise.rank() > CompanySize::MidMarket.rank());
        assert!(CompanySize::MidMarket.rank() > CompanySize::SmallBusiness.rank());
        assert!(CompanySize::SmallBusiness.rank() > CompanySize::Startup.rank());
        assert_eq!("mid-market".parse::<CompanySize>(), Ok(CompanySize::MidMarket));
    }

    #[test]
    fn test_filter_group_parse() {
        assert_eq!(FilterGroup::parse("Category"), Some(FilterGroup::Category));
        assert_eq!(FilterGroup::parse("date-range"), Some(FilterGroup::DateRange));
        assert_eq!(FilterGroup::parse("colour"), None);
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("case-studies".parse::<Section>().unwrap(), Section::CaseStudies);
        assert!("portfolio".parse::<Section>().is_err());
    }
}
