use crate::domain::ports::ContentItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Newest,
    Oldest,
    RatingDesc,
    Impact,
    FeaturedFirst,
    SizeDesc,
    /// Keeps input order.
    #[default]
    Identity,
}

impl SortKey {
    /// Never fails: unrecognised keys fall back to [`SortKey::Identity`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" | "date-desc" => SortKey::Newest,
            "oldest" | "date-asc" => SortKey::Oldest,
            "rating-desc" | "rating" => SortKey::RatingDesc,
            "impact" | "metric-count-desc" => SortKey::Impact,
            "featured-first" | "featured" => SortKey::FeaturedFirst,
            "size-desc" | "size" => SortKey::SizeDesc,
            other => {
                if !other.is_empty() && other != "identity" {
                    tracing::debug!("Unknown sort key '{}', keeping input order", other);
                }
                SortKey::Identity
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::RatingDesc => "rating-desc",
            SortKey::Impact => "impact",
            SortKey::FeaturedFirst => "featured-first",
            SortKey::SizeDesc => "size-desc",
            SortKey::Identity => "identity",
        }
    }

    pub fn compare<T: ContentItem>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Newest => missing_last(a.date(), b.date(), |x, y| y.cmp(x)),
            SortKey::Oldest => missing_last(a.date(), b.date(), |x, y| x.cmp(y)),
            SortKey::RatingDesc => missing_last(a.rating(), b.rating(), |x, y| y.cmp(x)),
            SortKey::Impact => b.metric_count().cmp(&a.metric_count()),
            SortKey::FeaturedFirst => b
                .featured()
                .cmp(&a.featured())
                .then_with(|| SortKey::Newest.compare(a, b)),
            SortKey::SizeDesc => missing_last(
                a.company_size().map(|s| s.rank()),
                b.company_size().map(|s| s.rank()),
                |x, y| y.cmp(x),
            ),
            SortKey::Identity => Ordering::Equal,
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse(value))
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SortKey::parse(&raw))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders present values with `cmp`; `None` always goes after `Some`.
fn missing_last<V>(a: Option<V>, b: Option<V>, cmp: impl Fn(&V, &V) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort; items with equal keys keep their relative input order.
pub fn sort_items<'a, T: ContentItem>(mut items: Vec<&'a T>, key: SortKey) -> Vec<&'a T> {
    if key != SortKey::Identity {
        items.sort_by(|a, b| key.compare(*a, *b));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CaseStudy, CompanySize, Metric};
    use chrono::NaiveDate;

    fn study(
        id: &str,
        started: Option<(i32, u32, u32)>,
        size: Option<CompanySize>,
        metrics: usize,
        featured: bool,
    ) -> CaseStudy {
        CaseStudy {
            id: id.to_string(),
            title: id.to_uppercase(),
            subtitle: String::new(),
            description: String::new(),
            client: "Client".to_string(),
            industry: "finance".to_string(),
            security_domains: vec![],
            company_size: size,
            technologies: vec![],
            metrics: (0..metrics)
                .map(|i| Metric {
                    label: format!("metric {}", i),
                    value: "1".to_string(),
                })
                .collect(),
            started: started.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            featured,
        }
    }

    fn order(items: &[CaseStudy], key: SortKey) -> Vec<&str> {
        sort_items(items.iter().collect(), key)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect()
    }

    #[test]
    fn test_newest_and_oldest_put_missing_dates_last() {
        let items = vec![
            study("undated", None, None, 0, false),
            study("mid", Some((2023, 6, 1)), None, 0, false),
            study("new", Some((2024, 1, 1)), None, 0, false),
            study("old", Some((2021, 3, 9)), None, 0, false),
        ];
        assert_eq!(order(&items, SortKey::Newest), vec!["new", "mid", "old", "undated"]);
        assert_eq!(order(&items, SortKey::Oldest), vec!["old", "mid", "new", "undated"]);
    }

    #[test]
    fn test_featured_first_breaks_ties_by_newest() {
        let items = vec![
            study("a", Some((2022, 1, 1)), None, 0, false),
            study("b", Some((2021, 1, 1)), None, 0, true),
            study("c", Some((2024, 1, 1)), None, 0, true),
            study("d", Some((2023, 1, 1)), None, 0, false),
        ];
        assert_eq!(order(&items, SortKey::FeaturedFirst), vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_size_desc_uses_rank_table() {
        let items = vec![
            study("s", None, Some(CompanySize::Startup), 0, false),
            study("none", None, None, 0, false),
            study("e", None, Some(CompanySize::Enterprise), 0, false),
            study("m", None, Some(CompanySize::MidMarket), 0, false),
        ];
        assert_eq!(order(&items, SortKey::SizeDesc), vec!["e", "m", "s", "none"]);
    }

    #[test]
    fn test_impact_counts_metrics_and_is_stable() {
        let items = vec![
            study("two-a", None, None, 2, false),
            study("three", None, None, 3, false),
            study("two-b", None, None, 2, false),
            study("zero", None, None, 0, false),
        ];
        assert_eq!(order(&items, SortKey::Impact), vec!["three", "two-a", "two-b", "zero"]);
    }

    #[test]
    fn test_unknown_key_keeps_input_order() {
        let items = vec![
            study("z", Some((2020, 1, 1)), None, 0, false),
            study("a", Some((2024, 1, 1)), None, 0, false),
        ];
        let key = SortKey::parse("alphabetical");
        assert_eq!(key, SortKey::Identity);
        assert_eq!(order(&items, key), vec!["z", "a"]);
    }

    #[test]
    fn test_deserialize_never_fails() {
        let key: SortKey = serde_json::from_str("\"size-desc\"").unwrap();
        assert_eq!(key, SortKey::SizeDesc);
        let key: SortKey = serde_json::from_str("\"popularity\"").unwrap();
        assert_eq!(key, SortKey::Identity);
        assert_eq!(serde_json::to_string(&SortKey::RatingDesc).unwrap(), "\"rating-desc\"");
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(SortKey::parse("metric-count-desc"), SortKey::Impact);
        assert_eq!("RATING-DESC".parse::<SortKey>().unwrap(), SortKey::RatingDesc);
        assert_eq!(SortKey::Newest.to_string(), "newest");
    }
}
