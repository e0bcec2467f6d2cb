//! Filter predicate sets: AND across groups, OR within a group.

use crate::domain::model::{FilterGroup, Rating};
use crate::domain::ports::ContentItem;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Pseudo-category that selects on the `featured` flag instead of a tag.
pub const FEATURED: &str = "featured";

/// Selected values per filter group, keyed by canonical group name.
///
/// An empty or missing set means "no restriction" for that group. Aliases
/// (`service`, `categories`, `year`, ...) are folded into the canonical
/// [`FilterGroup`] name so their values OR together. Group names that do not
/// parse are kept as typed but ignored when filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, BTreeSet<String>>);

fn group_key(group: &str) -> String {
    match FilterGroup::parse(group) {
        Some(parsed) => parsed.as_str().to_string(),
        None => group.to_string(),
    }
}

impl<'de> Deserialize<'de> for Filters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, BTreeSet<String>>::deserialize(deserializer)?;
        let mut filters = Filters::new();
        for (group, values) in raw {
            for value in values {
                filters.select(&group, value);
            }
        }
        Ok(filters)
    }
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, group: &str, value: impl Into<String>) -> Self {
        self.select(group, value);
        self
    }

    /// Returns `true` when the value was not already selected.
    pub fn select(&mut self, group: &str, value: impl Into<String>) -> bool {
        self.0.entry(group_key(group)).or_default().insert(value.into())
    }

    pub fn deselect(&mut self, group: &str, value: &str) -> bool {
        let key = group_key(group);
        let removed = self.0.get_mut(&key).is_some_and(|set| set.remove(value));
        if self.0.get(&key).is_some_and(BTreeSet::is_empty) {
            self.0.remove(&key);
        }
        removed
    }

    pub fn toggle(&mut self, group: &str, value: &str) {
        if !self.deselect(group, value) {
            self.select(group, value);
        }
    }

    pub fn clear_group(&mut self, group: &str) {
        self.0.remove(&group_key(group));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn selected(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.0.get(&group_key(group))
    }

    /// Parses `group=value` (as typed on the command line).
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (group, value) = pair.split_once('=')?;
        let (group, value) = (group.trim(), value.trim());
        if group.is_empty() || value.is_empty() {
            return None;
        }
        Some((group.to_string(), value.to_string()))
    }

    /// Groups that actually restrict something.
    pub fn active(&self) -> impl Iterator<Item = (FilterGroup, &BTreeSet<String>)> + '_ {
        self.0.iter().filter(|(_, values)| !values.is_empty()).filter_map(|(name, values)| {
            match FilterGroup::parse(name) {
                Some(group) => Some((group, values)),
                None => {
                    tracing::debug!("Ignoring unknown filter group '{}'", name);
                    None
                }
            }
        })
    }

    pub fn is_unrestricted(&self) -> bool {
        self.active().next().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RatingSelector {
    Exactly(u8),
    AtLeast(u8),
}

impl RatingSelector {
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(min) = value.strip_suffix('+') {
            let min = min.trim().parse().ok()?;
            Rating::new(min).map(|r| RatingSelector::AtLeast(r.value()))
        } else {
            let exact = value.parse().ok()?;
            Rating::new(exact).map(|r| RatingSelector::Exactly(r.value()))
        }
    }

    fn accepts(self, rating: Rating) -> bool {
        match self {
            RatingSelector::Exactly(v) => rating.value() == v,
            RatingSelector::AtLeast(v) => rating.value() >= v,
        }
    }
}

/// Inclusive date bounds; `None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Accepts `YYYY` or `YYYY-MM-DD..YYYY-MM-DD` (either side may be empty).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some((from, to)) = value.split_once("..") {
            let bound = |s: &str| -> Option<Option<NaiveDate>> {
                let s = s.trim();
                if s.is_empty() {
                    Some(None)
                } else {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Some)
                }
            };
            return Some(DateRange {
                from: bound(from)?,
                to: bound(to)?,
            });
        }

        let year: i32 = value.parse().ok()?;
        Some(DateRange {
            from: NaiveDate::from_ymd_opt(year, 1, 1),
            to: NaiveDate::from_ymd_opt(year, 12, 31),
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

fn matches_value<T: ContentItem>(item: &T, group: FilterGroup, value: &str) -> bool {
    match group {
        FilterGroup::Category if value.eq_ignore_ascii_case(FEATURED) => item.featured(),
        FilterGroup::Rating => match (RatingSelector::parse(value), item.rating()) {
            (Some(selector), Some(rating)) => selector.accepts(rating),
            _ => false,
        },
        FilterGroup::DateRange => match (DateRange::parse(value), item.date()) {
            (Some(range), Some(date)) => range.contains(date),
            _ => false,
        },
        _ => item.tags(group).iter().any(|tag| *tag == value),
    }
}

/// Whether `item` passes every active group it supports.
pub fn item_matches<T: ContentItem>(item: &T, filters: &Filters) -> bool {
    filters.active().all(|(group, values)| {
        !item.filter_groups().contains(&group)
            || values.iter().any(|value| matches_value(item, group, value))
    })
}

pub fn apply_filters<'a, T, I>(items: I, filters: &Filters) -> Vec<&'a T>
where
    T: ContentItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| item_matches(*item, filters))
        .collect()
}

/// Per-value counts for a group, for the badges next to each filter option.
pub fn facet_counts<'a, T, I>(items: I, group: FilterGroup) -> BTreeMap<String, usize>
where
    T: ContentItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut counts = BTreeMap::new();
    for item in items {
        if !item.filter_groups().contains(&group) {
            continue;
        }
        let keys: Vec<String> = match group {
            FilterGroup::Rating => item
                .rating()
                .map(|r| r.value().to_string())
                .into_iter()
                .collect(),
            FilterGroup::DateRange => item
                .date()
                .map(|d| d.year().to_string())
                .into_iter()
                .collect(),
            _ => {
                let mut tags: Vec<String> =
                    item.tags(group).into_iter().map(str::to_string).collect();
                if group == FilterGroup::Category && item.featured() {
                    tags.push(FEATURED.to_string());
                }
                tags
            }
        };
        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}
