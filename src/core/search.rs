use crate::domain::ports::ContentItem;

/// Case-insensitive substring test over the item's probed fields.
/// An empty or whitespace-only query matches everything.
pub fn item_matches_query<T: ContentItem>(item: &T, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    contains_needle(item, &query.to_lowercase())
}

fn contains_needle<T: ContentItem>(item: &T, needle: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Narrows `items` to those whose searchable text contains `query`.
///
/// No tokenization or ranking: plain substring containment, OR across fields.
pub fn search<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: ContentItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if query.trim().is_empty() {
        return items.into_iter().collect();
    }
    let needle = query.to_lowercase();

    items
        .into_iter()
        .filter(|item| contains_needle(*item, &needle))
        .collect()
}
