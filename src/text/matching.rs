use super::normalize::{normalize_opt, NormalizedText};

/// True iff the normalized `query` is a contiguous substring of the
/// normalized `target`. Not symmetric.
pub fn fuzzy_match(target: &str, query: &str) -> bool {
    NormalizedText::new(target).contains(&NormalizedText::new(query))
}

/// Same as [`fuzzy_match`] with absent inputs treated as empty text.
pub fn fuzzy_match_opt(target: Option<&str>, query: Option<&str>) -> bool {
    normalize_opt(target).contains(normalize_opt(query).as_str())
}

/// Keep the items whose `key` fuzzy-matches `query`, in their original order.
/// The query is normalized once.
pub fn fuzzy_filter<'a, T, F>(items: &'a [T], query: &str, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let needle = NormalizedText::new(query);
    items
        .iter()
        .filter(|item| NormalizedText::new(key(*item)).contains(&needle))
        .collect()
}
