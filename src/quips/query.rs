//! Filtering and grouping over the snippet collection.
//!
//! Both operations are pure: `filter` keeps the collection's relative order
//! (no ranking), and `group_by_category` partitions by the exact category
//! string. Groups iterate in lexicographic key order, which is also the
//! order the list view renders them in.

use crate::model::Snippet;
use std::collections::BTreeMap;

/// Case-insensitive substring match against title, category, or content.
/// An empty term matches everything.
pub fn filter(snippets: &[Snippet], term: &str) -> Vec<Snippet> {
    if term.is_empty() {
        return snippets.to_vec();
    }
    let needle = term.to_lowercase();
    snippets
        .iter()
        .filter(|s| {
            s.title.to_lowercase().contains(&needle)
                || s.category.to_lowercase().contains(&needle)
                || s.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Partition snippets by category. Every input snippet lands in exactly one
/// group, keyed by its own category string.
pub fn group_by_category(snippets: Vec<Snippet>) -> BTreeMap<String, Vec<Snippet>> {
    let mut groups: BTreeMap<String, Vec<Snippet>> = BTreeMap::new();
    for snippet in snippets {
        groups.entry(snippet.category.clone()).or_default().push(snippet);
    }
    groups
}

/// Snippets flattened in display order: categories lexicographic, collection
/// order within each category. List positions (1-based) index into this.
pub fn display_order(snippets: &[Snippet], term: &str) -> Vec<Snippet> {
    group_by_category(filter(snippets, term))
        .into_values()
        .flatten()
        .collect()
}
