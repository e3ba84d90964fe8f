/// Search and category filtering over a `Catalog`.
///
/// Filtering is a pure function: it never touches the input catalog, holds no state
/// between calls and recomputes from scratch every time.
use std::borrow::Cow;

use crate::model::{Catalog, CatalogEntry, Category};

/// Compute the visible subset of `catalog`.
///
/// - An empty `query` with no `active_category` returns `catalog` itself, borrowed.
/// - Otherwise only the category named exactly `active_category` (if any) is considered,
///   and an entry is kept when its name or description contains `query`, ignoring case.
/// - Categories left without entries are omitted. Order is never changed.
///
/// An `active_category` that names no category yields an empty catalog.
pub fn filter<'a>(catalog: &'a Catalog, query: &str, active_category: Option<&str>) -> Cow<'a, Catalog> {
    if query.is_empty() && active_category.is_none() {
        return Cow::Borrowed(catalog);
    }

    let needle = query.to_lowercase();
    let categories = catalog
        .categories()
        .iter()
        .filter(|category| active_category.map_or(true, |key| category.key == key))
        .filter_map(|category| {
            let entries: Vec<CatalogEntry> = category
                .entries
                .iter()
                .filter(|entry| entry_matches(entry, &needle))
                .cloned()
                .collect();

            (!entries.is_empty()).then(|| Category {
                key: category.key.clone(),
                icon: category.icon,
                entries,
            })
        })
        .collect();

    Cow::Owned(Catalog::new(categories))
}

fn entry_matches(entry: &CatalogEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.name.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
}

/// Transient query text and category selection driving a filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub active_category: Option<String>,
}

impl FilterState {
    /// An empty category string means no category constraint.
    pub fn new(query: impl Into<String>, category: Option<String>) -> Self {
        Self {
            query: query.into(),
            active_category: category.filter(|c| !c.is_empty()),
        }
    }

    /// Select `key`, or clear the selection when `key` is already selected.
    pub fn select_category(&mut self, key: &str) {
        if self.active_category.as_deref() == Some(key) {
            self.active_category = None;
        } else {
            self.active_category = Some(key.to_string());
        }
    }

    pub fn clear_category(&mut self) {
        self.active_category = None;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.active_category.is_none()
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Cow<'a, Catalog> {
        filter(catalog, &self.query, self.active_category.as_deref())
    }
}
