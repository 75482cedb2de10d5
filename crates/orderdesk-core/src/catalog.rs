//! # Catalog
//!
//! Immutable item catalog with id lookup, listing, substring search and the
//! "buy again" subset filter. Built once from seed data at startup; the
//! portal never mutates it afterwards.

use std::collections::{BTreeSet, HashMap};

use crate::types::Item;

/// Immutable catalog with an id index.
///
/// Lookups by id are O(1); search walks the listing lazily so callers can
/// stop early or collect, whichever the view needs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from a list of items.
    ///
    /// Listing order is preserved. On duplicate ids the first entry wins.
    pub fn new(items: Vec<Item>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        let mut deduped = Vec::with_capacity(items.len());

        for item in items {
            if index.contains_key(&item.id) {
                continue;
            }
            index.insert(item.id.clone(), deduped.len());
            deduped.push(item);
        }

        Catalog {
            items: deduped,
            index,
        }
    }

    /// Looks up an item by catalog id.
    ///
    /// Absence is an omission, not an error: callers substitute placeholders
    /// (snapshot derivation) or surface a not-found response (commands).
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&idx| &self.items[idx])
    }

    /// Full listing in seed order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive substring search over name OR sku.
    ///
    /// The term is trimmed first; an empty term matches everything.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Item> + 'a {
        let needle = term.trim().to_lowercase();
        self.items.iter().filter(move |item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.sku.to_lowercase().contains(&needle)
        })
    }

    /// Items whose id appears in `ids`, in catalog order.
    ///
    /// Unknown ids are skipped. This backs the "buy again" view, where `ids`
    /// is derived from the order history.
    pub fn filter_by_ids<'a>(
        &'a self,
        ids: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| ids.contains(&item.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, sku: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            sku: sku.to_string(),
            name: name.to_string(),
            unit: "case".to_string(),
            stock_on_hand: 10,
            rate_cents: 1250,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            item("201", "CONT-RD-24", "24 oz Round Deli Container"),
            item("202", "CUP-CS-12", "12 oz Cold Cup Clear"),
            item("203", "LID-CS-12", "12 oz Cold Cup Dome Lid"),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("202").map(|i| i.sku.as_str()), Some("CUP-CS-12"));
        assert!(catalog.get("999").is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let catalog = Catalog::new(vec![
            item("201", "FIRST", "First Entry"),
            item("201", "SECOND", "Second Entry"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("201").map(|i| i.sku.as_str()), Some("FIRST"));
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let catalog = sample_catalog();
        let hits: Vec<_> = catalog.search("DELI").map(|i| i.id.as_str()).collect();
        assert_eq!(hits, vec!["201"]);
    }

    #[test]
    fn test_search_matches_sku() {
        let catalog = sample_catalog();
        let hits: Vec<_> = catalog.search("cs-12").map(|i| i.id.as_str()).collect();
        assert_eq!(hits, vec!["202", "203"]);
    }

    #[test]
    fn test_search_trims_term() {
        let catalog = sample_catalog();
        let hits: Vec<_> = catalog.search("  lid  ").map(|i| i.id.as_str()).collect();
        assert_eq!(hits, vec!["203"]);
    }

    #[test]
    fn test_search_empty_term_returns_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("").count(), 3);
        assert_eq!(catalog.search("   ").count(), 3);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("napkin").count(), 0);
    }

    #[test]
    fn test_filter_by_ids_preserves_catalog_order() {
        let catalog = sample_catalog();
        let ids: BTreeSet<String> = ["203", "201", "999"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let hits: Vec<_> = catalog.filter_by_ids(&ids).map(|i| i.id.as_str()).collect();
        assert_eq!(hits, vec!["201", "203"]);
    }
}
