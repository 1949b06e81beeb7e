// ── Search / filter engine ──
//
// Case-insensitive substring matching over a fixed set of fields. The
// engine itself is synchronous and only ever runs against an already
// fetched list; for server-paginated screens the query travels as
// request parameters instead and the response is the filter boundary.

use crate::model::Searchable;

/// Which field(s) a query matches against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// OR-match across every configured field.
    #[default]
    All,
    /// Match one named field only. A name outside the configured set
    /// matches nothing.
    Field(String),
}

/// A free-text query plus its field discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub mode: SearchMode,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    /// Empty or whitespace-only queries match everything.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether one item matches this query.
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if self.is_blank() {
            return true;
        }
        let needle = self.text.trim().to_lowercase();
        match &self.mode {
            SearchMode::All => T::search_fields()
                .iter()
                .any(|field| field_contains(item, field, &needle)),
            SearchMode::Field(field) => field_contains(item, field, &needle),
        }
    }

    /// The `field` request parameter for server-side filtering.
    pub fn field_param(&self) -> Option<String> {
        match &self.mode {
            SearchMode::All => None,
            SearchMode::Field(field) => Some(field.clone()),
        }
    }
}

fn field_contains<T: Searchable>(item: &T, field: &str, needle: &str) -> bool {
    item.search_value(field)
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Filter a list down to the items matching `query`, preserving order.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &SearchQuery) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    struct Named {
        name: &'static str,
        mac: &'static str,
    }

    impl Searchable for Named {
        fn search_fields() -> &'static [&'static str] {
            &["name", "mac"]
        }

        fn search_value(&self, field: &str) -> Option<Cow<'_, str>> {
            match field {
                "name" => Some(Cow::Borrowed(self.name)),
                "mac" => Some(Cow::Borrowed(self.mac)),
                _ => None,
            }
        }
    }

    const ITEMS: &[Named] = &[
        Named {
            name: "Alpha",
            mac: "aa:10",
        },
        Named {
            name: "beta",
            mac: "bb:20",
        },
    ];

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let query = SearchQuery::new("A", SearchMode::Field("name".into()));
        let hits = filter(ITEMS, &query);
        // "Alpha" and "beta" both contain an 'a' case-insensitively.
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn blank_query_returns_everything() {
        for text in ["", "   ", "\t"] {
            let query = SearchQuery::new(text, SearchMode::All);
            assert_eq!(filter(ITEMS, &query).len(), ITEMS.len());
        }
    }

    #[test]
    fn field_mode_ignores_other_fields() {
        let query = SearchQuery::new("bb", SearchMode::Field("name".into()));
        assert!(filter(ITEMS, &query).is_empty());

        let query = SearchQuery::new("bb", SearchMode::Field("mac".into()));
        assert_eq!(filter(ITEMS, &query).len(), 1);
    }

    #[test]
    fn all_mode_ors_across_fields() {
        let query = SearchQuery::new("20", SearchMode::All);
        let hits = filter(ITEMS, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "beta");
    }

    #[test]
    fn unknown_field_matches_nothing() {
        let query = SearchQuery::new("alpha", SearchMode::Field("serial".into()));
        assert!(filter(ITEMS, &query).is_empty());
    }

    #[test]
    fn needle_is_trimmed() {
        let query = SearchQuery::new("  alpha  ", SearchMode::All);
        assert_eq!(filter(ITEMS, &query).len(), 1);
    }
}
