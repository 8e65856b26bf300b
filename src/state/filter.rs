//! Filter state applied before pagination.
//!
//! A view narrows its collection with a free-text search and any number of
//! exact field filters. All conditions are ANDed and matching is
//! case-insensitive. Input order is preserved.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Anything a [`FilterState`] can match against.
pub trait Filterable {
    /// Text the search query is matched against.
    fn search_text(&self) -> Cow<'_, str>;

    /// Value of a named attribute, if present.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

// ===== SearchQuery =====

/// Validated search query. Never blank.
/// Stored lowercased for case-insensitive matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: returns None if the query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// The normalized (trimmed, lowercased) query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

// ===== FilterState =====

/// Search query plus exact-match field filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: Option<SearchQuery>,
    fields: BTreeMap<String, String>,
}

impl FilterState {
    /// Filter with no conditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active text search, if any.
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Field filters, keyed by field name. Values are lowercased.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// True when no condition is set and every item passes.
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.fields.is_empty()
    }

    /// Set the search query. A blank query clears the search.
    ///
    /// Returns whether the filter changed.
    pub fn set_query(&mut self, raw: &str) -> bool {
        let next = SearchQuery::new(raw);
        if next == self.query {
            return false;
        }
        self.query = next;
        true
    }

    /// Require `name` to equal `value` (case-insensitive).
    ///
    /// Returns whether the filter changed.
    pub fn set_field(&mut self, name: impl Into<String>, value: &str) -> bool {
        let value = value.trim().to_lowercase();
        let previous = self.fields.insert(name.into(), value.clone());
        previous.as_deref() != Some(value.as_str())
    }

    /// Drop the condition on `name`. Returns whether one was set.
    pub fn clear_field(&mut self, name: &str) -> bool {
        self.fields.remove(name).is_some()
    }

    /// Drop every condition. Returns whether any was set.
    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        self.query = None;
        self.fields.clear();
        changed
    }

    /// Whether `item` satisfies every condition.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        let query_ok = self
            .query
            .as_ref()
            .is_none_or(|q| q.matches(&item.search_text()));

        query_ok
            && self.fields.iter().all(|(name, wanted)| {
                item.field(name)
                    .is_some_and(|actual| actual.trim().to_lowercase() == *wanted)
            })
    }

    /// Items that satisfy every condition, in input order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}
