//! Query state: the user-controlled parameters governing the current view

use std::str::FromStr;

use mx_catalog::Listing;
use mx_types::{ExchangeError, ExchangeResult};
use serde::{Deserialize, Serialize};

/// Numeric listing field a view can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Cost per token
    Price,
    /// Benchmark score
    Intelligence,
    /// Response latency (milliseconds)
    Latency,
}

impl SortKey {
    /// Get the sort field value for a listing
    pub fn value_of(&self, listing: &Listing) -> f64 {
        match self {
            SortKey::Price => listing.price_per_token,
            SortKey::Intelligence => listing.intelligence,
            SortKey::Latency => listing.latency_ms,
        }
    }

    /// Get the label for this sort key
    pub fn label(&self) -> &str {
        match self {
            SortKey::Price => "Price",
            SortKey::Intelligence => "Intelligence",
            SortKey::Latency => "Latency",
        }
    }
}

impl FromStr for SortKey {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortKey::Price),
            "intelligence" => Ok(SortKey::Intelligence),
            "latency" => Ok(SortKey::Latency),
            other => Err(ExchangeError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Direction of an ordered view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Get the opposite direction
    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(ExchangeError::InvalidSortDirection(other.to_string())),
        }
    }
}

/// Search term plus sort selection for one session
///
/// An immutable-by-convention value: the session replaces it through the
/// mutators below on each user interaction and recomputes the view from the
/// new state. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Matched case-insensitively as a substring of the listing name
    pub search_term: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_key: SortKey::Price,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl QueryState {
    /// Build a query state from untyped frontend strings
    pub fn from_parts(
        search_term: &str,
        sort_key: &str,
        sort_direction: &str,
    ) -> ExchangeResult<Self> {
        Ok(Self {
            search_term: search_term.to_string(),
            sort_key: sort_key.parse()?,
            sort_direction: sort_direction.parse()?,
        })
    }

    /// Replace the search term verbatim
    ///
    /// No trimming or normalization; matching lowercases at filter time.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a sort key
    ///
    /// Re-selecting the active key flips the direction. Switching to a
    /// different key keeps the current direction.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = QueryState::default();
        assert_eq!(state.search_term, "");
        assert_eq!(state.sort_key, SortKey::Price);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_reselecting_key_flips_direction() {
        let mut state = QueryState::default();
        state.set_sort(SortKey::Price);
        assert_eq!(state.sort_key, SortKey::Price);
        assert_eq!(state.sort_direction, SortDirection::Descending);

        state.set_sort(SortKey::Price);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_switching_key_keeps_direction() {
        let mut state = QueryState::default();
        state.set_sort(SortKey::Price);
        assert_eq!(state.sort_direction, SortDirection::Descending);

        state.set_sort(SortKey::Latency);
        assert_eq!(state.sort_key, SortKey::Latency);
        assert_eq!(state.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_from_parts() {
        let state = QueryState::from_parts("gpt", "intelligence", "descending").unwrap();
        assert_eq!(state.search_term, "gpt");
        assert_eq!(state.sort_key, SortKey::Intelligence);
        assert_eq!(state.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_from_parts_rejects_unknown_values() {
        let err = QueryState::from_parts("", "cost", "ascending").unwrap_err();
        assert!(matches!(err, mx_types::ExchangeError::InvalidSortKey(k) if k == "cost"));

        let err = QueryState::from_parts("", "price", "up").unwrap_err();
        assert!(matches!(err, mx_types::ExchangeError::InvalidSortDirection(d) if d == "up"));
    }

    #[test]
    fn test_serde_lowercase_tags() {
        let state = QueryState::default();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"sort_key\":\"price\""));
        assert!(json.contains("\"sort_direction\":\"ascending\""));

        let parsed: QueryState =
            serde_json::from_str(r#"{"search_term":"bert","sort_key":"latency","sort_direction":"descending"}"#)
                .unwrap();
        assert_eq!(parsed.sort_key, SortKey::Latency);
        assert_eq!(parsed.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_key_labels() {
        assert_eq!(SortKey::Price.label(), "Price");
        assert_eq!(SortKey::Intelligence.label(), "Intelligence");
        assert_eq!(SortKey::Latency.label(), "Latency");
    }
}
