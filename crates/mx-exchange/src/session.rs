//! Per-session state over the embedded catalog
//!
//! Owns the current query state for one user session and recomputes the view
//! on demand. The rendering layer forwards user interactions here and
//! displays whatever ordered sequence comes back; it holds no ordering logic
//! of its own. A session is driven from a single thread, and the mutators
//! take `&mut self` with no locking.

use mx_catalog::Listing;
use serde::Serialize;

use crate::query::{QueryState, SortKey};
use crate::view::{compute_view, DerivedView};

/// One user session over the embedded catalog
#[derive(Debug, Clone, Default)]
pub struct ExchangeSession {
    query: QueryState,
}

impl ExchangeSession {
    /// Create a session with default query state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query state
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Replace the search term
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.set_search_term(term);
    }

    /// Select a sort key (re-selecting the active key flips the direction)
    pub fn set_sort(&mut self, key: SortKey) {
        self.query.set_sort(key);
    }

    /// Recompute the view over the embedded catalog
    pub fn view(&self) -> DerivedView {
        compute_view(mx_catalog::listings(), &self.query)
    }

    /// Snapshot for the rendering layer
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::new(self.query.clone(), self.view())
    }
}

/// Serializable hand-off shape consumed by the rendering layer
///
/// One payload carrying the ordered listings plus the highlighted best-value
/// pick, enough for the listing grid and the leaderboard table alike.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    /// Query state the snapshot was computed for
    pub query: QueryState,
    /// Listings in view order
    pub listings: Vec<Listing>,
    /// First listing under the active sort; absent when nothing matched
    pub best: Option<Listing>,
}

impl ViewSnapshot {
    fn new(query: QueryState, view: DerivedView) -> Self {
        let best = view.best().copied();
        Self {
            query,
            listings: view.into_listings(),
            best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;

    #[test]
    fn test_default_session_shows_cheapest_first() {
        let session = ExchangeSession::new();
        let view = session.view();

        assert_eq!(view.len(), mx_catalog::listings().len());
        assert_eq!(view.best().map(|l| l.name), Some("DistilBERT"));
    }

    #[test]
    fn test_search_then_toggle_flow() {
        let mut session = ExchangeSession::new();
        session.set_search_term("gpt");

        let names: Vec<&str> = session.view().into_listings().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["GPT-2", "GPT-3", "GPT-Neo"]);

        session.set_sort(SortKey::Price);
        assert_eq!(session.query().sort_direction, SortDirection::Descending);
        assert_eq!(session.view().best().map(|l| l.name), Some("GPT-Neo"));
    }

    #[test]
    fn test_snapshot_of_empty_view() {
        let mut session = ExchangeSession::new();
        session.set_search_term("no such model");

        let snapshot = session.snapshot();
        assert!(snapshot.listings.is_empty());
        assert!(snapshot.best.is_none());
    }
}
