//! The filter-and-rank engine
//!
//! One pure, synchronous pass over a catalog snapshot: filter by
//! case-insensitive substring on the name, stable-sort by the selected field,
//! take the first element as the current best. The pass is re-run in full on
//! every query change; there is no incremental recomputation.

use std::cmp::Ordering;

use mx_catalog::Listing;
use serde::Serialize;
use tracing::debug;

use crate::query::{QueryState, SortDirection};

/// The filtered, sorted sequence of listings for one query state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    listings: Vec<Listing>,
}

impl DerivedView {
    /// Listings in view order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// The current best listing
    ///
    /// "Best" is the first element under whatever sort is active: the
    /// cheapest listing under an ascending price sort, the smartest under a
    /// descending intelligence sort. `None` when nothing matched the search
    /// term.
    pub fn best(&self) -> Option<&Listing> {
        self.listings.first()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Consume the view, yielding the ordered listings
    pub fn into_listings(self) -> Vec<Listing> {
        self.listings
    }
}

/// Compute the ordered view for a query over a catalog snapshot
///
/// Pure and deterministic: the same catalog and query always produce the same
/// view. Neither input is mutated.
pub fn compute_view(catalog: &[Listing], query: &QueryState) -> DerivedView {
    let term = query.search_term.to_lowercase();
    let mut listings: Vec<Listing> = catalog
        .iter()
        .filter(|listing| listing.name.to_lowercase().contains(&term))
        .copied()
        .collect();

    // Stable sort: listings with equal field values keep their filtered order
    listings.sort_by(|a, b| {
        let ordering = query
            .sort_key
            .value_of(a)
            .partial_cmp(&query.sort_key.value_of(b))
            .unwrap_or(Ordering::Equal);
        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    debug!(
        "Computed view: term={:?} key={:?} direction={:?} -> {} listings",
        query.search_term,
        query.sort_key,
        query.sort_direction,
        listings.len()
    );

    DerivedView { listings }
}
