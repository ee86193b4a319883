//! Embedded listing catalog
//!
//! Compiled-in snapshot of model offerings, exposed as an immutable
//! declaration-ordered slice. The catalog never changes during a session and
//! is always well-formed; validating externally supplied catalogs is out of
//! scope.

mod data;
pub mod types;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

pub use types::{CatalogMetadata, Listing};

/// Lowercased name -> listing, built on first lookup
static NAME_INDEX: Lazy<HashMap<String, &'static Listing>> = Lazy::new(|| {
    data::LISTINGS
        .iter()
        .map(|listing| (listing.name.to_lowercase(), listing))
        .collect()
});

/// All listings, in declaration order
pub fn listings() -> &'static [Listing] {
    data::LISTINGS
}

/// Metadata for the embedded snapshot
pub fn metadata() -> CatalogMetadata {
    data::METADATA
}

/// Look up a single listing by exact name, case-insensitively
pub fn find_listing(name: &str) -> Option<&'static Listing> {
    let found = NAME_INDEX.get(&name.to_lowercase()).copied();
    debug!("Catalog lookup for {:?}: hit={}", name, found.is_some());
    found
}
