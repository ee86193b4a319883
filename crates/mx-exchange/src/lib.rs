//! Filter-and-rank engine over the listing catalog
//!
//! The core of ModelExchange: given a catalog snapshot and the user's query
//! parameters, deterministically produce the ordered view the frontend
//! renders, plus the derived best-value listing. Everything here is
//! synchronous and in-process; rendering and routing live outside this crate.

pub mod query;
pub mod session;
pub mod view;

pub use query::{QueryState, SortDirection, SortKey};
pub use session::{ExchangeSession, ViewSnapshot};
pub use view::{compute_view, DerivedView};
