//! Debounced multi-key search over an in-memory list.
//!
//! Narrows a caller-owned list of records as the user types.
//!
//! # Design
//!
//! - The live query updates on every keystroke and is fed through a
//!   [`Debounced`](sift_core::Debounced) value; only the settled query drives
//!   filtering.
//! - A record matches when any configured key holds text containing the query
//!   (case-folded by default). A blank query matches everything.
//! - The filtered view is derived, never patched, and memoized against the
//!   (items, settled query, search keys) triple in a cache of size one.
//! - Results are a zero-copy view over the shared item slice.
//!
//! # Non-blocking API
//!
//! - `set_query()`: Updates the live query and (re)schedules the settle
//! - `tick()`: Fires the settle once the quiet period has passed
//! - `filtered_items()`: Returns the filtered view for the settled query

mod cache;
mod config;
mod engine;
mod error;
mod keys;
mod query;
mod results;

pub use config::SearchConfig;
pub use engine::FilteredSearch;
pub use error::SearchError;
pub use keys::{DEFAULT_SEARCH_KEYS, SearchKeys};
pub use results::FilteredItems;

pub use sift_core::types::{CaseMatching, FieldName, MatchMode, Record};
pub use sift_core::{Clock, ManualClock, SystemClock};
