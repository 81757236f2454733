//! Search errors.

use sift_core::types::FieldNameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search key {key:?}: {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: FieldNameError,
    },
}
