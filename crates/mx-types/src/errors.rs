//! Error types and conversions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("Unknown sort direction: {0}")]
    InvalidSortDirection(String),
}

pub type ExchangeResult<T> = Result<T, ExchangeError>;

impl From<ExchangeError> for String {
    fn from(err: ExchangeError) -> String {
        err.to_string()
    }
}
