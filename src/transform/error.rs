use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("{collection} '{key}' was produced more than once. Keys have to be unique across all sources.")]
    DuplicateKey {
        key: String,
        collection: &'static str,
    },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
