//! External collaborators for the merge service

pub mod source_fetcher;

pub use source_fetcher::{FetchError, SourceFetcher};
