//! Fetching of the download index page

pub mod error;
pub mod http;

#[cfg(test)]
use mockall::automock;

pub use error::FetchError;
pub use http::HttpFetcher;

/// Trait for retrieving the raw text of an index page
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait IndexFetcher: Send + Sync {
    /// Fetches the page body at `url`
    ///
    /// # Returns
    /// * `Ok(String)` - The response body
    /// * `Err(FetchError)` - Transport failure or non-success status
    async fn fetch_index(&self, url: &str) -> Result<String, FetchError>;
}
