//! External movie lookup over the OMDb JSON API.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::MovieRecord;

/// Errors surfaced by a movie lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("movie not found: {title:?}")]
    NotFound { title: String },

    #[error("lookup transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The capability the dynamic endpoint needs: resolve a movie name to a
/// structured record, or fail.
///
/// Implementations receive the raw, un-normalized name exactly as it appeared
/// in the query string; normalization is a cache concern, not a lookup one.
pub trait MovieLookup: Send + Sync {
    /// Fetches the record for `name`.
    fn fetch(&self, name: &str) -> impl Future<Output = Result<MovieRecord, LookupError>> + Send;
}

impl<L: MovieLookup> MovieLookup for Arc<L> {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<MovieRecord, LookupError>> + Send {
        (**self).fetch(name)
    }
}

/// Movie lookup backed by the OMDb HTTP API.
///
/// Issues `GET <base>?t=<name>&apikey=<key>` and decodes the JSON object into
/// a [`MovieRecord`]. OMDb reports misses inside a 200 payload with
/// `"Response": "False"`; that case maps to [`LookupError::NotFound`].
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client for the given API base URL and key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

impl MovieLookup for OmdbClient {
    async fn fetch(&self, name: &str) -> Result<MovieRecord, LookupError> {
        debug!(title = name, "querying movie api");

        let record: MovieRecord = self
            .http
            .get(&self.base_url)
            .query(&[("t", name), ("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if record.field("Response") == "False" {
            return Err(LookupError::NotFound {
                title: name.to_owned(),
            });
        }
        Ok(record)
    }
}
