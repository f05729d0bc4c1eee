//! The dynamic `/movie` endpoint.
//!
//! Orchestrates the cache and the external lookup: normalize the requested
//! title into a cache key, consult the cache, fall back to the lookup
//! service, and always come back with *some* record. Failures degrade to a
//! placeholder instead of propagating.

pub mod omdb;
pub mod record;

pub use omdb::{LookupError, MovieLookup, OmdbClient};
pub use record::MovieRecord;

use tracing::{debug, warn};

use crate::cache::MovieCache;

/// Normalizes a movie name into its cache key.
///
/// Names differing only by case or surrounding whitespace must share one
/// cache entry, so the key is the lower-cased, trimmed name.
pub fn cache_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Extracts the raw movie name from a query string: the token between the
/// first `=` and the next one. `&` is not a separator here; the name runs
/// up to the next `=` or the end of the query.
fn raw_movie_name(query: &str) -> Option<&str> {
    query.split('=').nth(1).filter(|name| !name.is_empty())
}

/// Cache-backed movie metadata resolution for `/movie`.
///
/// Owns the cache and the lookup client; constructed once at startup and
/// shared across connection tasks through the router.
pub struct MovieEndpoint<C, L> {
    cache: C,
    lookup: L,
}

impl<C, L> MovieEndpoint<C, L>
where
    C: MovieCache,
    L: MovieLookup,
{
    pub fn new(cache: C, lookup: L) -> Self {
        Self { cache, lookup }
    }

    /// Resolves the record for a GET request's raw query string.
    ///
    /// A query that carries no movie name (no `=`, or nothing after it)
    /// resolves to the not-found placeholder rather than failing. The lookup
    /// receives the name exactly as requested; only the cache key is
    /// normalized. Lookup failures also degrade to the placeholder, and
    /// nothing is cached for them.
    pub async fn get(&self, query: Option<&str>) -> MovieRecord {
        let Some(name) = query.and_then(raw_movie_name) else {
            warn!(query = ?query, "query carries no movie name");
            return MovieRecord::not_found();
        };

        let key = cache_key(name);
        if let Some(record) = self.cache.get(&key) {
            debug!(%key, "cache used");
            return record;
        }

        match self.lookup.fetch(name).await {
            Ok(record) => {
                debug!(%key, "resource used");
                self.cache.put(&key, record.clone());
                record
            }
            Err(e) => {
                warn!(%key, error = %e, "lookup failed");
                MovieRecord::not_found()
            }
        }
    }

    /// POST is not implemented: a fixed placeholder, no cache or lookup
    /// interaction.
    pub fn post(&self) -> MovieRecord {
        MovieRecord::not_implemented()
    }
}
