//! Process configuration from the environment.
//!
//! Every variable has a working default (port 35000, `public` root), so a
//! bare `cinefront` run needs no environment at all.

use std::env;

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address — `CINEFRONT_BIND`, default `0.0.0.0:35000`.
    pub bind_addr: String,
    /// Static file root — `CINEFRONT_PUBLIC_DIR`, default `public`.
    pub public_dir: String,
    /// Movie lookup endpoint — `CINEFRONT_OMDB_URL`, default the public OMDb API.
    pub omdb_url: String,
    /// OMDb API key — `CINEFRONT_OMDB_KEY`. Without one, lookups fail and
    /// every uncached title resolves to the not-found placeholder.
    pub omdb_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("CINEFRONT_BIND").unwrap_or_else(|_| "0.0.0.0:35000".to_string()),
            public_dir: env::var("CINEFRONT_PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            omdb_url: env::var("CINEFRONT_OMDB_URL")
                .unwrap_or_else(|_| "https://www.omdbapi.com/".to_string()),
            omdb_key: env::var("CINEFRONT_OMDB_KEY").unwrap_or_default(),
        }
    }
}
