//! # cinefront
//!
//! A tiny async movie-metadata front end. Serves static files from a public
//! directory plus one dynamic endpoint, `/movie?t=<title>`, answered from an
//! in-process cache or, on miss, an external OMDb lookup. GET renders the
//! record as HTML; other verbs get the bare JSON record.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cinefront::cache::InMemoryCache;
//! use cinefront::movies::{MovieEndpoint, OmdbClient};
//! use cinefront::router::Router;
//! use cinefront::server::Server;
//! use cinefront::statics::StaticFiles;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = MovieEndpoint::new(
//!         InMemoryCache::new(),
//!         OmdbClient::new("https://www.omdbapi.com/", "your-api-key"),
//!     );
//!     let router = Arc::new(Router::new(endpoint, StaticFiles::new("public")));
//!     let server = Server::bind("0.0.0.0:35000").await?;
//!     server.run(router).await?;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod http;
pub mod movies;
pub mod router;
pub mod server;
pub mod statics;
pub mod view;

// ── Convenience re-exports ────────────────────────────────────────────────────
pub use http::{Method, RequestLine, Response, Status};
pub use server::{Server, ServerError};
