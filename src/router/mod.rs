//! Request routing between the static tree and the `/movie` endpoint.
//!
//! The router is an explicit instance built once at startup and shared
//! across connection tasks; there are no global dispatch tables. It owns the
//! movie endpoint (and through it the cache and lookup client) plus the
//! static file resolver.

use crate::cache::MovieCache;
use crate::http::{Method, RequestLine, Response, Status};
use crate::movies::{MovieEndpoint, MovieLookup, MovieRecord};
use crate::statics::StaticFiles;
use crate::view;

/// Dispatches parsed request lines to the movie endpoint or the static tree.
pub struct Router<C, L> {
    movies: MovieEndpoint<C, L>,
    statics: StaticFiles,
}

impl<C, L> Router<C, L>
where
    C: MovieCache,
    L: MovieLookup,
{
    pub fn new(movies: MovieEndpoint<C, L>, statics: StaticFiles) -> Self {
        Self { movies, statics }
    }

    /// Produces the single response for a request.
    ///
    /// `/movie` is the dynamic endpoint; every other path is a static
    /// resource, whatever the method.
    pub async fn route(&self, line: &RequestLine) -> Response {
        if line.path() == "/movie" {
            return self.movie(line).await;
        }
        self.statics.serve(line.path()).await
    }

    /// Method dispatch for `/movie`.
    ///
    /// GET renders the record as a preformatted HTML document. POST and
    /// unsupported verbs answer with the bare JSON record and skip the view;
    /// the unsupported-verb case carries its 405 text in the body while the
    /// wire status stays 200.
    async fn movie(&self, line: &RequestLine) -> Response {
        match line.method() {
            Method::Get => {
                let record = self.movies.get(line.query()).await;
                Response::preformatted(view::render(&record))
            }
            Method::Post => json_record(self.movies.post()),
            _ => json_record(MovieRecord::method_not_allowed()),
        }
    }
}

fn json_record(record: MovieRecord) -> Response {
    Response::text(Status::Ok, "application/json", &record.to_json())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::cache::InMemoryCache;
    use crate::movies::LookupError;

    struct FakeLookup {
        calls: AtomicUsize,
        record: MovieRecord,
    }

    impl FakeLookup {
        fn returning(record: MovieRecord) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                record,
            }
        }
    }

    impl MovieLookup for FakeLookup {
        async fn fetch(&self, _name: &str) -> Result<MovieRecord, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.record.clone())
        }
    }

    fn record(title: &str) -> MovieRecord {
        serde_json::from_value(json!({"Title": title, "Year": "2021"})).unwrap()
    }

    fn temp_root(test: &str) -> PathBuf {
        let root =
            std::env::temp_dir().join(format!("cinefront-router-{}-{}", test, std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    fn router(test: &str) -> Router<InMemoryCache, Arc<FakeLookup>> {
        let lookup = Arc::new(FakeLookup::returning(record("Dune")));
        Router::new(
            MovieEndpoint::new(InMemoryCache::new(), lookup),
            StaticFiles::new(temp_root(test)),
        )
    }

    async fn wire_text(router: &Router<InMemoryCache, Arc<FakeLookup>>, line: &str) -> String {
        let line = RequestLine::parse(line).unwrap();
        let response = router.route(&line).await;
        String::from_utf8_lossy(&response.into_bytes()).into_owned()
    }

    #[tokio::test]
    async fn movie_get_renders_the_preformatted_view() {
        let text = wire_text(&router("get"), "GET /movie?t=dune HTTP/1.1").await;

        assert!(text.starts_with("HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n"));
        assert!(text.contains("<h1>Dune (2021)</h1>"));
        // The view path bypasses the assembler.
        assert!(!text.contains("Content-Length"));
    }

    #[tokio::test]
    async fn movie_post_answers_the_bare_record() {
        let text = wire_text(&router("post"), "POST /movie HTTP/1.1").await;

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: application/json\r\n"));
        assert!(text.contains("Content-Length:"));
        assert!(text.contains("\"Title\":\"Not implemented yet\""));
        assert!(!text.contains("<html>"));
    }

    #[tokio::test]
    async fn movie_delete_reports_405_in_the_body_only() {
        let text = wire_text(&router("delete"), "DELETE /movie HTTP/1.1").await;

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("405 Method Not Allowed"));
    }

    #[tokio::test]
    async fn other_paths_go_to_the_static_tree() {
        let root = temp_root("static");
        std::fs::write(root.join("index.html"), b"<h1>home</h1>").unwrap();
        let lookup = Arc::new(FakeLookup::returning(record("never served")));
        let router = Router::new(
            MovieEndpoint::new(InMemoryCache::new(), Arc::clone(&lookup)),
            StaticFiles::new(root),
        );

        let line = RequestLine::parse("GET /index.html HTTP/1.1").unwrap();
        let response = router.route(&line).await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);

        let line = RequestLine::parse("GET /missing.html HTTP/1.1").unwrap();
        assert_eq!(router.route(&line).await.status(), Status::NotFound);
    }
}
