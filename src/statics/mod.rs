//! Static file serving from the public directory.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::http::{Response, Status};

/// Fixed page returned when a static path does not resolve to a file.
const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Error Not found</title>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
    </head>
    <body>
        <h1>Error</h1>
    </body>
</html>"#;

/// Serves files verbatim from a fixed public root.
///
/// Request paths are resolved by literal concatenation under the root; no
/// traversal sanitization is applied.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    /// Creates a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves `path` under the root and builds the response.
    ///
    /// An existing regular file answers 200 with its bytes and an
    /// extension-derived content type. Anything that is not a regular file
    /// answers 404 with the fixed error page. A failing read answers 500.
    pub async fn serve(&self, path: &str) -> Response {
        let file = PathBuf::from(format!("{}{}", self.root.display(), path));

        match tokio::fs::metadata(&file).await {
            Ok(meta) if !meta.is_dir() => match tokio::fs::read(&file).await {
                Ok(bytes) => Response::assembled(Status::Ok, content_type(&file), bytes),
                Err(e) => {
                    warn!(file = %file.display(), error = %e, "static file read failed");
                    Response::text(Status::InternalServerError, "text/plain", "Internal Server Error")
                }
            },
            _ => Response::text(Status::NotFound, "text/html", NOT_FOUND_PAGE),
        }
    }
}

/// Maps a file to its content type by lowercased extension.
///
/// Unknown and missing extensions fall back to `application/octet-stream`.
fn content_type(file: &Path) -> &'static str {
    let name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    match file_extension(name).to_lowercase().as_str() {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// The substring after the last `.` of `name`, or `""` when there is no dot
/// or the name ends with one.
fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos + 1 < name.len() => &name[pos + 1..],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(bytes: bytes::BytesMut) -> Vec<u8> {
        let text = bytes.to_vec();
        let split = text
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("header terminator");
        text[split + 4..].to_vec()
    }

    fn temp_root(test: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("cinefront-{}-{}", test, std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn content_type_table() {
        assert_eq!(content_type(Path::new("index.html")), "text/html");
        assert_eq!(content_type(Path::new("style.css")), "text/css");
        assert_eq!(content_type(Path::new("data.js")), "application/javascript");
        assert_eq!(content_type(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(content_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(content_type(Path::new("a.png")), "image/png");
        assert_eq!(content_type(Path::new("a.gif")), "image/gif");
        assert_eq!(content_type(Path::new("a.bin")), "application/octet-stream");
    }

    #[test]
    fn content_type_lowercases_the_extension() {
        assert_eq!(content_type(Path::new("INDEX.HTML")), "text/html");
    }

    #[test]
    fn missing_extension_falls_to_default() {
        assert_eq!(content_type(Path::new("README")), "application/octet-stream");
        assert_eq!(content_type(Path::new("trailing.")), "application/octet-stream");
    }

    #[tokio::test]
    async fn serves_existing_file_with_its_bytes() {
        let root = temp_root("serve-ok");
        std::fs::write(root.join("index.html"), b"<h1>home</h1>").unwrap();

        let statics = StaticFiles::new(&root);
        let response = statics.serve("/index.html").await;
        assert_eq!(response.status(), Status::Ok);

        let wire = response.into_bytes();
        let text = String::from_utf8_lossy(&wire).into_owned();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert_eq!(body_of(wire), b"<h1>home</h1>");
    }

    #[tokio::test]
    async fn missing_file_answers_the_error_page() {
        let root = temp_root("serve-missing");

        let statics = StaticFiles::new(&root);
        let response = statics.serve("/nope.html").await;
        assert_eq!(response.status(), Status::NotFound);

        let wire = String::from_utf8_lossy(&response.into_bytes()).into_owned();
        assert!(wire.starts_with("HTTP/1.1 404 OK\r\n"));
        assert!(wire.contains("<title>Error Not found</title>"));
        assert!(wire.contains("<h1>Error</h1>"));
    }

    #[tokio::test]
    async fn directory_answers_the_error_page() {
        let root = temp_root("serve-dir");
        std::fs::create_dir_all(root.join("assets")).unwrap();

        let statics = StaticFiles::new(&root);
        let response = statics.serve("/assets").await;
        assert_eq!(response.status(), Status::NotFound);
    }
}
