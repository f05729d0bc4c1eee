//! Request-line parsing.
//!
//! The server answers exactly one request per connection, and only the first
//! line of that request carries meaning: `<METHOD> <TARGET> [<VERSION>]`.
//! Header and body bytes are read off the socket but never interpreted.

use thiserror::Error;

use super::Method;

/// Errors produced while interpreting the first line of a request.
///
/// Any of these closes the connection without a response being written.
#[derive(Debug, Error)]
pub enum RequestLineError {
    #[error("empty request line")]
    Empty,

    #[error("request line has no target: {line:?}")]
    MissingTarget { line: String },

    #[error("invalid request target: {target:?}")]
    InvalidTarget { target: String },
}

/// The parsed first line of an HTTP request.
///
/// The target is split at the first `?` into path and raw query. No path
/// normalization or percent-decoding is performed; downstream consumers get
/// the target exactly as the client sent it.
///
/// # Examples
///
/// ```
/// use cinefront::http::request::RequestLine;
///
/// let line = RequestLine::parse("GET /movie?t=dune HTTP/1.1").unwrap();
/// assert_eq!(line.method().as_str(), "GET");
/// assert_eq!(line.path(), "/movie");
/// assert_eq!(line.query(), Some("t=dune"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    path: String,
    query: Option<String>,
}

impl RequestLine {
    /// Parses a raw request line.
    ///
    /// The line must carry at least two whitespace-separated tokens, method
    /// and target, and the target must be origin-form (leading `/`). A third
    /// token (the HTTP version) is tolerated and ignored.
    ///
    /// # Errors
    ///
    /// - [`RequestLineError::Empty`] — the line holds no tokens at all.
    /// - [`RequestLineError::MissingTarget`] — a method but no target.
    /// - [`RequestLineError::InvalidTarget`] — the target does not start with `/`.
    pub fn parse(line: &str) -> Result<Self, RequestLineError> {
        let mut tokens = line.split_whitespace();

        let method: Method = tokens
            .next()
            .ok_or(RequestLineError::Empty)?
            .parse()
            .unwrap(); // Infallible

        let target = tokens.next().ok_or_else(|| RequestLineError::MissingTarget {
            line: line.to_owned(),
        })?;
        if !target.starts_with('/') {
            return Err(RequestLineError::InvalidTarget {
                target: target.to_owned(),
            });
        }

        let (path, query) = match target.find('?') {
            Some(pos) => (
                target[..pos].to_owned(),
                Some(target[pos + 1..].to_owned()),
            ),
            None => (target.to_owned(), None),
        };

        Ok(Self {
            method,
            path,
            query,
        })
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request path (without the query string).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw query string (without the leading `?`), if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
