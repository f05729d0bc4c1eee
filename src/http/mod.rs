//! HTTP protocol primitives.
//!
//! This module provides the pieces the single-request pipeline needs:
//! [`Method`], [`Status`], [`RequestLine`], and [`Response`].

use std::fmt;

pub mod request;
pub mod response;

pub use request::RequestLine;
pub use response::Response;

/// A response status code this server actually produces.
///
/// The wire format prints the reason phrase as `OK` for every code; only the
/// numeric part varies. See [`Response::into_bytes`](response::Response::into_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Status {
    Ok = 200,
    NotFound = 404,
    InternalServerError = 500,
}

impl Status {
    /// Returns the numeric status code as a `u16`.
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// An HTTP request method.
///
/// Only `GET` and `POST` receive dedicated handling; any other token parses
/// into [`Method::Other`] and is answered by the router's method-not-allowed
/// path on the dynamic endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    /// Any method token without dedicated handling.
    Other(String),
}

impl Method {
    /// Returns the method as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
