//! Wire-format HTTP response assembly.
//!
//! Two kinds of response leave this server. *Assembled* responses are built
//! from a status code, a content type, and a body, and get their status line
//! and `Content-Length` written here. *Preformatted* responses are complete
//! documents (status line included) produced by the movie view and written
//! verbatim, so they never carry a `Content-Length` header. Both serialize
//! through [`Response::into_bytes`].

use bytes::{BufMut, BytesMut};

use super::Status;

#[derive(Debug)]
enum Payload {
    Assembled {
        status: Status,
        content_type: String,
        body: Vec<u8>,
    },
    Preformatted(String),
}

/// An HTTP response, ready to be serialized and sent.
///
/// # Examples
///
/// ```
/// use cinefront::http::{Response, Status};
///
/// let response = Response::text(Status::NotFound, "text/html", "<h1>Error</h1>");
/// let bytes = response.into_bytes();
/// let text = std::str::from_utf8(&bytes).unwrap();
/// assert!(text.starts_with("HTTP/1.1 404 OK\r\n"));
/// assert!(text.contains("Content-Length: 14\r\n"));
/// ```
#[derive(Debug)]
pub struct Response {
    payload: Payload,
}

impl Response {
    /// Builds a response from status, content type, and raw body bytes.
    ///
    /// Use this for payloads that are already bytes (static file content);
    /// textual payloads should go through [`Response::text`] so they get the
    /// single-byte encoding.
    pub fn assembled(
        status: Status,
        content_type: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            payload: Payload::Assembled {
                status,
                content_type: content_type.into(),
                body: body.into(),
            },
        }
    }

    /// Builds an assembled response from a textual body, encoded one byte per
    /// character via [`latin1`].
    pub fn text(status: Status, content_type: impl Into<String>, body: &str) -> Self {
        Self::assembled(status, content_type, latin1(body))
    }

    /// Wraps a complete pre-rendered document (status line included).
    ///
    /// The document is written verbatim; no `Content-Length` is computed.
    pub fn preformatted(document: impl Into<String>) -> Self {
        Self {
            payload: Payload::Preformatted(document.into()),
        }
    }

    /// Returns the wire status code of this response.
    ///
    /// Preformatted documents always report 200; the movie view only ever
    /// renders success documents.
    pub fn status(&self) -> Status {
        match &self.payload {
            Payload::Assembled { status, .. } => *status,
            Payload::Preformatted(_) => Status::Ok,
        }
    }

    /// Serializes the response into a `BytesMut` buffer.
    ///
    /// Assembled responses get the status line `HTTP/1.1 <code> OK` (the
    /// reason phrase is `OK` for every code), followed by `Content-Type`,
    /// `Content-Length`, a blank line, and the body. Preformatted documents
    /// are encoded with [`latin1`] and written as-is.
    pub fn into_bytes(self) -> BytesMut {
        match self.payload {
            Payload::Assembled {
                status,
                content_type,
                body,
            } => {
                let mut buf = BytesMut::with_capacity(96 + body.len());
                buf.put(format!("HTTP/1.1 {} OK\r\n", status.as_u16()).as_bytes());
                buf.put(format!("Content-Type: {content_type}\r\n").as_bytes());
                buf.put(format!("Content-Length: {}\r\n", body.len()).as_bytes());
                buf.put(&b"\r\n"[..]);
                buf.put(body.as_slice());
                buf
            }
            Payload::Preformatted(document) => {
                let mut buf = BytesMut::with_capacity(document.len());
                buf.put(latin1(&document).as_slice());
                buf
            }
        }
    }
}

/// Encodes text one byte per character, ISO-8859-1 style.
///
/// Characters up to U+00FF keep their value; anything beyond maps to `?`,
/// the charset's replacement byte.
pub fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF { code as u8 } else { b'?' }
        })
        .collect()
}
