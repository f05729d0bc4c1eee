//! Async TCP server using Tokio.
//!
//! Accepts TCP connections and answers exactly one request per connection:
//! buffer the head until its first line is complete, parse that line, route,
//! write the response, shut the stream down. There is no keep-alive.

use std::net::SocketAddr;
use std::sync::Arc;

use bytes::BytesMut;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::cache::MovieCache;
use crate::http::request::RequestLine;
use crate::movies::MovieLookup;
use crate::router::Router;

/// Errors produced by the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Initial read buffer capacity per connection.
const INITIAL_BUF_SIZE: usize = 4096;

/// Upper bound on buffered bytes while waiting for a request line (64 KiB).
const MAX_REQUEST_SIZE: usize = 64 * 1024;

/// The cinefront HTTP server.
///
/// Binds to a TCP address and dispatches incoming requests through a
/// [`Router`], one connection per Tokio task.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use cinefront::cache::InMemoryCache;
/// use cinefront::movies::{MovieEndpoint, OmdbClient};
/// use cinefront::router::Router;
/// use cinefront::server::Server;
/// use cinefront::statics::StaticFiles;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let endpoint = MovieEndpoint::new(
///         InMemoryCache::new(),
///         OmdbClient::new("https://www.omdbapi.com/", "demo"),
///     );
///     let router = Arc::new(Router::new(endpoint, StaticFiles::new("public")));
///     let server = Server::bind("0.0.0.0:35000").await?;
///     server.run(router).await?;
///     Ok(())
/// }
/// ```
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Binds the server to the given TCP address.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound
    /// (e.g. port already in use, insufficient permissions).
    pub async fn bind(addr: impl AsRef<str>) -> Result<Self, ServerError> {
        let addr = addr.as_ref();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.to_owned(),
                source: e,
            })?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Starts accepting connections and dispatching requests to `router`.
    ///
    /// This method runs until the process is terminated or an unrecoverable
    /// listener error occurs.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the TCP listener itself fails.
    pub async fn run<C, L>(self, router: Arc<Router<C, L>>) -> Result<(), ServerError>
    where
        C: MovieCache + 'static,
        L: MovieLookup + 'static,
    {
        info!(address = %self.local_addr, "cinefront listening");

        loop {
            let (stream, peer_addr) = match self.listener.accept().await {
                Ok(pair) => pair,
                Err(e) => {
                    error!(error = %e, "failed to accept connection");
                    continue;
                }
            };

            debug!(peer = %peer_addr, "connection accepted");
            let router = Arc::clone(&router);

            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, peer_addr, router).await {
                    warn!(peer = %peer_addr, error = %e, "connection closed with error");
                }
            });
        }
    }
}

/// Handles one connection: one request in, one response out.
///
/// The head is buffered until the first line is complete; a peer that closes
/// early is answered from whatever line did arrive. An unparsable request
/// line closes the connection without a response, as does a head that never
/// produces a line within the buffer cap.
async fn handle_connection<C, L>(
    mut stream: TcpStream,
    peer_addr: SocketAddr,
    router: Arc<Router<C, L>>,
) -> Result<(), std::io::Error>
where
    C: MovieCache,
    L: MovieLookup,
{
    let mut buf = BytesMut::with_capacity(INITIAL_BUF_SIZE);

    let raw_line = loop {
        if let Some(line) = first_line(&buf) {
            break line;
        }
        if buf.len() > MAX_REQUEST_SIZE {
            warn!(peer = %peer_addr, "no request line within buffer cap — closing");
            return Ok(());
        }
        let bytes_read = stream.read_buf(&mut buf).await?;
        if bytes_read == 0 {
            // Peer closed before terminating the first line.
            break String::from_utf8_lossy(&buf).into_owned();
        }
    };

    let line = match RequestLine::parse(&raw_line) {
        Ok(line) => line,
        Err(e) => {
            warn!(peer = %peer_addr, error = %e, "unparsable request line — closing");
            return Ok(());
        }
    };

    debug!(
        peer = %peer_addr,
        method = %line.method(),
        path = line.path(),
        "dispatching request"
    );

    let response = router.route(&line).await;
    stream.write_all(&response.into_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await?;

    Ok(())
}

/// Returns the first newline-terminated line in `buf`, if one is complete.
fn first_line(buf: &[u8]) -> Option<String> {
    let end = buf.iter().position(|&b| b == b'\n')?;
    let line = buf[..end].strip_suffix(b"\r").unwrap_or(&buf[..end]);
    Some(String::from_utf8_lossy(line).into_owned())
}
