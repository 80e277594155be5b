//! Local listener for the post-login redirect.
//!
//! The backend finishes the OAuth exchange and then redirects the browser to
//! the client's address with the session in the query string. A desktop
//! client has no page for that redirect to land on, so it listens on the
//! address itself, answers the browser with a short page, and hands the
//! request URL to the caller.
//!
//! The HTTP side is a [`tiny_http::Server`], which reads every connection on
//! its own worker, so an idle or half-open socket (browsers preconnect) never
//! holds up the real redirect.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};

const LANDING_PAGE: &str = "<!doctype html><html><head><title>InboxRank</title></head>\
<body style=\"font-family: sans-serif; padding: 40px\">\
<h2>Signed in</h2><p>You can close this tab and return to InboxRank.</p></body></html>";

/// How long one blocking receive waits before yielding back to the runtime.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Accepts browser redirects on a local address.
pub struct RedirectListener {
    server: Arc<Server>,
    local_addr: SocketAddr,
    origin: Url,
}

impl fmt::Debug for RedirectListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedirectListener")
            .field("local_addr", &self.local_addr)
            .finish_non_exhaustive()
    }
}

impl RedirectListener {
    /// Address the backend redirects to after sign-in.
    pub const DEFAULT_ADDR: &'static str = "127.0.0.1:5173";

    /// Binds the listener.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn bind(addr: &str) -> Result<Self> {
        let addr = addr.to_string();
        let server = tokio::task::spawn_blocking(move || {
            Server::http(&addr)
                .map_err(|e| Error::Listener(format!("failed to bind {addr}: {e}")))
        })
        .await
        .map_err(|e| Error::Listener(e.to_string()))??;

        let local_addr = server.server_addr();
        let origin = Url::parse(&format!("http://{local_addr}/"))?;
        debug!("Redirect listener bound on {local_addr}");
        Ok(Self {
            server: Arc::new(server),
            local_addr,
            origin,
        })
    }

    /// Address actually bound (useful when binding port 0).
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Waits for the next browser request to the site root and returns its URL.
    ///
    /// Requests for other paths (favicons and the like) get a 404 and are
    /// skipped. A request that cannot be answered is logged and skipped.
    /// Dropping the returned future stops the wait within one poll interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the server stops accepting requests.
    pub async fn next_redirect(&self) -> Result<Url> {
        loop {
            let server = Arc::clone(&self.server);
            let origin = self.origin.clone();
            let received = tokio::task::spawn_blocking(move || poll_once(&server, &origin))
                .await
                .map_err(|e| Error::Listener(e.to_string()))??;

            if let Some(url) = received {
                return Ok(url);
            }
        }
    }
}

/// Waits up to one poll interval for a request and answers it.
///
/// Returns the request URL when it was a redirect to the site root.
fn poll_once(server: &Server, origin: &Url) -> Result<Option<Url>> {
    let Some(request) = server.recv_timeout(POLL_INTERVAL)? else {
        return Ok(None);
    };

    let peer = format!("{:?}", request.remote_addr());
    let url = match origin.join(request.url()) {
        Ok(url) if *request.method() == Method::Get && url.path() == "/" => url,
        Ok(_) => {
            answer(request, 404, "Not found");
            return Ok(None);
        }
        Err(e) => {
            warn!("Unparsable redirect target {:?}: {e}", request.url());
            answer(request, 400, "Bad request");
            return Ok(None);
        }
    };

    answer(request, 200, LANDING_PAGE);
    debug!("Redirect received from {peer}");
    Ok(Some(url))
}

fn answer(request: Request, status: u16, body: &str) {
    let mut response = Response::from_string(body).with_status_code(status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
    {
        response = response.with_header(header);
    }
    if let Err(e) = request.respond(response) {
        warn!("Failed to answer redirect request: {e}");
    }
}
