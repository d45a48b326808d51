//! Request dispatch.

use std::sync::Arc;

use tracing::debug;

use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::static_files::FileIndex;

/// Historical path prefix that clients may include; it is stripped before
/// route matching so `/WWWROOT/index.html` and `/index.html` are the same
/// resource.
const ROOT_PREFIX: &str = "/WWWROOT";

const ECHO_PATH: &str = "/api/echo";

/// Maps requests to responses.
///
/// GET requests are looked up in the file index; POST requests hit the echo
/// endpoint. Everything else is a 404. The router holds the index behind an
/// `Arc` and is itself cheap to clone into connection tasks.
#[derive(Debug, Clone)]
pub struct Router {
    index: Arc<FileIndex>,
}

impl Router {
    pub fn new(index: Arc<FileIndex>) -> Self {
        Router { index }
    }

    /// Produces the response for a single request.
    pub async fn handle(&self, request: &Request) -> Response {
        let path = request
            .path
            .strip_prefix(ROOT_PREFIX)
            .unwrap_or(&request.path);

        match request.method {
            Method::GET => self.serve_file(path).await,
            Method::POST if path == ECHO_PATH => {
                Response::ok("text/plain", request.body.clone())
            }
            _ => Response::not_found("Route not found."),
        }
    }

    async fn serve_file(&self, path: &str) -> Response {
        let Some(file_path) = self.index.resolve(path) else {
            return Response::not_found("File not found.");
        };

        match tokio::fs::read(file_path).await {
            Ok(contents) => Response::ok(mime::content_type(path), contents),
            Err(e) => {
                // The file was indexed at startup but is gone or unreadable
                // now; from the client's point of view it does not exist.
                debug!("Indexed file {} failed to read: {}", file_path.display(), e);
                Response::not_found("File not found.")
            }
        }
    }
}
