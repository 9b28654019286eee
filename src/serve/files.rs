use std::path::PathBuf;

use tracing::{debug, warn};

use crate::http::response::Response;
use crate::serve::mime::MimeTable;
use crate::serve::path::resolve_target;

/// Serves files beneath a document root.
///
/// Read-only: each request reads at most one file, and nothing outside the
/// root is ever opened. Shared across connections behind an `Arc`.
pub struct StaticFiles {
    root: PathBuf,
    mime: MimeTable,
}

impl StaticFiles {
    pub fn new(root: PathBuf, mime: MimeTable) -> Self {
        Self { root, mime }
    }

    /// Builds the response for a GET target: 200 with the file contents and
    /// its MIME type, or 404 when the target escapes the root, does not
    /// exist, or is not a regular file. Directories are never served.
    pub async fn response_for(&self, target: &str) -> Response {
        let Some(components) = resolve_target(target) else {
            debug!("target {target:?} escapes the document root");
            return Response::not_found();
        };

        let mut path = self.root.clone();
        for component in &components {
            path.push(*component);
        }
        // Hard stop: nothing outside the root is ever opened.
        if !path.starts_with(&self.root) {
            return Response::not_found();
        }

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Response::not_found(),
        }

        match tokio::fs::read(&path).await {
            Ok(body) => {
                let filename = components.last().copied().unwrap_or("");
                Response::ok(body, self.mime.mime_for(filename))
            }
            Err(e) => {
                warn!("failed to read {}: {e}", path.display());
                Response::not_found()
            }
        }
    }
}
