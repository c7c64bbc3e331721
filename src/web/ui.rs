//! Static frontend routes.
//!
//! `GET /` redirects to the bundled page. `GET /static/{*path}` serves files
//! from the configured static directory; when that directory is missing a
//! built-in placeholder `index.html` is served instead. File reads run via
//! [`tokio::task::spawn_blocking`] because [`StaticAssets::serve`] does
//! blocking I/O.

use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    extract::{Path as UrlPath, State},
    http::{Response, StatusCode, header},
    response::{IntoResponse, Redirect},
};
use tracing::{debug, info, warn};

use super::WebState;

// ── Built-in fallback ─────────────────────────────────────────────────────────

const BUILTIN_INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Mergington High School Activities</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
    code { background: #f2f2f2; padding: 0 0.25rem; }
  </style>
</head>
<body>
  <h1>Mergington High School</h1>
  <p>The activities frontend is not installed. The API is available at
  <code>/activities</code>.</p>
</body>
</html>
"#;

// ── StaticAssets ──────────────────────────────────────────────────────────────

/// A file (or error page) ready to be turned into a response.
#[derive(Debug)]
pub struct StaticResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StaticResponse {
    fn text(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }
}

/// Serves the frontend's static files.
#[derive(Debug)]
pub struct StaticAssets {
    /// Resolved static directory — `None` if it does not exist.
    root: Option<PathBuf>,
}

impl StaticAssets {
    pub fn new(static_dir: &Path) -> Self {
        let root = Some(static_dir.to_path_buf()).filter(|p| p.is_dir());

        match root {
            Some(ref dir) => info!(dir = %dir.display(), "serving static files from disk"),
            None => info!(
                dir = %static_dir.display(),
                "static directory missing — using built-in placeholder"
            ),
        }

        Self { root }
    }

    /// Resolve `path` (relative to `/static/`) to a response.
    pub fn serve(&self, path: &str) -> StaticResponse {
        // Reject paths that try to escape the static root.
        if path.split(['/', '\\']).any(|segment| segment == "..") {
            return StaticResponse::text(StatusCode::BAD_REQUEST, "bad request\n");
        }

        let relative = path.trim_start_matches('/');
        let relative = if relative.is_empty() { "index.html" } else { relative };

        match self.root {
            Some(ref root) => {
                let file_path = root.join(relative);
                if file_path.is_file() {
                    read_static_file(&file_path)
                } else {
                    debug!(path, "static file not found");
                    StaticResponse::text(StatusCode::NOT_FOUND, "not found\n")
                }
            }
            None if relative == "index.html" => StaticResponse {
                status: StatusCode::OK,
                content_type: "text/html; charset=utf-8",
                body: BUILTIN_INDEX_HTML.as_bytes().to_vec(),
            },
            None => StaticResponse::text(StatusCode::NOT_FOUND, "not found\n"),
        }
    }
}

/// Read a file from disk and infer its MIME type from the extension.
fn read_static_file(path: &Path) -> StaticResponse {
    match std::fs::read(path) {
        Ok(body) => StaticResponse {
            status: StatusCode::OK,
            content_type: mime_from_extension(path),
            body,
        },
        Err(e) => {
            warn!(path = %path.display(), "failed to read static file: {e}");
            StaticResponse::text(StatusCode::INTERNAL_SERVER_ERROR, "internal error\n")
        }
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "application/javascript; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET / — send browsers to the bundled page.
pub(super) async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// GET /static/{*path}
pub(super) async fn serve_static(
    State(state): State<WebState>,
    UrlPath(path): UrlPath<String>,
) -> axum::response::Response {
    let assets = state.assets.clone();
    let result = tokio::task::spawn_blocking(move || assets.serve(&path)).await;

    match result {
        Ok(resp) => Response::builder()
            .status(resp.status)
            .header(header::CONTENT_TYPE, resp.content_type)
            .body(Body::from(resp.body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            warn!("static file task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn assets_with(files: &[(&str, &str)]) -> (TempDir, StaticAssets) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        let assets = StaticAssets::new(dir.path());
        (dir, assets)
    }

    #[test]
    fn serves_file_with_mime() {
        let (_dir, assets) = assets_with(&[("styles.css", "body {}")]);
        let resp = assets.serve("styles.css");
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.content_type, "text/css; charset=utf-8");
        assert_eq!(resp.body, b"body {}");
    }

    #[test]
    fn missing_file_is_404() {
        let (_dir, assets) = assets_with(&[("index.html", "<html></html>")]);
        assert_eq!(assets.serve("nope.js").status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn traversal_is_rejected() {
        let (_dir, assets) = assets_with(&[("index.html", "<html></html>")]);
        assert_eq!(assets.serve("../Cargo.toml").status, StatusCode::BAD_REQUEST);
        assert_eq!(assets.serve("a/../../b").status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn dotted_names_are_not_traversal() {
        let (_dir, assets) = assets_with(&[("app..js", "x")]);
        assert_eq!(assets.serve("app..js").status, StatusCode::OK);
    }

    #[test]
    fn placeholder_when_dir_missing() {
        let assets = StaticAssets::new(Path::new("/nonexistent/static"));
        let resp = assets.serve("index.html");
        assert_eq!(resp.status, StatusCode::OK);
        assert!(String::from_utf8(resp.body).unwrap().contains("Mergington High School"));
        assert_eq!(assets.serve("app.js").status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(mime_from_extension(Path::new("blob.bin")), "application/octet-stream");
        assert_eq!(mime_from_extension(Path::new("app.js")), "application/javascript; charset=utf-8");
    }
}
