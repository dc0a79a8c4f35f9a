//! Mapping request paths onto the served directory.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

/// Name of the file served for directory requests.
pub const INDEX_FILE: &str = "index.html";

/// Directory plus the route prefix it is mounted under.
#[derive(Debug, Clone)]
pub struct StaticDir {
    pub root: PathBuf,
    pub prefix: String,
}

/// Strip `prefix` from a request path. Returns `None` when the request is
/// outside the prefix. The remainder always starts with `/`.
pub fn strip_route_prefix<'a>(prefix: &str, request_path: &'a str) -> Option<&'a str> {
    let rest = request_path.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Turn a `/`-separated request path into a path relative to the served
/// root. Parent-directory segments, drive prefixes and backslashes are
/// rejected so the result can never leave the root.
pub fn sanitize_path(request_path: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for segment in request_path.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment.contains('\\') {
            return None;
        }
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => out.push(part),
            _ => return None,
        }
    }
    Some(out)
}

/// Content type by file extension.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json" | "map") => "application/json",
        Some("yaml" | "yml") => "application/yaml",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Fallback handler serving everything under the prefix from the root
/// directory.
pub async fn serve_static(State(dir): State<Arc<StaticDir>>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let request_path = uri.path();
    let Some(relative) = strip_route_prefix(&dir.prefix, request_path).and_then(sanitize_path)
    else {
        log::debug!("rejected {request_path}");
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut path = dir.root.join(relative);
    let metadata = match tokio::fs::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(e) => {
            log::debug!("{}: {e}", path.display());
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    if metadata.is_dir() {
        if !request_path.ends_with('/') {
            let location = match uri.query() {
                Some(query) => format!("{request_path}/?{query}"),
                None => format!("{request_path}/"),
            };
            return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
        }
        // No listings: a directory without an index is not served.
        path.push(INDEX_FILE);
        if !tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
            log::debug!("{} has no {INDEX_FILE}", request_path);
            return StatusCode::NOT_FOUND.into_response();
        }
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            log::debug!("{}: {e}", path.display());
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
