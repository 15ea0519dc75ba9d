//! Serving the built single-page application.
//!
//! Real files under the SPA directory (scripts, styles, images) are served
//! as-is. Every other path gets the entry document so client-side routing can
//! take over; if the entry document itself is missing the response is 404.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Name of the SPA entry document inside the SPA directory.
pub const INDEX_FILE: &str = "index.html";

/// Static file service for `dir` with an `index.html` fallback.
pub fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dir.join(INDEX_FILE)))
}
