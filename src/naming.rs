//! Link path conventions shared by the templater and the converter.
//!
//! Article links in `profile.json` are `/`-separated paths relative to the
//! `blogs/` source directory (`posts/hello.md`). The publish tree mirrors
//! them exactly, with the extension swapped to `.html`. Pages below the
//! publish root reach shared resources (`index.html`, `blog.css`,
//! `highlight.min.js`) through a `../` prefix, one step per directory level.

use std::path::PathBuf;

/// The `../` prefix that climbs from a link's directory back to the
/// publish root.
///
/// One repetition per path segment beyond the first:
/// - `hello.md` → `""`
/// - `posts/hello.md` → `"../"`
/// - `a/b/c.md` → `"../../"`
pub fn relative_prefix(link: &str) -> String {
    let depth = link.split('/').count();
    "../".repeat(depth - 1)
}

/// Whether a link carries the Markdown extension the converter requires.
pub fn is_markdown(link: &str) -> bool {
    std::path::Path::new(link)
        .extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

/// Output path for a source link: same relative path, `.html` extension.
pub fn html_output_path(link: &str) -> PathBuf {
    PathBuf::from(link).with_extension("html")
}

/// Hyperlink target for a source link, kept `/`-separated for HTML use.
pub fn html_href(link: &str) -> String {
    match link.rsplit_once('.') {
        Some((stem, _)) => format!("{stem}.html"),
        None => format!("{link}.html"),
    }
}
