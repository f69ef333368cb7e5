//! Media asset copying.
//!
//! Articles reference images and clips under `blogs/assets/`; the copier
//! mirrors the matching files into `docs/assets/`. Only the top level is
//! scanned, and only known media extensions are taken — build leftovers
//! and editor droppings next to the media stay behind.

use std::fs;
use std::path::Path;

/// Media extensions worth publishing, matched case-insensitively.
const ASSET_EXTENSIONS: &[&str] = &["jpeg", "mov", "mp4", "png"];

/// Copy every allow-listed file from the top level of `src` into `dst`.
///
/// Returns the copied file names in scan order. Any I/O failure — a
/// missing source directory included — propagates and aborts the build.
pub fn copy_assets(src: &Path, dst: &Path) -> std::io::Result<Vec<String>> {
    let mut copied = Vec::new();

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .map(|ext| {
                ASSET_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);
        if !matches {
            continue;
        }
        fs::copy(&path, dst.join(entry.file_name()))?;
        copied.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(copied)
}
