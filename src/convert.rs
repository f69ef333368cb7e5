//! Markdown-to-HTML conversion through pandoc.
//!
//! An article page is not the raw Markdown file: the converter receives a
//! composed document — site heading, home/theme header, the article body,
//! the highlight.js hook, the theme script, the analytics snippet, and the
//! footer — and pandoc turns it into a standalone HTML file in one shot.
//!
//! Invocation, matching the original tool exactly:
//!
//! ```text
//! pandoc --metadata title='<title>' --standalone --no-highlight \
//!        --css=<relative blog.css> --output=<dest.html>
//! ```
//!
//! with the composed document piped to stdin and stderr captured. A
//! non-zero exit leaves the page unwritten and surfaces the captured
//! stderr; the caller decides whether the batch continues (it does).
//!
//! No timeout is applied: a hung converter blocks the run.

use crate::naming;
use crate::render;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot read article source: {0}")]
    Source(std::io::Error),
    #[error("cannot prepare output directory: {0}")]
    Output(std::io::Error),
    #[error("cannot run converter: {0}")]
    Spawn(std::io::Error),
    #[error("converter failed: {0}")]
    Converter(String),
}

/// Handle on the external converter executable.
pub struct Converter {
    program: PathBuf,
}

impl Converter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run the converter, piping `document` to its stdin. The converter
    /// writes `out_path` itself; we only check the exit status.
    pub fn convert(
        &self,
        title: &str,
        document: &str,
        css_href: &str,
        out_path: &Path,
    ) -> Result<(), ConvertError> {
        let mut child = Command::new(&self.program)
            .arg("--metadata")
            .arg(format!("title='{title}'"))
            .arg("--standalone")
            .arg("--no-highlight")
            .arg(format!("--css={css_href}"))
            .arg(format!("--output={}", out_path.display()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(ConvertError::Spawn)?;

        // Drop the handle so stdin closes before we wait. A converter that
        // exits without reading closes the pipe early; the exit status
        // carries the real diagnosis, so a broken pipe here is not an error.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(document.as_bytes()) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(err) => return Err(ConvertError::Spawn(err)),
            }
        }

        let output = child.wait_with_output().map_err(ConvertError::Spawn)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ConvertError::Converter(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

/// Compose the full Markdown document for one article.
///
/// `markdown` is the raw article body; `link` is its source path relative
/// to `blogs/`, which fixes the `../` prefix for every shared resource.
pub fn compose_page(
    site_name: &str,
    fragments: &render::Fragments,
    link: &str,
    markdown: &str,
) -> String {
    let prefix = naming::relative_prefix(link);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!("<h1>{site_name}</h1>"));
    parts.push(r#"<div class="contents">"#.to_string());
    parts.push(render::home_fragment(link));
    parts.push(markdown.to_string());
    parts.push("\n".to_string());
    parts.push(format!(
        "\n<script src='{prefix}highlight.min.js'></script><script>hljs.highlightAll();</script>"
    ));
    parts.push(fragments.theme_script.clone().into_string());
    parts.push(fragments.analytics.clone().into_string());
    parts.push("</div>".to_string());
    parts.push(fragments.footer.clone().into_string());

    parts.join("\n")
}

/// Relative stylesheet reference for an article at `link`.
pub fn css_href(link: &str) -> String {
    format!("{}blog.css", naming::relative_prefix(link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_fragments;
    use crate::test_helpers::bare_profile;

    #[test]
    fn composed_page_carries_all_sections_in_order() {
        let mut profile = bare_profile();
        profile.copyright = Some("© Ada".to_string());
        profile.analytics = Some("<script>track()</script>".to_string());
        let fragments = build_fragments(&profile, "// theme");

        let page = compose_page("Ada", &fragments, "posts/hello.md", "# Hello\n\nbody");

        let heading = page.find("<h1>Ada</h1>").unwrap();
        let home = page.find("href='../index.html'").unwrap();
        let body = page.find("# Hello").unwrap();
        let highlight = page.find("src='../highlight.min.js'").unwrap();
        let theme = page.find("// theme").unwrap();
        let analytics = page.find("track()").unwrap();
        let footer = page.find("<footer>© Ada</footer>").unwrap();
        assert!(heading < home);
        assert!(home < body);
        assert!(body < highlight);
        assert!(highlight < theme);
        assert!(theme < analytics);
        assert!(analytics < footer);
    }

    #[test]
    fn composed_page_prefix_matches_depth() {
        let fragments = build_fragments(&bare_profile(), "");
        let page = compose_page("Ada", &fragments, "a/b/c.md", "body");
        assert!(page.contains("src='../../highlight.min.js'"));
        assert!(page.contains("href='../../index.html'"));
    }

    #[test]
    fn css_href_is_depth_relative() {
        assert_eq!(css_href("hello.md"), "blog.css");
        assert_eq!(css_href("posts/hello.md"), "../blog.css");
    }

    #[test]
    fn missing_converter_is_a_spawn_error() {
        let converter = Converter::new("/nonexistent/pandoc-binary");
        let err = converter
            .convert("t", "body", "blog.css", Path::new("/tmp/out.html"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::Spawn(_)));
    }

    #[test]
    fn failing_converter_surfaces_stderr() {
        // `false` exits non-zero without writing anything.
        let converter = Converter::new("false");
        let err = converter
            .convert("t", "body", "blog.css", Path::new("/tmp/out.html"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::Converter(_)));
    }
}
