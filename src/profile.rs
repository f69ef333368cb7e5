//! Profile loading and validation.
//!
//! The entire site is described by one `profile.json` at the site root:
//! who the author is, which articles exist (standalone posts or multi-chapter
//! series), and which optional sections (social links, mail, copyright
//! footer, analytics snippet) the generated pages should carry.
//!
//! ```json
//! {
//!     "name": "Ada",
//!     "description": ["Systems programmer.", "Occasional writer."],
//!     "profile_picture": "ada.png",
//!     "blogs": [
//!         { "name": "Hello World", "link": "posts/hello.md" },
//!         { "name": "Saga", "series": [
//!             { "name": "Part One", "link": "saga/one.md" },
//!             { "name": "Part Two", "link": "saga/two.md", "disabled": true }
//!         ] }
//!     ],
//!     "github": "https://github.com/ada",
//!     "mail": "ada@example.org",
//!     "copyright": "© 2026 Ada"
//! }
//! ```
//!
//! Optional keys simply absent from the document switch their UI section
//! off; the fragment builder reports each omission as a notice. A missing
//! or malformed file aborts the run before anything is written.

use crate::naming;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("cannot read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error("article link is not a markdown file: {0}")]
    NotMarkdown(String),
}

/// Site profile loaded from `profile.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// Author/site name, used as the page heading and index title.
    pub name: String,
    /// Description lines, joined with `<br>` on the index page.
    pub description: Vec<String>,
    /// Path to the profile picture, relative to the site root.
    pub profile_picture: String,
    /// Ordered articles: standalone posts and collapsible series.
    pub blogs: Vec<Entry>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub mastodon: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    /// Contact mail address, rendered as a `mailto:` icon link.
    #[serde(default)]
    pub mail: Option<String>,
    /// Footer text, rendered verbatim inside `<footer>`.
    #[serde(default)]
    pub copyright: Option<String>,
    /// Raw analytics snippet, embedded untouched in every page.
    #[serde(default)]
    pub analytics: Option<String>,
}

/// One top-level item of the `blogs` array.
///
/// Untagged: an object with a `series` key is a [`Entry::Series`],
/// anything else must parse as a plain [`Post`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Series {
        name: String,
        series: Vec<Post>,
    },
    Post(Post),
}

/// A single publishable article or series chapter.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Display title, also passed to the converter as title metadata.
    pub name: String,
    /// Source path relative to `blogs/`, must end in `.md`.
    pub link: String,
    /// Listed struck-through and unlinked, but still converted.
    #[serde(default)]
    pub disabled: bool,
}

/// Social platforms in the fixed order their icons appear in the
/// contacts block.
pub const SOCIAL_PLATFORMS: &[&str] =
    &["twitter", "mastodon", "instagram", "linkedin", "github"];

impl Profile {
    /// Configured URL for a platform named in [`SOCIAL_PLATFORMS`].
    pub fn social_url(&self, platform: &str) -> Option<&str> {
        match platform {
            "twitter" => self.twitter.as_deref(),
            "mastodon" => self.mastodon.as_deref(),
            "instagram" => self.instagram.as_deref(),
            "linkedin" => self.linkedin.as_deref(),
            "github" => self.github.as_deref(),
            _ => None,
        }
    }

    /// All posts in configured order, series chapters flattened in place.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.blogs.iter().flat_map(|entry| match entry {
            Entry::Post(post) => std::slice::from_ref(post).iter(),
            Entry::Series { series, .. } => series.iter(),
        })
    }
}

pub fn load(path: &Path) -> Result<Profile, ProfileError> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)?;
    validate(&profile)?;
    Ok(profile)
}

/// Every post and chapter link must end in `.md` — the output path is
/// derived by extension substitution, so anything else cannot be placed.
fn validate(profile: &Profile) -> Result<(), ProfileError> {
    for post in profile.posts() {
        if !naming::is_markdown(&post.link) {
            return Err(ProfileError::NotMarkdown(post.link.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Profile {
        serde_json::from_str(json).unwrap()
    }

    const MINIMAL: &str = r#"{
        "name": "Ada",
        "description": ["line one", "line two"],
        "profile_picture": "ada.png",
        "blogs": []
    }"#;

    #[test]
    fn minimal_profile_parses() {
        let p = parse(MINIMAL);
        assert_eq!(p.name, "Ada");
        assert_eq!(p.description.len(), 2);
        assert!(p.twitter.is_none());
        assert!(p.mail.is_none());
        assert!(p.copyright.is_none());
        assert!(p.analytics.is_none());
    }

    #[test]
    fn standalone_post_parses() {
        let p = parse(
            r#"{
                "name": "A", "description": [], "profile_picture": "a.png",
                "blogs": [{ "name": "Hello", "link": "posts/hello.md" }]
            }"#,
        );
        match &p.blogs[0] {
            Entry::Post(post) => {
                assert_eq!(post.name, "Hello");
                assert_eq!(post.link, "posts/hello.md");
                assert!(!post.disabled);
            }
            Entry::Series { .. } => panic!("expected a standalone post"),
        }
    }

    #[test]
    fn series_parses_with_chapters_in_order() {
        let p = parse(
            r#"{
                "name": "A", "description": [], "profile_picture": "a.png",
                "blogs": [{ "name": "Saga", "series": [
                    { "name": "One", "link": "saga/one.md" },
                    { "name": "Two", "link": "saga/two.md", "disabled": true }
                ] }]
            }"#,
        );
        match &p.blogs[0] {
            Entry::Series { name, series } => {
                assert_eq!(name, "Saga");
                let links: Vec<&str> = series.iter().map(|c| c.link.as_str()).collect();
                assert_eq!(links, ["saga/one.md", "saga/two.md"]);
                assert!(series[1].disabled);
            }
            Entry::Post(_) => panic!("expected a series"),
        }
    }

    #[test]
    fn posts_flattens_series_chapters_in_configured_order() {
        let p = parse(
            r#"{
                "name": "A", "description": [], "profile_picture": "a.png",
                "blogs": [
                    { "name": "First", "link": "first.md" },
                    { "name": "Saga", "series": [
                        { "name": "One", "link": "saga/one.md" },
                        { "name": "Two", "link": "saga/two.md" }
                    ] },
                    { "name": "Last", "link": "last.md" }
                ]
            }"#,
        );
        let links: Vec<&str> = p.posts().map(|post| post.link.as_str()).collect();
        assert_eq!(links, ["first.md", "saga/one.md", "saga/two.md", "last.md"]);
    }

    #[test]
    fn non_markdown_link_is_rejected() {
        let p = parse(
            r#"{
                "name": "A", "description": [], "profile_picture": "a.png",
                "blogs": [{ "name": "Bad", "link": "posts/hello.txt" }]
            }"#,
        );
        match validate(&p) {
            Err(ProfileError::NotMarkdown(link)) => assert_eq!(link, "posts/hello.txt"),
            other => panic!("expected NotMarkdown, got {other:?}"),
        }
    }

    #[test]
    fn non_markdown_chapter_is_rejected() {
        let p = parse(
            r#"{
                "name": "A", "description": [], "profile_picture": "a.png",
                "blogs": [{ "name": "Saga", "series": [
                    { "name": "One", "link": "saga/one.html" }
                ] }]
            }"#,
        );
        assert!(matches!(validate(&p), Err(ProfileError::NotMarkdown(_))));
    }

    #[test]
    fn social_url_lookup_matches_fields() {
        let p = parse(
            r#"{
                "name": "A", "description": [], "profile_picture": "a.png",
                "blogs": [],
                "github": "https://github.com/ada",
                "twitter": "https://twitter.com/ada"
            }"#,
        );
        assert_eq!(p.social_url("github"), Some("https://github.com/ada"));
        assert_eq!(p.social_url("twitter"), Some("https://twitter.com/ada"));
        assert_eq!(p.social_url("mastodon"), None);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }

    #[test]
    fn load_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load(&path), Err(ProfileError::Json(_))));
    }
}
