//! Shared test utilities for the simple-blog test suite.
//!
//! Profile builders for the rendering tests, and a site scaffolder that
//! writes the minimal on-disk layout [`crate::build::build`] expects into
//! a caller-provided (temp) directory.

use crate::profile::{Entry, Post, Profile};
use std::fs;
use std::path::Path;

/// A profile with every optional field absent and no articles.
pub fn bare_profile() -> Profile {
    serde_json::from_str(
        r#"{
            "name": "Ada",
            "description": ["Systems programmer."],
            "profile_picture": "ada.png",
            "blogs": []
        }"#,
    )
    .unwrap()
}

pub fn post(name: &str, link: &str) -> Post {
    Post {
        name: name.to_string(),
        link: link.to_string(),
        disabled: false,
    }
}

pub fn post_entry(name: &str, link: &str) -> Entry {
    Entry::Post(post(name, link))
}

pub fn disabled_entry(name: &str, link: &str) -> Entry {
    Entry::Post(Post {
        disabled: true,
        ..post(name, link)
    })
}

pub fn series_entry(name: &str, chapters: &[(&str, &str)]) -> Entry {
    Entry::Series {
        name: name.to_string(),
        series: chapters.iter().map(|(n, l)| post(n, l)).collect(),
    }
}

/// Write a complete minimal site into `root`. `blogs_json` is the raw
/// JSON array for the profile's `blogs` key.
pub fn write_site(root: &Path, blogs_json: &str) {
    fs::create_dir_all(root.join("blogs/assets")).unwrap();
    fs::create_dir_all(root.join("css")).unwrap();
    fs::create_dir_all(root.join("js")).unwrap();

    fs::write(
        root.join("profile.json"),
        format!(
            r#"{{
                "name": "Ada",
                "description": ["Systems programmer."],
                "profile_picture": "ada.png",
                "blogs": {blogs_json}
            }}"#
        ),
    )
    .unwrap();

    fs::write(root.join("ada.png"), b"png").unwrap();
    fs::write(root.join("css/blog.css"), "body {}").unwrap();
    fs::write(root.join("css/index.css"), "body {}").unwrap();
    fs::write(root.join("js/theming.js"), "function setTheme() {}").unwrap();
    fs::write(root.join("js/highlight.min.js"), "var hljs = {};").unwrap();
}
