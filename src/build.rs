//! Build orchestration.
//!
//! One build is a fixed sequence: load the profile, build fragments,
//! render the index, refuse to touch an existing publish tree, create it,
//! write the index, copy the shared resources and media assets, then
//! convert every article. Each step is fatal except the per-article
//! conversion loop, which records an outcome per page and always runs to
//! the end.
//!
//! All state flows through explicit values — [`SitePaths`] for the layout,
//! [`BuildReport`] for the results — so the whole pipeline is a plain
//! function a test can call against a temp directory.

use crate::convert::{self, ConvertError, Converter};
use crate::profile::{self, ProfileError};
use crate::{assets, naming, render};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("publish directory already exists, remove it first: {0}")]
    OutputExists(PathBuf),
    #[error("required input file is missing: {0}")]
    MissingInput(PathBuf),
}

/// Layout of a site rooted at one directory.
///
/// ```text
/// <root>/
/// ├── profile.json           # site profile
/// ├── <profile_picture>      # referenced from profile.json
/// ├── blogs/                 # markdown sources, mirrored into docs/
/// │   └── assets/            # media files
/// ├── css/blog.css           # article stylesheet
/// ├── css/index.css          # landing page stylesheet
/// ├── js/theming.js          # theme toggle, inlined into every page
/// └── js/highlight.min.js    # highlight.js bundle, copied to docs/
/// ```
pub struct SitePaths {
    pub root: PathBuf,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn profile(&self) -> PathBuf {
        self.root.join("profile.json")
    }

    pub fn blogs_dir(&self) -> PathBuf {
        self.root.join("blogs")
    }

    pub fn assets_src(&self) -> PathBuf {
        self.root.join("blogs/assets")
    }

    pub fn blog_css(&self) -> PathBuf {
        self.root.join("css/blog.css")
    }

    pub fn index_css(&self) -> PathBuf {
        self.root.join("css/index.css")
    }

    pub fn theme_js(&self) -> PathBuf {
        self.root.join("js/theming.js")
    }

    pub fn highlight_js(&self) -> PathBuf {
        self.root.join("js/highlight.min.js")
    }

    /// Publish root. Must not exist when a build starts.
    pub fn out_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    pub fn out_assets(&self) -> PathBuf {
        self.root.join("docs/assets")
    }
}

/// Result of converting one article.
#[derive(Debug)]
pub struct PageOutcome {
    /// Source link as configured in the profile.
    pub link: String,
    /// Destination HTML path under the publish root.
    pub output: PathBuf,
    pub result: Result<(), ConvertError>,
}

/// Everything a finished build has to report.
#[derive(Debug)]
pub struct BuildReport {
    /// Skipped optional profile sections.
    pub notices: Vec<String>,
    /// Per-article outcomes, in configured order.
    pub pages: Vec<PageOutcome>,
    /// Copied media file names.
    pub assets: Vec<String>,
}

impl BuildReport {
    pub fn failed_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.result.is_err()).count()
    }
}

/// Run a full build of the site at `paths`, converting articles with the
/// executable at `converter_program`.
pub fn build(paths: &SitePaths, converter_program: &Path) -> Result<BuildReport, BuildError> {
    let profile = profile::load(&paths.profile())?;

    let theme_js = read_required(&paths.theme_js())?;
    let fragments = render::build_fragments(&profile, &theme_js);
    let index_html = render::render_index(&profile, &fragments);

    // Clean-build guard: checked for both directories before anything is
    // written, so a repeated run leaves prior output untouched.
    for dir in [paths.out_dir(), paths.out_assets()] {
        if dir.exists() {
            return Err(BuildError::OutputExists(dir));
        }
    }
    fs::create_dir_all(paths.out_assets())?;

    fs::write(paths.out_dir().join("index.html"), index_html.into_string())?;

    copy_required(
        &paths.root.join(&profile.profile_picture),
        &paths.out_dir().join(&profile.profile_picture),
    )?;
    copy_required(&paths.blog_css(), &paths.out_dir().join("blog.css"))?;
    copy_required(&paths.index_css(), &paths.out_dir().join("index.css"))?;
    copy_required(
        &paths.highlight_js(),
        &paths.out_dir().join("highlight.min.js"),
    )?;

    let copied_assets = assets::copy_assets(&paths.assets_src(), &paths.out_assets())?;

    let converter = Converter::new(converter_program);
    let mut pages = Vec::new();
    for post in profile.posts() {
        let result = convert_page(paths, &profile.name, &fragments, &converter, post);
        pages.push(PageOutcome {
            link: post.link.clone(),
            output: paths.out_dir().join(naming::html_output_path(&post.link)),
            result,
        });
    }

    Ok(BuildReport {
        notices: fragments.notices,
        pages,
        assets: copied_assets,
    })
}

/// Convert one article. Every failure specific to the page — unreadable
/// source, unpreparable output directory, converter failure — becomes its
/// outcome; the loop in [`build`] continues regardless.
fn convert_page(
    paths: &SitePaths,
    site_name: &str,
    fragments: &render::Fragments,
    converter: &Converter,
    post: &crate::profile::Post,
) -> Result<(), ConvertError> {
    let out_path = paths.out_dir().join(naming::html_output_path(&post.link));
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(ConvertError::Output)?;
    }

    let markdown = fs::read_to_string(paths.blogs_dir().join(&post.link))
        .map_err(ConvertError::Source)?;
    let document = convert::compose_page(site_name, fragments, &post.link, &markdown);

    converter.convert(
        &post.name,
        &document,
        &convert::css_href(&post.link),
        &out_path,
    )
}

fn read_required(path: &Path) -> Result<String, BuildError> {
    if !path.is_file() {
        return Err(BuildError::MissingInput(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

fn copy_required(src: &Path, dst: &Path) -> Result<(), BuildError> {
    if !src.is_file() {
        return Err(BuildError::MissingInput(src.to_path_buf()));
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;
    Ok(())
}
