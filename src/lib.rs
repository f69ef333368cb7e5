//! # Simple Blog
//!
//! A minimal static blog generator. One `profile.json` is the data source:
//! it names the author, the articles (standalone posts or multi-chapter
//! series), and the optional contact/footer/analytics sections. Markdown
//! articles are turned into standalone HTML pages by pandoc; the generator
//! itself only composes documents, renders the landing page, and copies
//! files.
//!
//! # Architecture: One Sequential Pipeline
//!
//! ```text
//! profile.json ──► load ──► fragments ──► index.html
//!                              │
//! blogs/*.md ──────────────────┴──► pandoc ──► docs/**/*.html
//! blogs/assets/* ──────────────────────────► docs/assets/*
//! ```
//!
//! Everything is synchronous and single-threaded; the only external moving
//! part is the pandoc child process. A build refuses to start if `docs/`
//! already exists — every publish tree is generated from scratch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`profile`] | `profile.json` types, loading, and link validation |
//! | [`naming`] | link path conventions: `../` prefixes and `.md` → `.html` |
//! | [`render`] | maud fragments (theme, contacts, footer) and the index page |
//! | [`convert`] | document composition and the pandoc invocation |
//! | [`assets`] | allow-listed media copy into `docs/assets/` |
//! | [`build`] | orchestration: guard, directories, copies, conversion loop |
//! | [`output`] | console formatting — notices, per-page lines, summary |
//!
//! # Design Decisions
//!
//! ## Pandoc Over an In-Process Renderer
//!
//! Markdown conversion is delegated to pandoc rather than a Markdown
//! crate. The composed document mixes Markdown with raw HTML fragments,
//! and pandoc's standalone mode produces the full page (title metadata,
//! stylesheet link) in one invocation — the generator never needs its own
//! HTML page template for articles. The cost is an external binary; its
//! path is the one CLI argument.
//!
//! ## Maud Over Template Engines
//!
//! The landing page and the profile-driven fragments are generated with
//! [Maud](https://maud.lambda.xyz/): compile-time checked, auto-escaped,
//! no template files to ship. Raw snippets (the fixed SVG icons, the theme
//! script, a user-supplied analytics blob) are the only `PreEscaped` spots.
//!
//! ## Clean Builds By Refusal
//!
//! There is no incremental rebuild and no overwrite: if `docs/` or
//! `docs/assets/` exists the build aborts before writing a single byte.
//! Deleting the publish tree is the user's explicit act.
//!
//! ## Continue-On-Failure Conversion
//!
//! A page that pandoc rejects does not kill the batch: each article gets a
//! recorded outcome and the run ends with a summary. Shared inputs
//! (stylesheets, theming and highlight scripts, the profile picture) are
//! different — without them every page is broken, so they are fatal.

pub mod assets;
pub mod build;
pub mod convert;
pub mod naming;
pub mod output;
pub mod profile;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
