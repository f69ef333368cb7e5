//! HTML fragments and the index page.
//!
//! Everything visual is fixed markup parameterized only by profile data:
//! the theme-toggle button, the per-platform contact icons, the copyright
//! footer, and the landing page itself. Fragments for optional profile
//! fields render empty when the field is absent, and the omission is
//! reported as a notice.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! checked templates with auto-escaped interpolation. The fixed SVG icons,
//! the theme script, and the user-supplied analytics snippet are raw
//! markup by design and pass through `PreEscaped`.

use crate::naming;
use crate::profile::{Entry, Post, Profile, SOCIAL_PLATFORMS};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Theme-toggle control, shared by the index page and every article page.
/// `setTheme` is defined by the theming script.
pub const THEME_BUTTON: &str = r#"<button id="btn" onclick="setTheme()">THEME</button>"#;

/// Feather-style inline SVG icons for the contacts block.
fn icon(platform: &str) -> Option<&'static str> {
    match platform {
        "mail" => Some(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-mail"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline></svg>"#,
        ),
        "twitter" => Some(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-twitter"><path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"></path></svg>"#,
        ),
        "github" => Some(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-github"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path></svg>"#,
        ),
        "mastodon" => Some(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="white" stroke-linecap="round" stroke-linejoin="round"><path d="M21.327 8.566c0-4.339-2.843-5.61-2.843-5.61-1.433-.658-3.894-.935-6.451-.956h-.063c-2.557.021-5.016.298-6.45.956 0 0-2.843 1.272-2.843 5.61 0 .993-.019 2.181.012 3.441.103 4.243.778 8.425 4.701 9.463 1.809.479 3.362.579 4.612.51 2.268-.126 3.541-.809 3.541-.809l-.075-1.646s-1.621.511-3.441.449c-1.804-.062-3.707-.194-3.999-2.409a4.523 4.523 0 0 1-.04-.621s1.77.433 4.014.536c1.372.063 2.658-.08 3.965-.236 2.506-.299 4.688-1.843 4.962-3.254.434-2.223.398-5.424.398-5.424zm-3.353 5.59h-2.081V9.057c0-1.075-.452-1.62-1.357-1.62-1 0-1.501.647-1.501 1.927v2.791h-2.069V9.364c0-1.28-.501-1.927-1.502-1.927-.905 0-1.357.546-1.357 1.62v5.099H6.026V8.903c0-1.074.273-1.927.823-2.558.566-.631 1.307-.955 2.228-.955 1.065 0 1.872.409 2.405 1.228l.518.869.519-.869c.533-.819 1.34-1.228 2.405-1.228.92 0 1.662.324 2.228.955.549.631.822 1.484.822 2.558v5.253z"/></svg>"#,
        ),
        "linkedin" => Some(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-linkedin"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect x="2" y="9" width="4" height="12"></rect><circle cx="4" cy="4" r="2"></circle></svg>"#,
        ),
        "instagram" => Some(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-instagram"><rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line></svg>"#,
        ),
        _ => None,
    }
}

/// Pre-rendered fragments for the optional profile sections, plus the
/// notices for every section that was switched off.
pub struct Fragments {
    /// Contacts block (`CONTACTS` heading + icon links), empty if no
    /// platform and no mail is configured.
    pub contacts: Markup,
    /// `<footer>` with the copyright text, empty if not configured.
    pub footer: Markup,
    /// `<script>` wrapping the theming script source.
    pub theme_script: Markup,
    /// Raw analytics snippet, empty if not configured.
    pub analytics: Markup,
    /// One line per omitted optional section.
    pub notices: Vec<String>,
}

/// Build all profile-dependent fragments in one pass.
///
/// `theme_js` is the content of `js/theming.js`; it ends up inlined in a
/// `<script>` on every generated page.
pub fn build_fragments(profile: &Profile, theme_js: &str) -> Fragments {
    let mut notices = Vec::new();
    let mut icons: Vec<Markup> = Vec::new();

    for &platform in SOCIAL_PLATFORMS {
        match profile.social_url(platform) {
            Some(url) => icons.push(html! {
                a href=(url) { (PreEscaped(icon(platform).unwrap_or_default())) }
            }),
            None => notices.push(format!("-> {platform} account skipped")),
        }
    }
    match &profile.mail {
        Some(mail) => icons.push(html! {
            a href={ "mailto:" (mail) } { (PreEscaped(icon("mail").unwrap_or_default())) }
        }),
        None => notices.push("-> Mail skipped".to_string()),
    }

    let contacts = if icons.is_empty() {
        html! {}
    } else {
        html! {
            br;
            h2 { "CONTACTS" }
            hr;
            div.contact {
                @for link in &icons { (link) }
            }
        }
    };

    let footer = match &profile.copyright {
        Some(text) => html! { footer { (PreEscaped(text)) } },
        None => {
            notices.push("-> copyright skipped".to_string());
            html! {}
        }
    };

    let analytics = match &profile.analytics {
        Some(snippet) => PreEscaped(snippet.clone()),
        None => {
            notices.push("-> Analytics skipped".to_string());
            html! {}
        }
    };

    Fragments {
        contacts,
        footer,
        theme_script: html! { script { (PreEscaped(theme_js)) } },
        analytics,
        notices,
    }
}

/// Home/theme header for an article, emitted as Markdown. The `../`
/// prefix climbs from the article's directory back to the publish root.
pub fn home_fragment(link: &str) -> String {
    let prefix = naming::relative_prefix(link);
    format!("<a class='home' href='{prefix}index.html'>HOME</a>\n{THEME_BUTTON}\n\n---\n\n")
}

// ============================================================================
// Navigation
// ============================================================================

/// The `BLOGS` list: one item per top-level entry, in configured order.
pub fn render_nav(entries: &[Entry]) -> Markup {
    html! {
        ul {
            @for entry in entries {
                @match entry {
                    Entry::Post(post) => {
                        (render_nav_post(post))
                    }
                    Entry::Series { name, series } => {
                        details {
                            summary { (name) }
                            @for chapter in series {
                                (render_nav_post(chapter))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single post item. Disabled posts are struck through and carry no
/// anchor at all.
fn render_nav_post(post: &Post) -> Markup {
    if post.disabled {
        html! {
            li.disabled { s { (post.name) } }
        }
    } else {
        html! {
            a href=(naming::html_href(&post.link)) { li { (post.name) } }
        }
    }
}

// ============================================================================
// Index page
// ============================================================================

/// The full landing-page document.
pub fn render_index(profile: &Profile, fragments: &Fragments) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta http-equiv="X-UA-Compatible" content="ie=edge";
                title { (profile.name) }
                link rel="stylesheet" href="./index.css";
                link rel="icon" href="./favicon.ico" type="image/x-icon";
            }
            body {
                div.contents {
                    h1 style="display: inline-block; padding-right: 20px;" { (profile.name) }
                    (PreEscaped(THEME_BUTTON))
                    hr;
                    div.profile {
                        img src=(profile.profile_picture) width="150" height="150"
                            style="float:left; margin-right: 15px; margin-top: 5px;";
                        p {
                            @for (i, line) in profile.description.iter().enumerate() {
                                @if i > 0 { br; }
                                (line)
                            }
                        }
                        br;
                    }
                    h2 { "BLOGS" }
                    hr;
                    div.project {
                        (render_nav(&profile.blogs))
                    }
                    (fragments.contacts)
                }
                (fragments.footer)
                (fragments.theme_script)
                (fragments.analytics)
            }
        }
    }
}
