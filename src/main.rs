use clap::Parser;
use simple_blog::{build, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(about = "Static blog generator driven by a JSON profile and pandoc")]
#[command(long_about = "\
Static blog generator driven by a JSON profile and pandoc

Run from the site root. One profile.json describes the author, the
articles, and the optional contact/footer/analytics sections; pandoc
turns each Markdown article into a standalone HTML page.

Site layout:

  ./
  ├── profile.json             # Site profile (author, articles, socials)
  ├── me.png                   # Profile picture named in profile.json
  ├── blogs/                   # Markdown sources
  │   ├── posts/hello.md       # Article (link: \"posts/hello.md\")
  │   ├── saga/one.md          # Series chapter
  │   └── assets/              # Media (jpeg/mov/mp4/png) → docs/assets/
  ├── css/
  │   ├── blog.css             # Article stylesheet
  │   └── index.css            # Landing page stylesheet
  └── js/
      ├── theming.js           # Theme toggle, inlined into every page
      └── highlight.min.js     # highlight.js bundle

The publish tree is written to ./docs/ and must not exist beforehand —
remove it to rebuild. Per-article pandoc failures are reported and the
run continues; everything else is fatal.")]
#[command(version)]
struct Cli {
    /// Path or name of the pandoc executable
    pandoc: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let pandoc = match cli.pandoc {
        Some(path) => path,
        None => {
            println!("Trying installed pandoc at PATH");
            PathBuf::from("pandoc")
        }
    };

    let paths = build::SitePaths::new(std::env::current_dir()?);
    let report = build::build(&paths, &pandoc)?;
    output::print_build_report(&report);

    Ok(())
}
