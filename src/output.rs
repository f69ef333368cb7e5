//! Console output formatting.
//!
//! Each kind of line has a pure `format_*` function (no I/O, unit-testable)
//! and printing happens in one `print_build_report` wrapper. Conversion
//! lines keep the original tool's coloring: green for a page successfully
//! translated, red for a converter error with the captured stderr.
//!
//! ```text
//! -> twitter account skipped
//! -> Mail skipped
//! docs/posts/hello.html successfully translated to HTML
//! ERROR: saga/two.md: pandoc: unknown option
//! Converted 2 pages, 1 failed
//! Copied 3 media assets
//! ```

use crate::build::{BuildReport, PageOutcome};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// One line per converted page: green success or red failure.
pub fn format_page_outcome(outcome: &PageOutcome) -> String {
    match &outcome.result {
        Ok(()) => format!(
            "{GREEN}{} successfully translated to HTML{RESET}",
            outcome.output.display()
        ),
        Err(err) => format!("{RED}ERROR: {}: {err}{RESET}", outcome.link),
    }
}

/// End-of-run summary: page totals and the asset count.
pub fn format_build_summary(report: &BuildReport) -> Vec<String> {
    let failed = report.failed_pages();
    let converted = report.pages.len() - failed;

    let pages_line = if failed == 0 {
        format!("Converted {converted} pages")
    } else {
        format!("Converted {converted} pages, {failed} failed")
    };

    vec![
        pages_line,
        format!("Copied {} media assets", report.assets.len()),
    ]
}

/// Print notices, per-page outcomes, and the summary to stdout.
pub fn print_build_report(report: &BuildReport) {
    for notice in &report.notices {
        println!("{notice}");
    }
    for outcome in &report.pages {
        println!("{}", format_page_outcome(outcome));
    }
    for line in format_build_summary(report) {
        println!("{line}");
    }
}
