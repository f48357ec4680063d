//! Check an HTML document for elements matching a list of CSS selectors.
//!
//! The selectors come from a JSON array of strings (the checks file). The
//! result maps every selector to whether at least one element matched.

use std::path::Path;

use anyhow::Context as _;

pub mod checks;
pub mod cli;
pub mod document;
pub mod http;
pub mod output;
pub mod presence;

pub use presence::Presence;

/// Check the local HTML file `html` against the selectors in `checks`.
pub fn check_html_file(html: &Path, checks: &Path) -> anyhow::Result<Presence> {
    let checks = checks::load(checks)?;
    let html = document::from_file(html)?;
    presence::check(&html, &checks)
}

/// Fetch `url` once and check the body against the selectors in `checks`.
pub fn check_url(url: &str, checks: &Path) -> anyhow::Result<Presence> {
    let checks = checks::load(checks)?;
    let body = http::get_body(url).context("no response received")?;
    let html = document::from_bytes(&body);
    presence::check(&html, &checks)
}
