use std::path::Path;

use anyhow::Context as _;
use scraper::Html;

/// Parse the HTML file at `path`.
pub fn from_file(path: &Path) -> anyhow::Result<Html> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read HTML file {}", path.display()))?;
    Ok(from_bytes(&bytes))
}

/// Parse in-memory markup. Invalid UTF-8 is replaced, malformed markup is parsed best-effort.
pub fn from_bytes(bytes: &[u8]) -> Html {
    let html = Html::parse_document(&String::from_utf8_lossy(bytes));
    if !html.errors.is_empty() {
        tracing::debug!(errors = html.errors.len(), "document parsed with errors");
    }
    html
}

#[test]
fn malformed_markup_is_tolerated() {
    let html = from_bytes(b"<div><p>unclosed <span class=x></div></table>");
    let selector = scraper::Selector::parse("span.x").unwrap();
    assert_eq!(html.select(&selector).count(), 1);
}

#[test]
fn invalid_utf8_is_tolerated() {
    let html = from_bytes(b"<p>\xff\xfe</p>");
    let selector = scraper::Selector::parse("p").unwrap();
    assert_eq!(html.select(&selector).count(), 1);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(from_file(&dir.path().join("index.html")).is_err());
}
