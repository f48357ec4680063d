use std::path::Path;

use anyhow::Context as _;

/// Load the selectors from a JSON array of strings, sorted and without duplicates.
///
/// Sorting compares UTF-8 bytes, i.e. code points. This only differs from a
/// UTF-16 code unit order when selectors mix characters above U+FFFF with ones
/// in U+E000..=U+FFFF.
pub fn load(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read checks file {}", path.display()))?;
    let checks = parse(&content)
        .with_context(|| format!("Checks file {} is not a JSON array of strings", path.display()))?;
    tracing::debug!(count = checks.len(), "checks loaded");
    Ok(checks)
}

fn parse(content: &str) -> serde_json::Result<Vec<String>> {
    let mut checks = serde_json::from_str::<Vec<String>>(content)?;
    checks.sort_unstable();
    checks.dedup();
    Ok(checks)
}
