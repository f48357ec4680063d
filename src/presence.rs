use std::collections::BTreeMap;

use scraper::{Html, Selector};

/// Selector → whether at least one element matches. Keys stay in sorted order.
pub type Presence = BTreeMap<String, bool>;

/// Run every selector against the document.
///
/// Fails on the first selector the query engine cannot parse, so either every
/// selector gets an answer or none does.
pub fn check(html: &Html, checks: &[String]) -> anyhow::Result<Presence> {
    let mut presence = Presence::new();
    for check in checks {
        let selector = Selector::parse(check)
            .map_err(|error| anyhow::anyhow!("Invalid selector {check:?}: {error}"))?;
        let present = html.select(&selector).next().is_some();
        tracing::trace!(selector = %check, present);
        presence.insert(check.clone(), present);
    }
    Ok(presence)
}
