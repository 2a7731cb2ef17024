//! Continuation detection for paginated responses.
//!
//! The preferred signal is a `Link` header carrying a `rel="next"` entry.
//! Some deployments and proxies strip that header, so when it is absent the
//! decision falls back to comparing the items seen so far with the reported
//! total.

use tracing::{debug, warn};

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;

/// Returns `true` if the `Link` header value advertises a `next` relation.
///
/// The header is a comma-separated list of `<uri>; param=value` entries. The
/// `rel` parameter may be quoted and may list several space-separated
/// relation types.
pub fn link_has_next(header: &str) -> bool {
    split_links(header).any(|entry| {
        entry
            .split(';')
            .skip(1)
            .filter_map(|param| param.split_once('='))
            .filter(|(name, _)| name.trim().eq_ignore_ascii_case("rel"))
            .any(|(_, value)| {
                value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
            })
    })
}

/// Splits a `Link` header into entries, ignoring commas inside `<...>`.
fn split_links(header: &str) -> impl Iterator<Item = &str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in header.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);
    entries.into_iter().map(str::trim).filter(|e| !e.is_empty())
}

/// Returns `true` if results beyond `page` exist according to the totals.
pub fn arithmetic_has_more(page: u32, page_size: u8, total_count: u64) -> bool {
    u64::from(page) * u64::from(page_size) < total_count
}

/// Decides whether another page exists.
///
/// The `Link` header wins whenever it is present. If it disagrees with the
/// arithmetic signal the disagreement is logged.
pub fn has_more(link_header: Option<&str>, page: u32, page_size: u8, total_count: u64) -> bool {
    let arithmetic = arithmetic_has_more(page, page_size, total_count);

    match link_header {
        Some(header) => {
            let linked = link_has_next(header);
            if linked != arithmetic {
                warn!(
                    page,
                    page_size,
                    total_count,
                    link_next = linked,
                    arithmetic_next = arithmetic,
                    "Link header disagrees with result totals, using Link header"
                );
            }
            linked
        }
        None => {
            debug!(
                page,
                page_size,
                total_count,
                has_more = arithmetic,
                "No Link header, using result totals"
            );
            arithmetic
        }
    }
}
