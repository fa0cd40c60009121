pub mod amendments;
pub mod dates;
pub mod details;
pub mod numbers;
pub mod tallies;
pub mod visibility;

/// kan_id is the value after the last `=` in a detail href. It is the only
/// identifier the site exposes for a voting record.
pub(crate) fn kan_id_from_href(href: &str) -> &str {
    href.rsplit('=').next().unwrap_or(href)
}

// ── Tests ──
