use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::ScrapeConfig;

static PAGE_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="limit="]"#).unwrap());

/// Determine the URL of the next page to scrape, or None when traversal
/// is done.
///
/// The pagination block renders at least five controls on every page but
/// the last; the layout convention puts "next" second-to-last (the last
/// control jumps to the end). The root page is exempt from the threshold
/// because its pagination block can present differently.
pub fn next_page(page: &Html, config: &ScrapeConfig, is_root: bool) -> Option<String> {
    let controls: Vec<_> = page.select(&PAGE_LINK_SEL).collect();
    if controls.len() < 5 && !is_root {
        return None; // last page
    }

    let next = controls.len().checked_sub(2).map(|i| controls[i])?;
    let href = next.value().attr("href")?;
    let offset = href.rsplit("limit=").next()?;
    Some(config.page_url(offset))
}

// ── Tests ──
