use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::warn;

use crate::extract::{kan_id_from_href, visibility};
use crate::record::BillDetail;

static DETAIL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="kan_det=det"]"#).unwrap());

/// Find all bill details on the listing page: relative uri, name, kan_id.
///
/// An empty result usually means the wrong document was fetched; it is
/// logged but not fatal, so traversal can continue past e.g. an
/// end-of-results page that still renders pagination controls.
pub fn extract(page: &Html) -> Vec<BillDetail> {
    let anchors = visibility::visible_only(page.select(&DETAIL_SEL).collect());

    let details: Vec<BillDetail> = anchors
        .iter()
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            Some(BillDetail {
                uri: href.to_string(),
                name: anchor.text().collect::<String>().trim().to_string(),
                kan_id: kan_id_from_href(href).to_string(),
            })
        })
        .collect();

    if details.is_empty() {
        warn!("No bills found. Is this the right document?");
    }
    details
}

// ── Tests ──
