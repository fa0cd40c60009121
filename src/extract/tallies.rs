use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::warn;

use crate::config::ScrapeConfig;
use crate::extract::visibility;
use crate::fetch::Fetch;
use crate::record::VoteEntry;

static RESULT_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="kan_det=res"]"#).unwrap());

// the results table has no id; its styling is the only signature
static RESULT_TABLE_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        r##"table[width="500"][border="0"][align="left"][cellpadding="3"][cellspacing="2"][bgcolor="#EEEEEE"]"##,
    )
    .unwrap()
});

static VISIBLE_ROW_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r##"tr[bgcolor="#FFFFFF"]"##).unwrap());

static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Fetch the per-bill results page behind each result link and extract
/// one VoteEntry per visible row.
///
/// The only extraction needing network I/O beyond the listing page; every
/// fetch goes through the paced client. Failures are not fatal: a bill
/// with an unreachable or empty results page (e.g. withdrawn, never
/// voted) gets an absent tally, and a shortfall against the detail count
/// is padded the same way.
pub fn extract<F: Fetch>(
    page: &Html,
    num_details: usize,
    fetcher: &mut F,
    config: &ScrapeConfig,
) -> Vec<Option<Vec<VoteEntry>>> {
    let anchors = visibility::visible_only(page.select(&RESULT_LINK_SEL).collect());

    let mut data = Vec::with_capacity(num_details);
    for anchor in anchors {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let url = config.absolute_url(href);
        let votes = match fetcher.get(&url) {
            Ok(body) => {
                let votes = parse_results_page(&body);
                if votes.is_none() {
                    warn!("No results table at {url}");
                }
                votes
            }
            Err(e) => {
                warn!("Results fetch failed, treating as no vote data: {e:#}");
                None
            }
        };
        data.push(votes);
    }

    if data.len() < num_details {
        warn!(
            "Vote results {} < bill details {}, padding with empty values",
            data.len(),
            num_details
        );
        data.resize_with(num_details, || None);
    }
    data
}

fn parse_results_page(body: &str) -> Option<Vec<VoteEntry>> {
    let doc = Html::parse_document(body);
    let table = doc.select(&RESULT_TABLE_SEL).next()?;

    let mut votes = Vec::new();
    for row in table.select(&VISIBLE_ROW_SEL) {
        let mut cells = row.select(&CELL_SEL);
        let (Some(name), Some(vote)) = (cells.next(), cells.next()) else {
            continue;
        };
        votes.push(VoteEntry {
            name: name.text().collect::<String>().trim().to_string(),
            vote: vote.text().collect::<String>().trim().to_string(),
        });
    }
    Some(votes)
}

// ── Tests ──
