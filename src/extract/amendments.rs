use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;
use crate::extract::kan_id_from_href;
use crate::record::BillDetail;

static HIDDEN_BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.hidethis").unwrap());

static OWNER_ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td a").unwrap());

static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Find all amendment bill numbers and assign each list to its owning
/// bill's slot.
///
/// Amendment blocks appear in arbitrary document order relative to their
/// owner, so the join is by kan_id, never by position: each `hidethis`
/// block names its owner via the detail anchor of the structurally
/// preceding sibling row. A block whose owner is not among the page's
/// details means the markup assumption broke; that is fatal rather than
/// silently dropped.
pub fn extract(
    page: &Html,
    details: &[BillDetail],
) -> Result<Vec<Vec<Option<String>>>, ScrapeError> {
    let mut data = vec![Vec::new(); details.len()];
    let index_by_id: HashMap<&str, usize> = details
        .iter()
        .enumerate()
        .map(|(i, d)| (d.kan_id.as_str(), i))
        .collect();

    for block in page.select(&HIDDEN_BLOCK_SEL) {
        let kan_id = owner_kan_id(block).ok_or(ScrapeError::UnresolvedAmendmentOwner {
            kan_id: "<missing owner row>".to_string(),
        })?;
        let idx = *index_by_id
            .get(kan_id.as_str())
            .ok_or(ScrapeError::UnresolvedAmendmentOwner { kan_id })?;
        data[idx] = amendment_numbers(block);
    }
    Ok(data)
}

/// The block sits in a cell of its own row; the owning bill's row is the
/// nearest preceding sibling, and its first detail anchor carries the
/// kan_id.
fn owner_kan_id(block: ElementRef<'_>) -> Option<String> {
    let cell = block.parent().and_then(ElementRef::wrap)?;
    let row = cell.parent().and_then(ElementRef::wrap)?;
    let owner_row = row.prev_siblings().find_map(ElementRef::wrap)?;
    let anchor = owner_row.select(&OWNER_ANCHOR_SEL).next()?;
    let href = anchor.value().attr("href")?;
    Some(kan_id_from_href(href).to_string())
}

/// One entry per row inside the block: the second column holds the
/// amendment's bill number, absent when the cell is empty.
fn amendment_numbers(block: ElementRef<'_>) -> Vec<Option<String>> {
    let mut nums = Vec::new();
    for row in block.select(&ROW_SEL) {
        let Some(cell) = row.select(&CELL_SEL).nth(1) else {
            continue;
        };
        let text = cell.text().collect::<String>().trim().to_string();
        nums.push(if text.is_empty() { None } else { Some(text) });
    }
    nums
}

// ── Tests ──
