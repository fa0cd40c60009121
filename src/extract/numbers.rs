use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::ScrapeError;
use crate::extract::visibility;

static NUMBER_CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[width="50"][align="center"]"#).unwrap());

// numeric with optional suffix, e.g. "17-II" ([-–] can't be matched
// directly across encodings, hence \S)
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\S*").unwrap());

/// Find all bill numbers on the listing page, one per bill.
///
/// An empty cell means no number was assigned. A count that disagrees
/// with the detail count means the page's shape changed; that is fatal.
pub fn extract(page: &Html, num_details: usize) -> Result<Vec<Option<String>>, ScrapeError> {
    let cells = visibility::visible_only(page.select(&NUMBER_CELL_SEL).collect());

    let mut data = Vec::with_capacity(cells.len());
    for cell in cells {
        let text = cell.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            data.push(None); // no bill number
        } else if NUMBER_RE.is_match(text) {
            data.push(Some(text.to_string()));
        }
        // any other content is not a number column value; the count
        // check below surfaces it
    }

    if data.len() != num_details {
        return Err(ScrapeError::StructuralMismatch {
            kind: "bill numbers",
            found: data.len(),
            expected: num_details,
        });
    }
    Ok(data)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> Html {
        let html = std::fs::read_to_string(format!("tests/fixtures/{name}.html")).unwrap();
        Html::parse_document(&html)
    }

    #[test]
    fn one_number_per_bill_with_absent_marker() {
        let numbers = extract(&fixture("listing_page1"), 5).unwrap();
        assert_eq!(numbers.len(), 5);
        assert_eq!(numbers[0].as_deref(), Some("17-II"));
        assert_eq!(numbers[2], None); // empty cell = no number assigned
    }

    #[test]
    fn hidden_amendment_cells_are_not_counted() {
        // the amendment sub-table uses the same column signature; a naive
        // scan would find more cells than bills
        let numbers = extract(&fixture("listing_page1"), 5).unwrap();
        assert!(!numbers.contains(&Some("18-I".to_string())));
    }

    #[test]
    fn count_mismatch_is_fatal_never_truncated() {
        let err = extract(&fixture("listing_page1"), 4).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::StructuralMismatch {
                kind: "bill numbers",
                found: 5,
                expected: 4,
            }
        ));
    }

    #[test]
    fn non_numeric_cell_surfaces_as_mismatch() {
        let page = Html::parse_document(
            r#"<table><tr><td width="50" align="center">n/a</td></tr></table>"#,
        );
        let err = extract(&page, 1).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { found: 0, .. }));
    }
}
