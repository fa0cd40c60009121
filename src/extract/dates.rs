use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::ScrapeError;
use crate::extract::visibility;

static DATE_CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[width="80"][align="center"]"#).unwrap());

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Find all bill dates on the listing page, one per bill.
///
/// Values must be real `YYYY-MM-DD` calendar dates. Same count contract
/// as the bill numbers: a disagreement with the detail count is fatal.
pub fn extract(page: &Html, num_details: usize) -> Result<Vec<Option<String>>, ScrapeError> {
    let cells = visibility::visible_only(page.select(&DATE_CELL_SEL).collect());

    let mut data = Vec::with_capacity(cells.len());
    for cell in cells {
        let text = cell.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            data.push(None);
        } else if is_calendar_date(text) {
            data.push(Some(text.to_string()));
        }
    }

    if data.len() != num_details {
        return Err(ScrapeError::StructuralMismatch {
            kind: "bill dates",
            found: data.len(),
            expected: num_details,
        });
    }
    Ok(data)
}

fn is_calendar_date(text: &str) -> bool {
    DATE_RE.is_match(text) && NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
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
    fn one_date_per_bill() {
        let dates = extract(&fixture("listing_page1"), 5).unwrap();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0].as_deref(), Some("2011-05-03"));
        assert!(dates.iter().all(|d| d.is_some()));
    }

    #[test]
    fn count_mismatch_is_fatal() {
        let err = extract(&fixture("listing_page1"), 6).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::StructuralMismatch {
                kind: "bill dates",
                found: 5,
                expected: 6,
            }
        ));
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let page = Html::parse_document(
            r#"<table><tr><td width="80" align="center">2011-13-45</td></tr></table>"#,
        );
        let err = extract(&page, 1).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { found: 0, .. }));
    }
}
