use serde::Serialize;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

/// Identity tuple for one bill on the listing page. `kan_id` is the only
/// stable identifier the site exposes and the join key for everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDetail {
    pub kan_id: String,
    /// Relative uri of the bill's own page.
    pub uri: String,
    pub name: String,
}

/// One voter's choice, in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteEntry {
    pub name: String,
    pub vote: String,
}

/// The emitted entity, one per bill. Field names are the output contract
/// for downstream consumers; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VotingRecord {
    pub kan_id: String,
    pub url: String,
    pub name: String,
    pub number: Option<String>,
    pub date: Option<String>,
    /// None = no vote data available for this bill.
    pub result: Option<Vec<VoteEntry>>,
    /// One slot per amendment row; None = row without a bill number.
    pub amendments: Vec<Option<String>>,
}

/// Merge the parallel per-column sequences into one record per bill.
///
/// Pure; the extractors uphold the length contracts, so a mismatch here
/// means a broken assumption and fails the page.
pub fn assemble(
    config: &ScrapeConfig,
    details: Vec<BillDetail>,
    numbers: Vec<Option<String>>,
    dates: Vec<Option<String>>,
    results: Vec<Option<Vec<VoteEntry>>>,
    amendments: Vec<Vec<Option<String>>>,
) -> Result<Vec<VotingRecord>, ScrapeError> {
    let expected = details.len();
    let lengths = [
        ("bill numbers", numbers.len()),
        ("bill dates", dates.len()),
        ("vote results", results.len()),
        ("amendments", amendments.len()),
    ];
    for (kind, found) in lengths {
        if found != expected {
            return Err(ScrapeError::StructuralMismatch {
                kind,
                found,
                expected,
            });
        }
    }

    let mut records = Vec::with_capacity(expected);
    for ((((detail, number), date), result), amendments) in details
        .into_iter()
        .zip(numbers)
        .zip(dates)
        .zip(results)
        .zip(amendments)
    {
        records.push(VotingRecord {
            url: config.absolute_url(&detail.uri),
            kan_id: detail.kan_id,
            name: detail.name,
            number,
            date,
            result,
            amendments,
        });
    }
    Ok(records)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScrapeConfig {
        ScrapeConfig {
            host: "http://host/".into(),
            ..ScrapeConfig::default()
        }
    }

    #[test]
    fn assemble_round_trip_shape() {
        let details = vec![BillDetail {
            kan_id: "42".into(),
            uri: "x".into(),
            name: "Bill X".into(),
        }];
        let records = assemble(
            &config(),
            details,
            vec![Some("17-II".into())],
            vec![Some("2011-05-03".into())],
            vec![Some(vec![VoteEntry {
                name: "A".into(),
                vote: "for".into(),
            }])],
            vec![vec![Some("18".into())]],
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kan_id": "42",
                "url": "http://host/x",
                "name": "Bill X",
                "number": "17-II",
                "date": "2011-05-03",
                "result": [{"name": "A", "vote": "for"}],
                "amendments": ["18"],
            })
        );
    }

    #[test]
    fn assemble_serializes_absent_values_as_null() {
        let details = vec![BillDetail {
            kan_id: "7".into(),
            uri: "y".into(),
            name: "Bill Y".into(),
        }];
        let records = assemble(
            &config(),
            details,
            vec![None],
            vec![None],
            vec![None],
            vec![vec![]],
        )
        .unwrap();

        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["number"], serde_json::Value::Null);
        assert_eq!(json["result"], serde_json::Value::Null);
        assert_eq!(json["amendments"], serde_json::json!([]));
    }

    #[test]
    fn assemble_rejects_length_mismatch() {
        let details = vec![
            BillDetail {
                kan_id: "1".into(),
                uri: "a".into(),
                name: "A".into(),
            },
            BillDetail {
                kan_id: "2".into(),
                uri: "b".into(),
                name: "B".into(),
            },
        ];
        let err = assemble(
            &config(),
            details,
            vec![None], // one number for two bills
            vec![None, None],
            vec![None, None],
            vec![vec![], vec![]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::StructuralMismatch {
                kind: "bill numbers",
                found: 1,
                expected: 2,
            }
        ));
    }
}
