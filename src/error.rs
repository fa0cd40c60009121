use thiserror::Error;

/// Data-shape failures while scraping a listing page.
///
/// All variants indicate a broken markup assumption, not a transient
/// condition, and abort the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A parallel column's length disagrees with the bill-detail count.
    #[error("number mismatch: {kind} {found} != bill details {expected}")]
    StructuralMismatch {
        kind: &'static str,
        found: usize,
        expected: usize,
    },

    /// An amendment block could not be matched to any bill on the page.
    #[error("amendment block owner kan_id {kan_id} matches no bill on this page")]
    UnresolvedAmendmentOwner { kan_id: String },
}
