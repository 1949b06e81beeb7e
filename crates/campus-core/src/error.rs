use thiserror::Error;

/// Errors produced by the list-management core.
///
/// Validation variants are pre-flight: they are raised synchronously,
/// before any request is issued, and each names its specific cause so
/// callers can render something better than "invalid input".
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Validation (pre-flight, no network) ─────────────────────────
    /// A bulk action was requested with an empty selection.
    #[error("no items selected")]
    NothingSelected,

    /// Setting equipment status to RENTED requires a renter.
    #[error("a renter must be specified when setting status to RENTED")]
    MissingRenter,

    /// A conflicting request is already in flight; controls should have
    /// been disabled. The caller retries once the current one settles.
    #[error("another request is in flight")]
    Busy,

    // ── Backend ─────────────────────────────────────────────────────
    /// Error surfaced from the API client.
    #[error(transparent)]
    Api(#[from] campus_api::Error),
}

impl CoreError {
    /// Returns `true` for pre-flight validation failures that never
    /// reached the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NothingSelected | Self::MissingRenter | Self::Busy
        )
    }
}
