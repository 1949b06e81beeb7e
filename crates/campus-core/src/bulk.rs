// ── Bulk operation coordinator ──
//
// Fans one action out across every selected item concurrently, then
// reports per-item outcomes. The coordinator never short-circuits: a
// failure on one item does not cancel the requests for the others.

use campus_api::{Error as ApiError, EquipmentStatus, ItemId};
use futures_util::future::join_all;

use crate::error::CoreError;

/// One action applicable to a whole selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkAction {
    /// Delete the items outright.
    Delete,
    /// Enable or disable the items (devices, accounts).
    SetActive(bool),
    /// Blacklist or un-blacklist IP assignments.
    SetBlacklisted(bool),
    /// Move equipment into a lifecycle status. `Rented` requires a
    /// renter; every other status must leave it empty.
    SetStatus {
        status: EquipmentStatus,
        renter: Option<String>,
    },
}

impl BulkAction {
    /// Pre-flight validation. Runs before any request is issued.
    pub fn validate(&self, selection_len: usize) -> Result<(), CoreError> {
        if selection_len == 0 {
            return Err(CoreError::NothingSelected);
        }
        if let Self::SetStatus {
            status: EquipmentStatus::Rented,
            renter,
        } = self
        {
            if renter.as_deref().is_none_or(|r| r.trim().is_empty()) {
                return Err(CoreError::MissingRenter);
            }
        }
        Ok(())
    }

    /// Short human label for toasts and prompts.
    pub fn describe(&self) -> String {
        match self {
            Self::Delete => "delete".to_owned(),
            Self::SetActive(true) => "activate".to_owned(),
            Self::SetActive(false) => "deactivate".to_owned(),
            Self::SetBlacklisted(true) => "blacklist".to_owned(),
            Self::SetBlacklisted(false) => "remove from blacklist".to_owned(),
            Self::SetStatus { status, .. } => format!("set status to {status}"),
        }
    }
}

/// The result of the action on one item.
#[derive(Debug)]
pub struct ItemOutcome {
    pub id: ItemId,
    pub result: Result<(), ApiError>,
}

/// Aggregate of per-item outcomes for one bulk run.
#[derive(Debug, Default)]
pub struct BulkReport {
    pub outcomes: Vec<ItemOutcome>,
}

/// The three-way summary a UI renders a notification from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Every item succeeded.
    Success { count: usize },
    /// Some items succeeded, some failed.
    Partial { succeeded: usize, failed: usize },
    /// Every item failed.
    Failure { failed: usize },
}

impl BulkReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// The failed items with their errors, in request order.
    pub fn failures(&self) -> impl Iterator<Item = (&ItemId, &ApiError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.id, e)))
    }

    /// Collapse per-item results into the three-way summary.
    pub fn outcome(&self) -> BulkOutcome {
        let succeeded = self.succeeded();
        let failed = self.failed();
        if failed == 0 {
            BulkOutcome::Success { count: succeeded }
        } else if succeeded == 0 {
            BulkOutcome::Failure { failed }
        } else {
            BulkOutcome::Partial { succeeded, failed }
        }
    }
}

/// Run `op` for every id concurrently and collect per-item outcomes.
///
/// Outcomes come back in the order the ids were given, regardless of
/// completion order.
pub async fn fan_out<F, Fut>(ids: Vec<ItemId>, op: F) -> BulkReport
where
    F: Fn(ItemId) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let futures = ids.iter().cloned().map(&op);
    let results = join_all(futures).await;
    let outcomes = ids
        .into_iter()
        .zip(results)
        .map(|(id, result)| ItemOutcome { id, result })
        .collect();
    BulkReport { outcomes }
}
