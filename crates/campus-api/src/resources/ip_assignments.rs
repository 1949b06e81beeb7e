//! IP assignment resource: the lease table mapping MACs to addresses.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{ApiClient, ListQuery};
use crate::envelope::ListPayload;
use crate::error::Error;
use crate::model::ItemId;

/// One IP lease row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAssignment {
    pub id: ItemId,
    pub ip: String,
    pub mac: String,
    #[serde(default)]
    pub hostname: Option<String>,
    /// Username the lease is assigned to, when known.
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub blacklisted: bool,
    #[serde(default)]
    pub lease_expires_at: Option<String>,
}

impl ApiClient {
    /// List IP assignments with search and pagination parameters.
    ///
    /// This endpoint is non-paginated on older backends and returns a
    /// bare array; the normalized payload then carries `page: None`.
    pub async fn list_ip_assignments(
        &self,
        query: &ListQuery,
    ) -> Result<ListPayload<IpAssignment>, Error> {
        self.get_list("ip-assignments", query).await
    }

    /// Release a lease (deletes the assignment row).
    pub async fn release_ip(&self, id: &ItemId) -> Result<(), Error> {
        self.delete(&format!("ip-assignments/{id}")).await
    }

    /// Add or remove an address from the blacklist.
    pub async fn set_ip_blacklisted(
        &self,
        id: &ItemId,
        blacklisted: bool,
    ) -> Result<IpAssignment, Error> {
        self.patch(
            &format!("ip-assignments/{id}"),
            &json!({ "blacklisted": blacklisted }),
        )
        .await
    }
}
