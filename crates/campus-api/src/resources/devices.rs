//! Network device resource: registered machines with a MAC and an
//! optional leased IP.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{ApiClient, ListQuery};
use crate::envelope::ListPayload;
use crate::error::Error;
use crate::model::ItemId;

/// A registered network device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: ItemId,
    pub name: String,
    pub mac: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Username of the owning account, when assigned.
    #[serde(default)]
    pub owner: Option<String>,
    pub is_active: bool,
    /// Backend timestamp, kept as the raw wire string; display
    /// formatting lives in `campus-core::format`.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ApiClient {
    /// List devices with search and pagination parameters.
    pub async fn list_devices(&self, query: &ListQuery) -> Result<ListPayload<Device>, Error> {
        self.get_list("devices", query).await
    }

    /// Delete a device registration.
    pub async fn delete_device(&self, id: &ItemId) -> Result<(), Error> {
        self.delete(&format!("devices/{id}")).await
    }

    /// Activate or deactivate a device.
    pub async fn set_device_active(&self, id: &ItemId, active: bool) -> Result<Device, Error> {
        self.patch(&format!("devices/{id}"), &json!({ "is_active": active }))
            .await
    }
}
