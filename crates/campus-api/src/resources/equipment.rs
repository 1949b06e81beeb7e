//! Equipment inventory resource: rentable items (projectors, laptops,
//! lab kits) with a lifecycle status.

use serde::{Deserialize, Serialize};
use serde_json::json;
use strum::{Display, EnumString};

use crate::client::{ApiClient, ListQuery};
use crate::envelope::ListPayload;
use crate::error::Error;
use crate::model::ItemId;

/// Equipment lifecycle status as the backend models it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum EquipmentStatus {
    Available,
    Rented,
    Maintenance,
    Retired,
}

/// A rentable inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: ItemId,
    pub name: String,
    pub serial_no: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: EquipmentStatus,
    /// Username of the current renter; only set while `status == Rented`.
    #[serde(default)]
    pub renter: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ApiClient {
    /// List equipment with search and pagination parameters.
    pub async fn list_equipment(&self, query: &ListQuery) -> Result<ListPayload<Equipment>, Error> {
        self.get_list("equipment", query).await
    }

    /// Delete an inventory item.
    pub async fn delete_equipment(&self, id: &ItemId) -> Result<(), Error> {
        self.delete(&format!("equipment/{id}")).await
    }

    /// Change an item's lifecycle status.
    ///
    /// The backend enforces the companion rules (a `RENTED` transition
    /// requires a renter); the client sends whatever it was given and
    /// surfaces the rejection message verbatim.
    pub async fn set_equipment_status(
        &self,
        id: &ItemId,
        status: EquipmentStatus,
        renter: Option<&str>,
    ) -> Result<Equipment, Error> {
        let body = match renter {
            Some(renter) => json!({ "status": status, "renter": renter }),
            None => json!({ "status": status }),
        };
        self.patch(&format!("equipment/{id}"), &body).await
    }
}
