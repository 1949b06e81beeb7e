// ── Resource sources ──
//
// One [`ListSource`] per backend resource, mapping the generic bulk
// actions onto the concrete endpoints. Actions a resource has no
// endpoint for are rejected as unsupported rather than silently
// dropped.

use std::sync::Arc;

use campus_api::{
    Account, ApiClient, Device, Equipment, Error as ApiError, IpAssignment, ItemId, ListPayload,
    ListQuery,
};

use crate::bulk::BulkAction;
use crate::list::ListSource;

/// Devices screen backend.
#[derive(Clone)]
pub struct DeviceSource {
    client: Arc<ApiClient>,
}

impl DeviceSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ListSource for DeviceSource {
    type Item = Device;

    async fn fetch(&self, query: &ListQuery) -> Result<ListPayload<Device>, ApiError> {
        self.client.list_devices(query).await
    }

    async fn apply(&self, id: &ItemId, action: &BulkAction) -> Result<(), ApiError> {
        match action {
            BulkAction::Delete => self.client.delete_device(id).await,
            BulkAction::SetActive(active) => {
                self.client.set_device_active(id, *active).await.map(|_| ())
            }
            BulkAction::SetBlacklisted(_) | BulkAction::SetStatus { .. } => {
                Err(ApiError::Unsupported("action not available for devices"))
            }
        }
    }
}

/// Equipment screen backend.
#[derive(Clone)]
pub struct EquipmentSource {
    client: Arc<ApiClient>,
}

impl EquipmentSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ListSource for EquipmentSource {
    type Item = Equipment;

    async fn fetch(&self, query: &ListQuery) -> Result<ListPayload<Equipment>, ApiError> {
        self.client.list_equipment(query).await
    }

    async fn apply(&self, id: &ItemId, action: &BulkAction) -> Result<(), ApiError> {
        match action {
            BulkAction::Delete => self.client.delete_equipment(id).await,
            BulkAction::SetStatus { status, renter } => self
                .client
                .set_equipment_status(id, *status, renter.as_deref())
                .await
                .map(|_| ()),
            BulkAction::SetActive(_) | BulkAction::SetBlacklisted(_) => {
                Err(ApiError::Unsupported("action not available for equipment"))
            }
        }
    }
}

/// User accounts screen backend.
#[derive(Clone)]
pub struct AccountSource {
    client: Arc<ApiClient>,
}

impl AccountSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ListSource for AccountSource {
    type Item = Account;

    async fn fetch(&self, query: &ListQuery) -> Result<ListPayload<Account>, ApiError> {
        self.client.list_accounts(query).await
    }

    async fn apply(&self, id: &ItemId, action: &BulkAction) -> Result<(), ApiError> {
        match action {
            BulkAction::Delete => self.client.delete_account(id).await,
            BulkAction::SetActive(active) => {
                self.client.set_account_active(id, *active).await.map(|_| ())
            }
            BulkAction::SetBlacklisted(_) | BulkAction::SetStatus { .. } => {
                Err(ApiError::Unsupported("action not available for accounts"))
            }
        }
    }
}

/// IP assignments screen backend.
#[derive(Clone)]
pub struct IpSource {
    client: Arc<ApiClient>,
}

impl IpSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ListSource for IpSource {
    type Item = IpAssignment;

    async fn fetch(&self, query: &ListQuery) -> Result<ListPayload<IpAssignment>, ApiError> {
        self.client.list_ip_assignments(query).await
    }

    async fn apply(&self, id: &ItemId, action: &BulkAction) -> Result<(), ApiError> {
        match action {
            BulkAction::Delete => self.client.release_ip(id).await,
            BulkAction::SetBlacklisted(blacklisted) => self
                .client
                .set_ip_blacklisted(id, *blacklisted)
                .await
                .map(|_| ()),
            BulkAction::SetActive(_) | BulkAction::SetStatus { .. } => Err(ApiError::Unsupported(
                "action not available for IP assignments",
            )),
        }
    }
}
