//! User account resource.

use serde::{Deserialize, Serialize};
use serde_json::json;
use strum::{Display, EnumString};

use crate::client::{ApiClient, ListQuery};
use crate::envelope::ListPayload;
use crate::error::Error;
use crate::model::ItemId;

/// Account role, as the backend models permissions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: ItemId,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
    /// Set while the account still uses its provisioning password.
    /// A disagreement between a locally held value and a re-fetched one
    /// is a backend consistency fault and is surfaced as an error, never
    /// silently papered over.
    #[serde(default)]
    pub is_initial_password: bool,
}

impl Account {
    /// Whether this account may perform administrative bulk actions.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl ApiClient {
    /// List accounts with search and pagination parameters.
    pub async fn list_accounts(&self, query: &ListQuery) -> Result<ListPayload<Account>, Error> {
        self.get_list("users", query).await
    }

    /// Delete an account.
    pub async fn delete_account(&self, id: &ItemId) -> Result<(), Error> {
        self.delete(&format!("users/{id}")).await
    }

    /// Activate or deactivate an account.
    pub async fn set_account_active(&self, id: &ItemId, active: bool) -> Result<Account, Error> {
        self.patch(&format!("users/{id}"), &json!({ "is_active": active }))
            .await
    }
}
