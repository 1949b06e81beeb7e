//! Typed resource models and endpoint methods.
//!
//! Each module defines one resource's wire model plus the [`ApiClient`]
//! inherent methods for it: list (search + pagination parameters),
//! delete, and the per-resource mutations the bulk actions use.
//!
//! [`ApiClient`]: crate::ApiClient

pub mod devices;
pub mod equipment;
pub mod ip_assignments;
pub mod users;

pub use devices::Device;
pub use equipment::{Equipment, EquipmentStatus};
pub use ip_assignments::IpAssignment;
pub use users::{Account, Role};
