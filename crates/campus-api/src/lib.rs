//! Async client for the campus asset-management REST backend.
//!
//! Everything the backend returns rides in a `{success, data, message}`
//! envelope; this crate is the single place that knows about it:
//!
//! - **[`ApiClient`]** — `reqwest` wrapper owning URL construction,
//!   token auth headers, and envelope unwrapping. Endpoint methods for
//!   each resource live in [`resources`] as inherent impls.
//! - **Shape normalization** ([`envelope`]) — list `data` arrives either
//!   as a bare array or a `{results, total_pages, total_count,
//!   current_page}` object; both normalize to [`ListPayload`] before
//!   anything downstream sees them. Error `message` values (strings,
//!   arrays, or per-field objects) flatten to one display string.
//! - **[`Session`]** — explicit login/logout lifecycle; the token is a
//!   value passed around, never ambient global state.

pub mod client;
pub mod envelope;
pub mod error;
pub mod model;
pub mod resources;
pub mod session;

pub use client::{ApiClient, ListQuery};
pub use envelope::{ListPayload, PageInfo, normalize_message};
pub use error::Error;
pub use model::ItemId;
pub use resources::{Account, Device, Equipment, EquipmentStatus, IpAssignment, Role};
pub use session::Session;
