//! List-management core for campus asset tools.
//!
//! Every resource screen — devices, equipment, accounts, IP
//! assignments — is the same machine with a different backend: load a
//! list, search it, page through it, select rows, run bulk actions.
//! This crate implements that machine once:
//!
//! - **[`ListController`]** — owns one screen's state and wires the
//!   pieces below together over a [`ListSource`].
//! - **[`SelectionSet`]** — row selection with shift/ctrl modifier
//!   semantics.
//! - **[`SearchQuery`]** — case-insensitive field filtering, usable
//!   client-side or as server query parameters.
//! - **[`Paginator`]** — page bookkeeping for both server-paginated
//!   and client-sliced lists.
//! - **[`BulkAction`]** / [`fan_out`] — concurrent fan-out of one
//!   action across a selection with per-item outcomes.
//! - **[`ToastQueue`]** — transient notifications with self-expiry.

pub mod bulk;
pub mod error;
pub mod filter;
pub mod format;
pub mod list;
pub mod model;
pub mod notify;
pub mod pagination;
pub mod selection;
pub mod sources;

pub use bulk::{BulkAction, BulkOutcome, BulkReport, ItemOutcome, fan_out};
pub use error::CoreError;
pub use filter::{SearchMode, SearchQuery, filter};
pub use list::{ListController, ListSource};
pub use model::{ListEntry, Searchable};
pub use notify::{DEFAULT_TTL, Severity, Toast, ToastId, ToastQueue};
pub use pagination::Paginator;
pub use selection::{Modifiers, SelectionSet};
pub use sources::{AccountSource, DeviceSource, EquipmentSource, IpSource};
