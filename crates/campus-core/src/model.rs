// ── List-item traits ──
//
// The core never knows concrete resource types; it works against two
// small traits. Implementations for the backend's resources live here
// so every screen gets them for free.

use std::borrow::Cow;

use campus_api::{Account, Device, Equipment, IpAssignment, ItemId};

/// An item that can appear in a managed list: it has a stable identity
/// within one loaded snapshot.
pub trait ListEntry {
    fn id(&self) -> ItemId;
}

/// An item with a fixed set of searchable string fields.
///
/// `search_value` returns `None` both for fields this item doesn't
/// carry a value for and for field names outside the configured set;
/// an unknown field therefore matches nothing.
pub trait Searchable {
    /// The configured field names, in display order.
    fn search_fields() -> &'static [&'static str];

    /// The string value of one field, if present.
    fn search_value(&self, field: &str) -> Option<Cow<'_, str>>;
}

// ── Device ──────────────────────────────────────────────────────────

impl ListEntry for Device {
    fn id(&self) -> ItemId {
        self.id.clone()
    }
}

impl Searchable for Device {
    fn search_fields() -> &'static [&'static str] {
        &["name", "mac", "ip", "location", "owner"]
    }

    fn search_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "mac" => Some(Cow::Borrowed(self.mac.as_str())),
            "ip" => self.ip.as_deref().map(Cow::Borrowed),
            "location" => self.location.as_deref().map(Cow::Borrowed),
            "owner" => self.owner.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

// ── Equipment ───────────────────────────────────────────────────────

impl ListEntry for Equipment {
    fn id(&self) -> ItemId {
        self.id.clone()
    }
}

impl Searchable for Equipment {
    fn search_fields() -> &'static [&'static str] {
        &["name", "serial_no", "category", "renter"]
    }

    fn search_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "serial_no" => Some(Cow::Borrowed(self.serial_no.as_str())),
            "category" => self.category.as_deref().map(Cow::Borrowed),
            "renter" => self.renter.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

// ── Account ─────────────────────────────────────────────────────────

impl ListEntry for Account {
    fn id(&self) -> ItemId {
        self.id.clone()
    }
}

impl Searchable for Account {
    fn search_fields() -> &'static [&'static str] {
        &["username", "display_name", "email"]
    }

    fn search_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "username" => Some(Cow::Borrowed(self.username.as_str())),
            "display_name" => self.display_name.as_deref().map(Cow::Borrowed),
            "email" => self.email.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

// ── IpAssignment ────────────────────────────────────────────────────

impl ListEntry for IpAssignment {
    fn id(&self) -> ItemId {
        self.id.clone()
    }
}

impl Searchable for IpAssignment {
    fn search_fields() -> &'static [&'static str] {
        &["ip", "mac", "hostname", "assigned_to"]
    }

    fn search_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "ip" => Some(Cow::Borrowed(self.ip.as_str())),
            "mac" => Some(Cow::Borrowed(self.mac.as_str())),
            "hostname" => self.hostname.as_deref().map(Cow::Borrowed),
            "assigned_to" => self.assigned_to.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}
