// ── Core identity type ──
//
// ItemId is the foundation of every resource type. The backend uses
// integer primary keys for most resources and opaque strings for a few
// (IP assignments keyed by address); this unifies both behind a single
// ergonomic interface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical identifier for any backend resource.
///
/// Transparently wraps either an integer primary key or an opaque
/// string identifier. Consumers never care which; identifiers are
/// unique within one loaded list snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl ItemId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        match s.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Text(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn item_id_from_numeric_string() {
        let id = ItemId::from("42");
        assert_eq!(id.as_int(), Some(42));
    }

    #[test]
    fn item_id_from_opaque_string() {
        let id = ItemId::from("10.3.7.21");
        assert_eq!(id.as_text(), Some("10.3.7.21"));
    }

    #[test]
    fn item_id_display() {
        assert_eq!(ItemId::Int(7).to_string(), "7");
        assert_eq!(ItemId::Text("ip-7".into()).to_string(), "ip-7");
    }

    #[test]
    fn item_id_deserializes_untagged() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"[3, "10.0.0.1"]"#).unwrap();
        assert_eq!(ids, vec![ItemId::Int(3), ItemId::Text("10.0.0.1".into())]);
    }
}
