// ── Response envelope & shape normalization ──
//
// Every backend response is wrapped in `{success, data?, message?}`.
// List endpoints return `data` as either a bare array or a paginated
// `{results, total_pages, total_count, current_page}` object. This
// module is the single normalization boundary: nothing downstream
// branches on wire shape.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// The `{success, data, message}` wrapper used by every endpoint.
///
/// `message` is kept as a raw JSON value because the backend sometimes
/// nests per-field validation errors inside it; [`normalize_message`]
/// flattens whatever arrives into one display string.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

fn none<T>() -> Option<T> {
    None
}

/// Wire shape of a list payload: paginated object or bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListData<T> {
    Paginated {
        results: Vec<T>,
        total_pages: usize,
        total_count: usize,
        current_page: usize,
    },
    Plain(Vec<T>),
}

/// Server-reported pagination counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Canonical, normalized list payload.
///
/// `page: None` means the endpoint is non-paginated and the caller
/// must paginate client-side over the full `items` set.
#[derive(Debug, Clone)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    pub page: Option<PageInfo>,
}

impl<T> From<ListData<T>> for ListPayload<T> {
    fn from(data: ListData<T>) -> Self {
        match data {
            ListData::Paginated {
                results,
                total_pages,
                total_count,
                current_page,
            } => Self {
                items: results,
                page: Some(PageInfo {
                    current_page,
                    total_pages,
                    total_count,
                }),
            },
            ListData::Plain(items) => Self { items, page: None },
        }
    }
}

impl<T: DeserializeOwned> ListPayload<T> {
    /// Parse a raw `data` value into the canonical shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let data: ListData<T> = serde_json::from_value(value)?;
        Ok(data.into())
    }
}

/// Flatten a backend `message` value into one human-readable string.
///
/// Handles the three shapes the backend actually emits: a plain string,
/// an array of strings, and a `{field: [messages]}` validation object.
/// Anything else falls back to compact JSON so the user still sees
/// something actionable.
pub fn normalize_message(message: Option<&serde_json::Value>) -> String {
    match message {
        None | Some(serde_json::Value::Null) => "request failed".to_owned(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(parts)) => {
            let flat: Vec<String> = parts.iter().map(value_to_text).collect();
            flat.join("; ")
        }
        Some(serde_json::Value::Object(fields)) => {
            let flat: Vec<String> = fields
                .iter()
                .map(|(field, v)| format!("{field}: {}", value_to_text(v)))
                .collect();
            flat.join("; ")
        }
        Some(other) => value_to_text(other),
    }
}

fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(parts) => parts
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paginated_data_normalizes_with_page_info() {
        let raw = json!({
            "results": [{"id": 1}, {"id": 2}],
            "total_pages": 5,
            "total_count": 42,
            "current_page": 2
        });
        let payload: ListPayload<serde_json::Value> = ListPayload::from_value(raw).unwrap();
        assert_eq!(payload.items.len(), 2);
        let page = payload.page.unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_count, 42);
    }

    #[test]
    fn bare_array_normalizes_without_page_info() {
        let raw = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let payload: ListPayload<serde_json::Value> = ListPayload::from_value(raw).unwrap();
        assert_eq!(payload.items.len(), 3);
        assert!(payload.page.is_none());
    }

    #[test]
    fn message_string_passes_through() {
        let msg = json!("device is already active");
        assert_eq!(normalize_message(Some(&msg)), "device is already active");
    }

    #[test]
    fn message_field_object_flattens() {
        let msg = json!({"mac": ["invalid MAC address"], "name": ["required"]});
        let flat = normalize_message(Some(&msg));
        assert!(flat.contains("mac: invalid MAC address"));
        assert!(flat.contains("name: required"));
    }

    #[test]
    fn message_array_joins() {
        let msg = json!(["first problem", "second problem"]);
        assert_eq!(
            normalize_message(Some(&msg)),
            "first problem; second problem"
        );
    }

    #[test]
    fn missing_message_gets_fallback() {
        assert_eq!(normalize_message(None), "request failed");
    }
}
