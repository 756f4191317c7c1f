//! Change notifications for the document store.
//!
//! Every write or removal is broadcast so the frontend can refresh views
//! that depend on a key, the way a browser `storage` event would.

use serde::{Deserialize, Serialize};

use super::StorageKey;

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Saved,
    Removed,
}

/// A single change notification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEvent {
    /// Storage key that changed
    pub key: StorageKey,
    /// Kind of change
    pub change: ChangeKind,
    /// RFC 3339 timestamp
    pub at: String,
}

impl StoreEvent {
    pub fn new(key: StorageKey, change: ChangeKind) -> Self {
        Self {
            key,
            change,
            at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let event = StoreEvent::new(StorageKey::Leads, ChangeKind::Saved);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["key"], "marketplaceLeads");
        assert_eq!(json["change"], "saved");
        assert!(json["at"].as_str().is_some());
    }
}
