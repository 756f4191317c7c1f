//! Live store changes using Server-Sent Events (SSE).
//!
//! Connects to the backend's `/api/events` endpoint. Each `change` event
//! bumps a revision counter that list resources depend on, so open pages
//! refetch after an admin edit.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::types::StoreEvent;
use crate::BACKEND_URL;

/// Monotonic counter bumped on every store change.
#[derive(Clone, Copy)]
pub struct StoreRevision(pub RwSignal<u64>);

impl StoreRevision {
    /// Current revision, tracked by the calling resource.
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// Mark local writes so this tab refetches without waiting for SSE.
    pub fn bump(&self) {
        self.0.update(|r| *r += 1);
    }
}

/// Revision provided by [`init_store_events`].
pub fn use_store_revision() -> StoreRevision {
    use_context::<StoreRevision>().unwrap_or_else(|| StoreRevision(create_rw_signal(0)))
}

/// Parse the `data` of a `change` event.
pub fn parse_store_event(json: &str) -> Option<StoreEvent> {
    serde_json::from_str(json).ok()
}

/// Start the SSE connection and provide [`StoreRevision`] as context.
/// Should be called ONCE at app startup.
pub fn init_store_events() -> StoreRevision {
    let revision = StoreRevision(create_rw_signal(0));
    provide_context(revision);

    let sse_url = format!("{}/api/events", BACKEND_URL);
    let event_source = match EventSource::new(&sse_url) {
        Ok(es) => es,
        Err(e) => {
            log::error!("Failed to create EventSource: {:?}", e);
            return revision;
        }
    };

    let on_change = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Some(change) = event.data().as_string().as_deref().and_then(parse_store_event) {
            log::debug!("{} {} at {}", change.key, change.change, change.at);
            revision.bump();
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Err(e) =
        event_source.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
    {
        log::error!("Failed to listen for store changes: {:?}", e);
    }
    on_change.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::warn!("SSE connection error - will auto-reconnect");
    }) as Box<dyn FnMut(web_sys::Event)>);
    event_source.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    // Lives for the app's lifetime
    std::mem::forget(event_source);

    log::info!("📡 Store change stream initialized");
    revision
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_store_event() {
        let change = parse_store_event(
            r#"{"key":"marketplaceLeads","change":"saved","at":"2025-03-12T10:15:00+05:30"}"#,
        )
        .unwrap();
        assert_eq!(change.key, "marketplaceLeads");
        assert_eq!(change.change, "saved");
        assert!(parse_store_event("keep-alive").is_none());
    }
}
