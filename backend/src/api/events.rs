//! Store change streaming via Server-Sent Events (SSE).
//!
//! Each write to the document store is forwarded to connected browsers so
//! open pages can reload the lists they show.

use std::{convert::Infallible, time::Duration};

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;

use crate::store::StoreEvent;

/// Interval between keep-alive comments
const KEEP_ALIVE_SECS: u64 = 15;

fn to_event(change: &StoreEvent) -> Option<Event> {
    let json = serde_json::to_string(change).ok()?;
    Some(Event::default().event("change").data(json))
}

/// SSE response relaying every store change from `rx`
pub fn change_stream(
    rx: broadcast::Receiver<StoreEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Lagged receivers skip what they missed; the next change still arrives
    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(change) => to_event(&change).map(Ok),
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(KEEP_ALIVE_SECS))
            .text("keep-alive"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ChangeKind, StorageKey};

    #[test]
    fn test_change_becomes_event() {
        let change = StoreEvent::new(StorageKey::Leads, ChangeKind::Saved);
        assert!(to_event(&change).is_some());
    }

    #[tokio::test]
    async fn test_stream_relays_changes() {
        let (tx, rx) = broadcast::channel(4);
        let mut stream = BroadcastStream::new(rx);
        tx.send(StoreEvent::new(StorageKey::Blogs, ChangeKind::Removed)).unwrap();

        let received = stream.next().await.unwrap().unwrap();
        assert_eq!(received.key, StorageKey::Blogs);
        assert_eq!(received.change, ChangeKind::Removed);
        // The SSE wrapper builds without a running server
        let _ = change_stream(tx.subscribe());
    }
}
