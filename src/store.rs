//! In-memory session store (non-persistent).
//!
//! Maps a client-chosen session id to its conversation history. Entries
//! expire a fixed TTL after the last write and are evicted lazily on access.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::llm::ChatMessage;

/// Capability set the agent loop needs from session storage.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Fetch the history for a session, or `None` if the session is unknown
    /// or its entry has expired. An empty history is a valid `Some` value.
    async fn get(&self, session_id: &str) -> Option<Vec<ChatMessage>>;

    /// Replace the history for a session, refreshing its TTL.
    async fn set(&self, session_id: &str, history: Vec<ChatMessage>);
}

struct SessionEntry {
    history: Vec<ChatMessage>,
    touched_at: Instant,
}

/// TTL-expiring store backed by a shared map.
#[derive(Clone)]
pub struct InMemoryConversationStore {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl InMemoryConversationStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(session_id) {
                Some(entry) if entry.touched_at.elapsed() < self.ttl => {
                    return Some(entry.history.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Entry exists but has expired; evict it.
        let mut sessions = self.sessions.write().await;
        if let Some(entry) = sessions.get(session_id) {
            if entry.touched_at.elapsed() >= self.ttl {
                sessions.remove(session_id);
                tracing::debug!(session_id, "evicted expired session");
            } else {
                return Some(entry.history.clone());
            }
        }
        None
    }

    async fn set(&self, session_id: &str, history: Vec<ChatMessage>) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            session_id.to_string(),
            SessionEntry {
                history,
                touched_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_session_is_absent() {
        let store = InMemoryConversationStore::new(Duration::from_secs(60));
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn empty_history_is_distinguishable_from_absent() {
        let store = InMemoryConversationStore::new(Duration::from_secs(60));
        store.set("s1", Vec::new()).await;

        let history = store.get("s1").await;
        assert!(matches!(history, Some(h) if h.is_empty()));
    }

    #[tokio::test]
    async fn set_then_get_round_trips_in_order() {
        let store = InMemoryConversationStore::new(Duration::from_secs(60));
        let history = vec![
            ChatMessage::system("instructions"),
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
        ];
        store.set("s1", history.clone()).await;

        let loaded = store.get("s1").await.unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].content.as_deref(), Some("hi"));
        assert_eq!(loaded[2].content.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn expired_entry_reads_as_absent() {
        let store = InMemoryConversationStore::new(Duration::ZERO);
        store.set("s1", vec![ChatMessage::user("hi")]).await;

        assert!(store.get("s1").await.is_none());
        // Eviction actually removed the entry.
        assert!(store.sessions.read().await.get("s1").is_none());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = InMemoryConversationStore::new(Duration::from_secs(60));
        store.set("a", vec![ChatMessage::user("from a")]).await;
        store.set("b", vec![ChatMessage::user("from b")]).await;

        assert_eq!(
            store.get("a").await.unwrap()[0].content.as_deref(),
            Some("from a")
        );
        assert_eq!(
            store.get("b").await.unwrap()[0].content.as_deref(),
            Some("from b")
        );
    }

    #[tokio::test]
    async fn set_overwrites_whole_history() {
        let store = InMemoryConversationStore::new(Duration::from_secs(60));
        store.set("s1", vec![ChatMessage::user("first")]).await;
        store
            .set(
                "s1",
                vec![ChatMessage::user("first"), ChatMessage::assistant("second")],
            )
            .await;

        let loaded = store.get("s1").await.unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
