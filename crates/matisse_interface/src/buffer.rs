//! In-memory editor host.

use crate::{ContentChanged, EditorHost};
use async_trait::async_trait;
use matisse_core::{image_embed, LocalReference};
use matisse_error::MatisseResult;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Default)]
struct BufferState {
    content: String,
    cursor: usize,
    revision: u64,
    subscribers: Vec<UnboundedSender<ContentChanged>>,
}

impl BufferState {
    /// Emit one notification per mutation, under the lock, so delivery order
    /// matches mutation order.
    fn notify(&mut self) {
        self.revision += 1;
        let event = ContentChanged::new(self.content.clone(), self.revision);
        self.subscribers
            .retain(|sender| sender.send(event.clone()).is_ok());
    }
}

/// Minimal in-memory editor host.
///
/// Holds the serialized document as a plain string with the cursor tracked as
/// a byte offset. Stands in for a real editing engine in tests and demos;
/// every mutation emits a [`ContentChanged`] notification carrying the
/// updated content.
#[derive(Debug, Clone, Default)]
pub struct BufferEditor {
    state: Arc<Mutex<BufferState>>,
}

impl BufferEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor pre-loaded with content, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.len();
        Self {
            state: Arc::new(Mutex::new(BufferState {
                content,
                cursor,
                revision: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Type text at the cursor, as a user edit would.
    pub fn type_text(&self, text: &str) {
        let mut state = self.state.lock().expect("buffer lock poisoned");
        let cursor = state.cursor;
        state.content.insert_str(cursor, text);
        state.cursor += text.len();
        state.notify();
    }

    /// Current revision counter (0 until the first mutation).
    pub fn revision(&self) -> u64 {
        self.state.lock().expect("buffer lock poisoned").revision
    }
}

#[async_trait]
impl EditorHost for BufferEditor {
    async fn serialized_content(&self) -> MatisseResult<String> {
        let state = self.state.lock().expect("buffer lock poisoned");
        Ok(state.content.clone())
    }

    async fn set_serialized_content(&self, content: &str) -> MatisseResult<()> {
        let mut state = self.state.lock().expect("buffer lock poisoned");
        state.content = content.to_string();
        state.cursor = state.content.len();
        state.notify();
        Ok(())
    }

    async fn insert_asset_at_cursor(&self, reference: &LocalReference) -> MatisseResult<()> {
        let embed = image_embed(reference);
        let mut state = self.state.lock().expect("buffer lock poisoned");
        let cursor = state.cursor;
        state.content.insert_str(cursor, &embed);
        state.cursor += embed.len();
        tracing::debug!(id = %reference.id(), cursor = state.cursor, "Inserted asset embed");
        state.notify();
        Ok(())
    }

    fn subscribe(&self) -> UnboundedReceiver<ContentChanged> {
        let (sender, receiver) = unbounded_channel();
        let mut state = self.state.lock().expect("buffer lock poisoned");
        state.subscribers.push(sender);
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_appends_embed_and_notifies() {
        let editor = BufferEditor::with_content("<p>hello</p>");
        let mut events = editor.subscribe();

        let reference = LocalReference::mint("image/png", 8);
        editor.insert_asset_at_cursor(&reference).await.unwrap();

        let content = editor.serialized_content().await.unwrap();
        assert!(content.contains(reference.id()));

        let event = events.try_recv().unwrap();
        assert_eq!(event.content(), &content);
        assert_eq!(*event.revision(), 1);
    }

    #[tokio::test]
    async fn test_notifications_arrive_in_mutation_order() {
        let editor = BufferEditor::new();
        let mut events = editor.subscribe();

        editor.type_text("one");
        editor.type_text(" two");
        editor.set_serialized_content("replaced").await.unwrap();

        let revisions: Vec<u64> = [
            events.try_recv().unwrap(),
            events.try_recv().unwrap(),
            events.try_recv().unwrap(),
        ]
        .iter()
        .map(|e| *e.revision())
        .collect();
        assert_eq!(revisions, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_each_subscriber_gets_every_event() {
        let editor = BufferEditor::new();
        let mut first = editor.subscribe();
        let mut second = editor.subscribe();

        editor.type_text("shared");

        assert_eq!(first.try_recv().unwrap(), second.try_recv().unwrap());
    }
}
