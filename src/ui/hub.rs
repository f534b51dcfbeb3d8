// ABOUTME: Conversation event hub fanning render instructions out to subscribed renderers
// ABOUTME: One broadcast stream per conversation handle with activity tracking and cleanup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use crate::constants::defaults;
use crate::errors::DispatchError;

use super::dispatcher::UiEventSink;
use super::instruction::UiEvent;

/// Conversation stream metadata
#[derive(Debug, Clone)]
pub struct ConversationMetadata {
    /// When the stream was registered
    pub created_at: DateTime<Utc>,
    /// Last successful dispatch or registration
    pub last_activity: DateTime<Utc>,
    /// Events accepted so far
    pub events_sent: u64,
}

/// Routes render instructions to the renderers of each conversation.
///
/// Renderers call [`UiEventHub::register_conversation`] once and then read
/// every event for that conversation, from any tool, in dispatch order.
#[derive(Clone)]
pub struct UiEventHub {
    streams: Arc<RwLock<HashMap<String, broadcast::Sender<UiEvent>>>>,
    metadata: Arc<RwLock<HashMap<String, ConversationMetadata>>>,
    buffer_size: usize,
}

impl UiEventHub {
    /// Create a hub whose streams buffer `buffer_size` events per receiver
    #[must_use]
    pub fn new(buffer_size: usize) -> Self {
        Self {
            streams: Arc::new(RwLock::new(HashMap::new())),
            metadata: Arc::new(RwLock::new(HashMap::new())),
            buffer_size: buffer_size.max(1),
        }
    }

    /// Subscribe to a conversation, opening its stream if needed
    pub async fn register_conversation(
        &self,
        conversation: impl Into<String>,
    ) -> broadcast::Receiver<UiEvent> {
        let conversation = conversation.into();
        let receiver = {
            let mut streams = self.streams.write().await;
            streams
                .entry(conversation.clone())
                .or_insert_with(|| broadcast::channel(self.buffer_size).0)
                .subscribe()
        };

        let now = Utc::now();
        {
            let mut metadata = self.metadata.write().await;
            metadata
                .entry(conversation.clone())
                .and_modify(|m| m.last_activity = now)
                .or_insert(ConversationMetadata {
                    created_at: now,
                    last_activity: now,
                    events_sent: 0,
                });
        }

        info!(conversation = %conversation, "Registered conversation stream");
        receiver
    }

    /// Close a conversation stream. Pending receivers see the stream end.
    pub async fn unregister_conversation(&self, conversation: &str) {
        let removed = {
            let mut streams = self.streams.write().await;
            streams.remove(conversation).is_some()
        };
        {
            let mut metadata = self.metadata.write().await;
            metadata.remove(conversation);
        }

        if removed {
            info!(conversation = %conversation, "Unregistered conversation stream");
        }
    }

    /// Number of open conversation streams
    pub async fn active_conversations(&self) -> usize {
        self.streams.read().await.len()
    }

    /// Whether the conversation has at least one live receiver
    pub async fn has_subscribers(&self, conversation: &str) -> bool {
        self.streams
            .read()
            .await
            .get(conversation)
            .is_some_and(|sender| sender.receiver_count() > 0)
    }

    /// Metadata for a conversation, if open
    pub async fn conversation_metadata(&self, conversation: &str) -> Option<ConversationMetadata> {
        self.metadata.read().await.get(conversation).cloned()
    }

    /// Close every stream idle for longer than `max_idle`, returning how many were closed
    pub async fn cleanup_inactive_conversations(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let stale: Vec<String> = {
            let metadata = self.metadata.read().await;
            metadata
                .iter()
                .filter(|(_, m)| m.last_activity < cutoff)
                .map(|(conversation, _)| conversation.clone())
                .collect()
        };

        for conversation in &stale {
            self.unregister_conversation(conversation).await;
        }

        if !stale.is_empty() {
            info!(closed = stale.len(), "Cleaned up inactive conversation streams");
        }
        stale.len()
    }
}

impl Default for UiEventHub {
    fn default() -> Self {
        Self::new(defaults::EVENT_BUFFER_SIZE)
    }
}

#[async_trait]
impl UiEventSink for UiEventHub {
    async fn dispatch(&self, event: UiEvent) -> Result<(), DispatchError> {
        let conversation = event.conversation.clone();
        {
            let streams = self.streams.read().await;
            let Some(sender) = streams.get(&conversation) else {
                return Err(DispatchError::conversation_closed(conversation));
            };

            let channel = event.name.clone();
            let sequence = event.sequence;
            sender
                .send(event)
                .map_err(|_| DispatchError::no_subscribers(&conversation, channel))?;
            debug!(conversation = %conversation, sequence, "Delivered UI event");
        }

        {
            let mut metadata = self.metadata.write().await;
            if let Some(m) = metadata.get_mut(&conversation) {
                m.last_activity = Utc::now();
                m.events_sent += 1;
            }
        }

        Ok(())
    }
}
