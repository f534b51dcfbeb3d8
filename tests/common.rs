// ABOUTME: Shared test utilities for generative UI tool integration tests
// ABOUTME: Provides input fixtures and recording, failing, and gated event sinks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `genui_tools`

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use genui_tools::config::GenUiConfig;
use genui_tools::errors::DispatchError;
use genui_tools::tools::{ToolExecutionContext, ToolRegistry};
use genui_tools::ui::{MutationKind, UiEvent, UiEventSink};
use serde_json::{json, Value};
use tokio::sync::Notify;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Input fixtures
// ============================================================================

/// The "Oat Bowl" recipe input
pub fn oat_bowl() -> Value {
    json!({
        "title": "Oat Bowl",
        "ingredients": [{"name": "oats", "amount": 50, "unit": "g"}],
        "steps": [{"step": 1, "description": "boil"}],
        "calories": 200,
        "carbs": 30,
        "fat": 5,
        "fiber": 4,
        "protein": 6,
        "sugar": 2,
        "prepTime": 5,
        "cookTime": 10,
        "servings": 1,
        "tags": ["quick"],
        "imageUrl": "https://example.com/a.jpg",
        "description": "simple"
    })
}

/// A one-badge achievement input with the given progress values
pub fn achievement_input(progress: Option<f64>, max_progress: Option<f64>) -> Value {
    let mut badge = json!({
        "id": "first-5k",
        "title": "First 5K",
        "description": "Completed a 5 km run",
        "icon": "trophy",
        "category": "running",
        "earnedDate": "2025-03-14",
        "level": "gold"
    });
    if let Some(progress) = progress {
        badge["progress"] = json!(progress);
    }
    if let Some(max_progress) = max_progress {
        badge["maxProgress"] = json!(max_progress);
    }
    json!({
        "title": "Spring Season",
        "description": "Badges earned this spring",
        "badges": [badge]
    })
}

/// Registry with every built-in tool on the default channel
pub fn builtin_registry() -> ToolRegistry {
    init_test_logging();
    ToolRegistry::with_builtin_tools(&GenUiConfig::default())
}

/// Fresh invocation context addressed to `conversation`
pub fn context_for(sink: Arc<dyn UiEventSink>, conversation: &str) -> ToolExecutionContext {
    ToolExecutionContext::new(conversation, sink)
}

// ============================================================================
// Sink doubles
// ============================================================================

/// Records every event in dispatch order
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<MutationKind> {
        self.events().iter().map(UiEvent::kind).collect()
    }

    fn record(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl UiEventSink for RecordingSink {
    async fn dispatch(&self, event: UiEvent) -> Result<(), DispatchError> {
        self.record(event);
        Ok(())
    }
}

/// Accepts the first `accept` events, then reports the conversation closed
pub struct FailingSink {
    accept: usize,
    recorded: RecordingSink,
}

impl FailingSink {
    pub fn always() -> Arc<Self> {
        Self::after(0)
    }

    pub fn after(accept: usize) -> Arc<Self> {
        Arc::new(Self {
            accept,
            recorded: RecordingSink::default(),
        })
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.recorded.events()
    }
}

#[async_trait]
impl UiEventSink for FailingSink {
    async fn dispatch(&self, event: UiEvent) -> Result<(), DispatchError> {
        if self.recorded.events().len() >= self.accept {
            return Err(DispatchError::conversation_closed(event.conversation));
        }
        self.recorded.record(event);
        Ok(())
    }
}

/// Accepts the first event immediately and blocks every later one until released
#[derive(Default)]
pub struct GatedSink {
    recorded: RecordingSink,
    gate: Notify,
    first_accepted: Notify,
}

impl GatedSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.recorded.events()
    }

    /// Resolves once the first event has been recorded
    pub async fn wait_first(&self) {
        if self.recorded.events().is_empty() {
            self.first_accepted.notified().await;
        }
    }

    /// Let one blocked dispatch through
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl UiEventSink for GatedSink {
    async fn dispatch(&self, event: UiEvent) -> Result<(), DispatchError> {
        if self.recorded.events().is_empty() {
            self.recorded.record(event);
            self.first_accepted.notify_one();
            return Ok(());
        }
        self.gate.notified().await;
        self.recorded.record(event);
        Ok(())
    }
}
