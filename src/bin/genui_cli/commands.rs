// ABOUTME: genui-cli command implementations for listing and invoking tools
// ABOUTME: Invocation streams render instructions from the hub as JSON lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use genui_tools::config::GenUiConfig;
use genui_tools::errors::{AppError, AppResult, DispatchError};
use genui_tools::tools::{ToolExecutionContext, ToolRegistry};
use genui_tools::ui::{UiEvent, UiEventHub};
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Print every tool descriptor
pub fn list(config: &GenUiConfig) -> AppResult<()> {
    let registry = ToolRegistry::with_builtin_tools(config);
    let descriptors = registry.descriptors();
    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}

/// Invoke `tool` with JSON from `input` (or stdin) and print its event stream
pub async fn invoke(
    config: &GenUiConfig,
    tool: &str,
    input: Option<&Path>,
    conversation: &str,
) -> AppResult<()> {
    let raw = read_input(input).await?;
    let payload: Value = serde_json::from_str(&raw)
        .map_err(|e| AppError::invalid_input(format!("Input is not valid JSON: {e}")))?;

    let registry = ToolRegistry::with_builtin_tools(config);
    let hub = UiEventHub::new(config.event_buffer_size);
    let mut events = hub.register_conversation(conversation).await;

    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match encode_event(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => warn!(sequence = event.sequence, "Dropped UI event: {}", e),
                },
                Err(RecvError::Lagged(skipped)) => warn!("Skipped {} UI events", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let context = ToolExecutionContext::new(conversation, Arc::new(hub.clone()));
    debug!(invocation_id = %context.invocation_id, "Invoking tool '{}'", tool);
    let outcome = registry.invoke(tool, payload, &context).await;

    // Removing the stream drops its sender, so the printer stops once drained
    hub.unregister_conversation(conversation).await;
    if let Err(e) = printer.await {
        warn!("Event printer task failed: {}", e);
    }

    let terminal = outcome.map_err(AppError::from)?;
    println!("{terminal}");
    Ok(())
}

/// One JSON line per render instruction
fn encode_event(event: &UiEvent) -> Result<String, DispatchError> {
    Ok(serde_json::to_string(event)?)
}

async fn read_input(input: Option<&Path>) -> AppResult<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("Failed to read {}: {e}", path.display()))
        }),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .map_err(|e| AppError::invalid_input(format!("Failed to read stdin: {e}")))?;
            Ok(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genui_tools::ui::{LoadingView, MutationKind, RenderPayload, UiInstruction};
    use uuid::Uuid;

    #[test]
    fn test_event_encodes_as_single_line() {
        let event = UiEvent {
            name: "custom_ui_yield".to_owned(),
            conversation: "cli".to_owned(),
            invocation_id: Uuid::new_v4(),
            slot_id: Uuid::new_v4(),
            sequence: 0,
            data: UiInstruction::new(
                MutationKind::Append,
                RenderPayload::loading(LoadingView::Recipe),
            ),
        };

        let line = encode_event(&event).unwrap();

        assert!(!line.contains('\n'));
        let decoded: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(decoded["data"]["output"]["type"], "append");
    }
}
