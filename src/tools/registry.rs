// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tool registration and dispatch
//!
//! Mirrors the host's activation lifecycle: tools are registered, then
//! activated by name. Only active tools are advertised and callable.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::messages;
use super::{Tool, ToolDefinition};

/// Registry errors
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    /// No tool registered under this name
    #[error("Tool not registered: {0}")]
    NotRegistered(String),
}

/// A tool invocation as emitted by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Registered tools and their activation state
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
    active: BTreeSet<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    ///
    /// Replacing keeps the activation state of the name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Option<Arc<dyn Tool>> {
        let name = tool.name().to_string();
        debug!("Registering tool: {}", name);
        self.tools.insert(name, tool)
    }

    /// Activate a registered tool
    pub fn activate(&mut self, name: &str) -> Result<(), ToolError> {
        if !self.tools.contains_key(name) {
            return Err(ToolError::NotRegistered(name.to_string()));
        }
        if self.active.insert(name.to_string()) {
            info!("[{}] tool activated", name);
        }
        Ok(())
    }

    /// Deactivate a tool; returns whether it was active
    pub fn deactivate(&mut self, name: &str) -> bool {
        self.active.remove(name)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    /// Look up an active tool
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        if !self.is_active(name) {
            return None;
        }
        self.tools.get(name).cloned()
    }

    /// Names of all registered tools, sorted
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Definitions of active tools, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .filter(|(name, _)| self.active.contains(name.as_str()))
            .map(|(_, tool)| tool.definition())
            .collect()
    }

    /// Invoke an active tool
    ///
    /// `arguments` is either the bare string argument or an object holding it
    /// under the tool's argument name. Problems become messages.
    pub async fn invoke(&self, name: &str, arguments: &Value) -> String {
        let Some(tool) = self.get(name) else {
            return messages::unknown_tool(name);
        };

        let arg = match arguments {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map.get(tool.argument()).and_then(Value::as_str),
            _ => None,
        };

        match arg {
            Some(arg) => tool.call(arg).await,
            None => messages::missing_argument(tool.argument()),
        }
    }

    /// Invoke several tool calls concurrently, answers in call order
    pub async fn invoke_many(&self, calls: &[ToolCall]) -> Vec<String> {
        join_all(
            calls
                .iter()
                .map(|call| self.invoke(&call.name, &call.arguments)),
        )
        .await
    }
}
