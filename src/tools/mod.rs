// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tools exposed to the host's reasoning layer
//!
//! Every tool takes one string argument and answers with text. Failures are
//! rendered as messages, never propagated to the host.

pub mod fetch;
pub mod messages;
pub mod registry;
pub mod search;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub use fetch::SousuoFetchTool;
pub use registry::{ToolCall, ToolError, ToolRegistry};
pub use search::SousuoSearchTool;

/// Name of the search tool
pub const SEARCH_TOOL_NAME: &str = "sousuo_search";

/// Name of the fetch tool
pub const FETCH_TOOL_NAME: &str = "sousuo_fetch";

/// A callable tool
#[async_trait]
pub trait Tool: Send + Sync {
    /// Registered name
    fn name(&self) -> &str;

    /// Description shown to the model
    fn description(&self) -> &str;

    /// Name of the single string argument
    fn argument(&self) -> &str;

    /// Description of the argument
    fn argument_description(&self) -> &str;

    /// Run the tool
    async fn call(&self, arg: &str) -> String;

    /// JSON schema of the arguments object
    fn parameters(&self) -> Value {
        let mut properties = Map::new();
        properties.insert(
            self.argument().to_string(),
            json!({
                "type": "string",
                "description": self.argument_description()
            }),
        );

        json!({
            "type": "object",
            "properties": properties,
            "required": [self.argument()]
        })
    }

    /// Function definition as handed to the model
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Function-calling schema for one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Outcome of probing an optional collaborator at startup
#[derive(Debug)]
pub enum Capability<T> {
    /// Ready to use
    Available(T),
    /// Could not be constructed
    Missing {
        /// Why the probe failed
        reason: String,
    },
}

impl<T> Capability<T> {
    /// Record the result of a probe
    pub fn probe<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Capability::Available(value),
            Err(e) => Capability::Missing {
                reason: e.to_string(),
            },
        }
    }

    /// Borrow the collaborator, or the reason it is missing
    pub fn get(&self) -> Result<&T, &str> {
        match self {
            Capability::Available(value) => Ok(value),
            Capability::Missing { reason } => Err(reason.as_str()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }
}
