//! Tool registry for the viewer.
//!
//! The CLI looks tools up by name here and dispatches JSON arguments to
//! them against a log source.

use std::collections::HashMap;

use lv_log_tools::{LogSource, LogTool};

/// Metadata about a registered tool (used by `lv-viewer tools`).
#[derive(Debug, Clone, serde::Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub schema: serde_json::Value,
}

/// Log tools indexed by name for O(1) dispatch.
pub struct ToolRegistry {
    tools: Vec<Box<dyn LogTool>>,
    /// Map from tool name → index into `tools`.
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build a registry from a tool collection.
    pub fn new(tools: Vec<Box<dyn LogTool>>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| (tool.name().to_string(), i))
            .collect();
        Self { tools, index }
    }

    /// Build with every tool from `lv-log-tools`.
    pub fn with_defaults() -> Self {
        Self::new(lv_log_tools::tools::all_tools())
    }

    /// Look up a tool's index by name.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Execute a tool by name, returning the serialized `ToolResult`.
    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
        source: &dyn LogSource,
    ) -> Result<serde_json::Value, String> {
        let index = self
            .lookup(name)
            .ok_or_else(|| format!("unknown tool: {name}"))?;
        let tool = &self.tools[index];
        tracing::debug!(tool = name, %args, "dispatching tool");
        match tool.execute(args, source).await {
            Ok(result) => serde_json::to_value(result).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// List all registered tools with metadata.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                schema: tool.parameters_schema(),
            })
            .collect()
    }

    /// Total number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
