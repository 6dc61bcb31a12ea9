//! Tool manager for registering and executing tools

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::tool::{Tool, ToolDefinition, ToolResult};
use crate::Result;

/// Manager for registered tools
///
/// Handles tool registration, removal, retrieval, and execution.
pub struct ToolManager {
    /// Registered tools indexed by name
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolManager {
    /// Create a new empty tool manager
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Remove a tool by name
    ///
    /// Returns the removed tool, or `None` if no tool with that name
    /// was registered.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.remove(name)
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Get all registered tool definitions for the host runtime
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| ToolDefinition::new(t.name(), t.description(), t.input_schema()))
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Arguments
    /// * `name` - The name of the tool to execute
    /// * `input` - The input parameters for the tool
    ///
    /// # Errors
    /// Returns an error if the tool is not found or execution fails
    pub async fn execute(&self, name: &str, input: JsonValue) -> Result<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| crate::Error::ToolNotFound(name.to_string()))?;
        tool.execute(input).await
    }

    /// Check if a tool is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all registered tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Remove every registered tool
    pub fn clear(&mut self) {
        self.tools.clear();
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the input back"
        }

        fn input_schema(&self) -> JsonValue {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, input: JsonValue) -> Result<ToolResult> {
            Ok(ToolResult::success(input.to_string()))
        }
    }

    #[tokio::test]
    async fn test_register_and_execute() {
        let mut manager = ToolManager::new();
        manager.register(Arc::new(EchoTool));

        assert!(manager.contains("echo"));
        assert_eq!(manager.len(), 1);

        let result = manager.execute("echo", json!({"x": 1})).await.unwrap();
        assert!(!result.is_error);
        assert_eq!(result.output, r#"{"x":1}"#);
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let manager = ToolManager::new();
        let err = manager.execute("missing", json!({})).await.unwrap_err();
        assert!(matches!(err, crate::Error::ToolNotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_shrinks_registry() {
        let mut manager = ToolManager::new();
        manager.register(Arc::new(EchoTool));
        assert_eq!(manager.len(), 1);

        assert!(manager.remove("echo").is_some());
        assert_eq!(manager.len(), 0);
        assert!(manager.get("echo").is_none());
        assert!(manager.remove("echo").is_none());
    }

    #[test]
    fn test_definitions() {
        let mut manager = ToolManager::new();
        manager.register(Arc::new(EchoTool));

        let defs = manager.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "echo");
        assert_eq!(defs[0].description, "Echo the input back");
    }
}
