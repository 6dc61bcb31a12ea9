//! Plugin lifecycle contract
//!
//! A plugin bundles a set of tools behind a name and a pair of lifecycle
//! hooks the host runtime invokes around agent session setup/teardown.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::tool::ToolDefinition;
use crate::Result;

/// Diagnostic snapshot of a plugin instance
#[derive(Debug, Clone)]
pub struct PluginStatus {
    /// Plugin name
    pub name: String,
    /// Whether `init()` has completed successfully
    pub initialized: bool,
    /// Number of tools currently registered
    pub tool_count: usize,
}

/// Plugin trait implemented by channel crates
///
/// The host calls `init()` before first use, `tools()` to discover the
/// catalog, `execute()` to invoke a tool by name, and `cleanup()` on
/// teardown. A failed `init()` leaves the plugin unusable until it is
/// invoked again.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Get the plugin name
    fn name(&self) -> &str;

    /// Get the plugin description
    fn description(&self) -> &str;

    /// Initialize the plugin (build clients, register tools)
    async fn init(&mut self) -> Result<()>;

    /// Release resources and unregister tools
    async fn cleanup(&mut self) -> Result<()>;

    /// Get the definitions of all currently registered tools
    fn tools(&self) -> Vec<ToolDefinition>;

    /// Execute a registered tool by name
    async fn execute(&self, tool: &str, params: JsonValue) -> Result<JsonValue>;
}
