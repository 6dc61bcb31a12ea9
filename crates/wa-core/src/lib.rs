//! wa-core: shared plugin and tool contracts for wa-gateway
//!
//! Defines the tool registry consumed by a host agent runtime and the
//! plugin lifecycle that channel crates implement.

pub mod error;
pub mod plugin;
pub mod tool;

pub use error::{Error, Result};
pub use plugin::{Plugin, PluginStatus};
pub use tool::{SchemaBuilder, Tool, ToolDefinition, ToolManager, ToolResult};
