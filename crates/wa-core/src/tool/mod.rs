//! Tool system exposed to the host agent runtime
//!
//! A tool is a named, schema-described capability the host can invoke
//! with a JSON parameter object.

pub mod definition;
pub mod manager;
pub mod traits;

pub use definition::{SchemaBuilder, ToolDefinition};
pub use manager::ToolManager;
pub use traits::{Tool, ToolResult};
