//! WhatsApp plugin for the host agent runtime
//!
//! Wraps `WhatsAppClient` behind the wa-core plugin contract: a catalog
//! of nine tools, an `init`/`cleanup` lifecycle, and execute-by-name
//! dispatch. Tools share the client through a slot that `init()` fills
//! and `cleanup()` clears; executing a tool before `init()` fails.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};

use wa_core::{Plugin, PluginStatus, Tool, ToolDefinition, ToolManager, ToolResult};

use crate::client::WhatsAppClient;
use crate::config::WhatsAppConfig;
use crate::error::{Result, WhatsAppError};
use crate::params::{ToolName, ToolParams};

const PLUGIN_NAME: &str = "whatsapp";
const PLUGIN_DESCRIPTION: &str =
    "WhatsApp Cloud API messaging: text, templates, media, interactive, location, business profile";

const INIT_FAIL_PREFIX: &str = "whatsapp plugin init failed";

/// Slot holding the API client once `init()` has run.
type ClientSlot = Arc<RwLock<Option<Arc<WhatsAppClient>>>>;

/// One catalog entry, addressable by the host runtime.
pub struct WhatsAppTool {
    name: ToolName,
    client: ClientSlot,
}

impl WhatsAppTool {
    fn new(name: ToolName, client: ClientSlot) -> Self {
        Self { name, client }
    }
}

#[async_trait]
impl Tool for WhatsAppTool {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn description(&self) -> &str {
        self.name.description()
    }

    fn input_schema(&self) -> JsonValue {
        self.name.input_schema()
    }

    async fn execute(&self, input: JsonValue) -> wa_core::Result<ToolResult> {
        let client = self
            .client
            .read()
            .unwrap()
            .clone()
            .ok_or(WhatsAppError::NotInitialized)?;

        let params = ToolParams::parse(self.name, input)?;
        let payload = dispatch(&client, params).await?;
        Ok(ToolResult::success(payload.to_string()))
    }
}

/// Route typed parameters to the matching client call and wrap the
/// outcome: `{success, messageId}` for sends, `{success}` for status
/// operations, the raw record for reads.
async fn dispatch(client: &WhatsAppClient, params: ToolParams) -> Result<JsonValue> {
    match params {
        ToolParams::SendMessage(text) => {
            let message_id = client.send_message(&text.to, &text.message).await?;
            Ok(json!({"success": true, "messageId": message_id}))
        }
        ToolParams::SendTemplate(message) => {
            let message_id = client.send_template(message).await?;
            Ok(json!({"success": true, "messageId": message_id}))
        }
        ToolParams::SendMedia(message) => {
            let message_id = client.send_media(message).await?;
            Ok(json!({"success": true, "messageId": message_id}))
        }
        ToolParams::SendInteractive(message) => {
            let message_id = client.send_interactive(message).await?;
            Ok(json!({"success": true, "messageId": message_id}))
        }
        ToolParams::SendLocation(message) => {
            let message_id = client.send_location(message).await?;
            Ok(json!({"success": true, "messageId": message_id}))
        }
        ToolParams::MarkAsRead(receipt) => {
            let success = client.mark_message_as_read(&receipt.message_id).await?;
            Ok(json!({"success": success}))
        }
        ToolParams::GetContactInfo(lookup) => {
            let contact = client.get_contact_info(&lookup.phone_number).await?;
            Ok(serde_json::to_value(contact)?)
        }
        ToolParams::GetBusinessProfile => {
            let profile = client.get_business_profile().await?;
            Ok(serde_json::to_value(profile)?)
        }
        ToolParams::UpdateBusinessProfile(profile) => {
            let success = client.update_business_profile(profile).await?;
            Ok(json!({"success": success}))
        }
    }
}

/// WhatsApp plugin instance
pub struct WhatsAppPlugin {
    config: WhatsAppConfig,
    client: ClientSlot,
    tools: ToolManager,
}

impl WhatsAppPlugin {
    /// Create a plugin with the given configuration, falling back to the
    /// process environment. The tool catalog is registered immediately;
    /// executing a tool still requires `init()`.
    pub fn new(config: Option<WhatsAppConfig>) -> Self {
        let mut plugin = Self {
            config: config.unwrap_or_else(WhatsAppConfig::from_env),
            client: Arc::new(RwLock::new(None)),
            tools: ToolManager::new(),
        };
        plugin.register_catalog();
        plugin
    }

    fn register_catalog(&mut self) {
        for name in ToolName::ALL {
            self.tools
                .register(Arc::new(WhatsAppTool::new(name, Arc::clone(&self.client))));
        }
    }

    /// Register an additional tool alongside the catalog.
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        debug!("Registering WhatsApp tool {}", tool.name());
        self.tools.register(tool);
    }

    /// Remove a tool by name. Returns whether a tool was removed; the
    /// exposed tool list shrinks accordingly.
    pub fn remove_tool(&mut self, name: &str) -> bool {
        self.tools.remove(name).is_some()
    }

    /// Get a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check whether a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains(name)
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Execute a registered tool by name.
    pub async fn execute_tool(&self, name: &str, params: JsonValue) -> wa_core::Result<ToolResult> {
        self.tools.execute(name, params).await
    }

    /// The API client, once `init()` has run.
    pub fn client(&self) -> Option<Arc<WhatsAppClient>> {
        self.client.read().unwrap().clone()
    }

    /// Diagnostic snapshot: identity, whether `init()` has completed,
    /// and the registered tool count.
    pub fn status(&self) -> PluginStatus {
        PluginStatus {
            name: PLUGIN_NAME.to_string(),
            initialized: self.client.read().unwrap().is_some(),
            tool_count: self.tools.len(),
        }
    }
}

impl Default for WhatsAppPlugin {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl Plugin for WhatsAppPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn description(&self) -> &str {
        PLUGIN_DESCRIPTION
    }

    async fn init(&mut self) -> wa_core::Result<()> {
        let client = WhatsAppClient::new(self.config.clone())
            .map_err(|err| wa_core::Error::PluginInit(format!("{INIT_FAIL_PREFIX}: {err}")))?;

        *self.client.write().unwrap() = Some(Arc::new(client));
        self.register_catalog();

        info!(
            "WhatsApp plugin initialized with {} tools: {}",
            self.tools.len(),
            self.tools.tool_names().join(", ")
        );
        Ok(())
    }

    async fn cleanup(&mut self) -> wa_core::Result<()> {
        self.client.write().unwrap().take();
        self.tools.clear();
        info!("WhatsApp plugin cleaned up");
        Ok(())
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        self.tools.definitions()
    }

    async fn execute(&self, tool: &str, params: JsonValue) -> wa_core::Result<JsonValue> {
        let result = self.execute_tool(tool, params).await?;
        if result.is_error {
            return Err(wa_core::Error::ToolExecution(result.output));
        }
        serde_json::from_str(&result.output).map_err(Into::into)
    }
}
