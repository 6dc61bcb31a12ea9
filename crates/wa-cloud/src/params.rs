//! Tool catalog and typed tool parameters
//!
//! The catalog is a compile-time table: one `ToolName` variant per tool,
//! each carrying its description, schema, and required-parameter list.
//! A tool invocation parses into the matching `ToolParams` variant, so
//! dispatch is a single exhaustive `match` and no catalog entry can
//! exist without a handler.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use wa_core::{SchemaBuilder, ToolDefinition};

use crate::error::{Result, WhatsAppError};
use crate::types::{
    BusinessProfile, InteractiveMessage, LocationMessage, MediaMessage, TemplateMessage,
};

/// The nine WhatsApp tools exposed to the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SendMessage,
    SendTemplate,
    SendMedia,
    SendInteractive,
    SendLocation,
    MarkAsRead,
    GetContactInfo,
    GetBusinessProfile,
    UpdateBusinessProfile,
}

impl ToolName {
    /// Every tool in the catalog, in registration order.
    pub const ALL: [ToolName; 9] = [
        ToolName::SendMessage,
        ToolName::SendTemplate,
        ToolName::SendMedia,
        ToolName::SendInteractive,
        ToolName::SendLocation,
        ToolName::MarkAsRead,
        ToolName::GetContactInfo,
        ToolName::GetBusinessProfile,
        ToolName::UpdateBusinessProfile,
    ];

    /// The name the host runtime uses to address the tool.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendMessage => "whatsapp_send_message",
            Self::SendTemplate => "whatsapp_send_template",
            Self::SendMedia => "whatsapp_send_media",
            Self::SendInteractive => "whatsapp_send_interactive",
            Self::SendLocation => "whatsapp_send_location",
            Self::MarkAsRead => "whatsapp_mark_as_read",
            Self::GetContactInfo => "whatsapp_get_contact_info",
            Self::GetBusinessProfile => "whatsapp_get_business_profile",
            Self::UpdateBusinessProfile => "whatsapp_update_business_profile",
        }
    }

    /// Look up a catalog entry by its registered name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tool| tool.as_str() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SendMessage => "Send a text message to a WhatsApp number",
            Self::SendTemplate => "Send a pre-approved template message",
            Self::SendMedia => "Send an image, video, audio, document, or sticker",
            Self::SendInteractive => "Send an interactive message with buttons or a list",
            Self::SendLocation => "Send a location pin",
            Self::MarkAsRead => "Mark a received message as read",
            Self::GetContactInfo => "Get contact info for a phone number",
            Self::GetBusinessProfile => "Get the WhatsApp business profile",
            Self::UpdateBusinessProfile => "Update the WhatsApp business profile",
        }
    }

    /// Parameters that must be present in every invocation.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            Self::SendMessage => &["to", "message"],
            Self::SendTemplate => &["to", "templateName", "language"],
            Self::SendMedia => &["to", "type"],
            Self::SendInteractive => &["to", "type", "body", "action"],
            Self::SendLocation => &["to", "latitude", "longitude"],
            Self::MarkAsRead => &["messageId"],
            Self::GetContactInfo => &["phoneNumber"],
            Self::GetBusinessProfile => &[],
            Self::UpdateBusinessProfile => &[],
        }
    }

    /// JSON schema for the tool's input parameters.
    pub fn input_schema(self) -> JsonValue {
        match self {
            Self::SendMessage => SchemaBuilder::object_schema_with_descriptions(vec![
                ("to", "string", "Recipient phone number", true),
                ("message", "string", "Message text to send", true),
            ]),
            Self::SendTemplate => SchemaBuilder::object_schema_with_descriptions(vec![
                ("to", "string", "Recipient phone number", true),
                (
                    "templateName",
                    "string",
                    "Template name as registered with Meta",
                    true,
                ),
                ("language", "string", "Template language code, e.g. en_US", true),
                (
                    "components",
                    "array",
                    "Template components (header/body/button parameters)",
                    false,
                ),
            ]),
            Self::SendMedia => SchemaBuilder::object_schema_with_descriptions(vec![
                ("to", "string", "Recipient phone number", true),
                (
                    "type",
                    "string",
                    "Media type: image, video, audio, document, or sticker",
                    true,
                ),
                ("url", "string", "Public URL of the media", false),
                ("filePath", "string", "Local file path to upload", false),
                ("caption", "string", "Media caption", false),
                (
                    "filename",
                    "string",
                    "Display filename (documents only)",
                    false,
                ),
            ]),
            Self::SendInteractive => SchemaBuilder::object_schema_with_descriptions(vec![
                ("to", "string", "Recipient phone number", true),
                (
                    "type",
                    "string",
                    "Interactive type: button, list, product, or product_list",
                    true,
                ),
                ("body", "string", "Body text", true),
                ("header", "object", "Optional header object", false),
                ("footer", "string", "Optional footer text", false),
                (
                    "action",
                    "object",
                    "Action object (buttons, sections, or catalog references)",
                    true,
                ),
            ]),
            Self::SendLocation => SchemaBuilder::object_schema_with_descriptions(vec![
                ("to", "string", "Recipient phone number", true),
                ("latitude", "number", "Latitude in decimal degrees", true),
                ("longitude", "number", "Longitude in decimal degrees", true),
                ("name", "string", "Location name", false),
                ("address", "string", "Location address", false),
            ]),
            Self::MarkAsRead => SchemaBuilder::object_schema_with_descriptions(vec![(
                "messageId",
                "string",
                "ID of the message to mark as read",
                true,
            )]),
            Self::GetContactInfo => SchemaBuilder::object_schema_with_descriptions(vec![(
                "phoneNumber",
                "string",
                "Phone number to look up",
                true,
            )]),
            Self::GetBusinessProfile => SchemaBuilder::object_schema_with_descriptions(vec![]),
            Self::UpdateBusinessProfile => SchemaBuilder::object_schema_with_descriptions(vec![
                ("about", "string", "Profile about text", false),
                ("address", "string", "Business address", false),
                ("description", "string", "Business description", false),
                ("email", "string", "Contact email", false),
                ("websites", "array", "Business websites", false),
                ("vertical", "string", "Business vertical, e.g. RETAIL", false),
            ]),
        }
    }

    /// Static definition exposed to the host runtime.
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(self.as_str(), self.description(), self.input_schema())
    }
}

/// Text message parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct TextParams {
    pub to: String,
    pub message: String,
}

/// Read receipt parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadReceiptParams {
    #[serde(rename = "messageId")]
    pub message_id: String,
}

/// Contact lookup parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactLookupParams {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

/// Typed tool parameters, keyed by tool name.
///
/// Parsing checks the catalog's required list first (every missing
/// parameter reported in one error), then deserializes the payload into
/// the matching variant.
#[derive(Debug, Clone)]
pub enum ToolParams {
    SendMessage(TextParams),
    SendTemplate(TemplateMessage),
    SendMedia(MediaMessage),
    SendInteractive(InteractiveMessage),
    SendLocation(LocationMessage),
    MarkAsRead(ReadReceiptParams),
    GetContactInfo(ContactLookupParams),
    GetBusinessProfile,
    UpdateBusinessProfile(BusinessProfile),
}

impl ToolParams {
    /// Parse an invocation payload for the given tool.
    pub fn parse(name: ToolName, input: JsonValue) -> Result<Self> {
        let missing: Vec<String> = name
            .required_params()
            .iter()
            .filter(|param| input.get(**param).is_none_or(JsonValue::is_null))
            .map(|param| param.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(WhatsAppError::MissingParameters(missing));
        }

        Ok(match name {
            ToolName::SendMessage => Self::SendMessage(serde_json::from_value(input)?),
            ToolName::SendTemplate => Self::SendTemplate(serde_json::from_value(input)?),
            ToolName::SendMedia => Self::SendMedia(serde_json::from_value(input)?),
            ToolName::SendInteractive => Self::SendInteractive(serde_json::from_value(input)?),
            ToolName::SendLocation => Self::SendLocation(serde_json::from_value(input)?),
            ToolName::MarkAsRead => Self::MarkAsRead(serde_json::from_value(input)?),
            ToolName::GetContactInfo => Self::GetContactInfo(serde_json::from_value(input)?),
            ToolName::GetBusinessProfile => Self::GetBusinessProfile,
            ToolName::UpdateBusinessProfile => {
                Self::UpdateBusinessProfile(serde_json::from_value(input)?)
            }
        })
    }
}
