//! WhatsApp Cloud API wire types
//!
//! Reference: https://developers.facebook.com/docs/whatsapp/cloud-api/reference/messages
//!
//! Outbound envelope field names (`messaging_product`, `recipient_type`,
//! `to`, `type`, per-type payload objects) are dictated by the Cloud API
//! and must be reproduced exactly.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ── Message intents ───────────────────────────────────────────────────────────

/// Media kind accepted by the Cloud API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Document,
    Sticker,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Sticker => "sticker",
        }
    }
}

/// Template message intent.
///
/// Field names in the serialized form match the tool-catalog parameter
/// names, so a tool invocation deserializes straight into this type.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateMessage {
    /// Recipient phone number.
    pub to: String,
    /// Template name as registered with Meta.
    #[serde(rename = "templateName")]
    pub name: String,
    /// Template language code, e.g. "en_US".
    pub language: String,
    /// Optional structured components (header/body/button parameters).
    #[serde(default)]
    pub components: Option<JsonValue>,
}

/// Media message intent. Exactly one of `url` and `file_path` supplies
/// the media source; a file path triggers an upload first.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaMessage {
    pub to: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "filePath")]
    pub file_path: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    /// Display filename, honored for documents only.
    #[serde(default)]
    pub filename: Option<String>,
}

/// Interactive message intent. `header` and `action` pass through to
/// the API unchanged beyond presence checks.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractiveMessage {
    pub to: String,
    /// Interactive type: "button", "list", "product", "product_list".
    #[serde(rename = "type")]
    pub interactive_type: String,
    /// Body text.
    pub body: String,
    #[serde(default)]
    pub header: Option<JsonValue>,
    #[serde(default)]
    pub footer: Option<String>,
    /// Action object (buttons, list sections, or catalog references).
    pub action: JsonValue,
}

/// Location message intent.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationMessage {
    pub to: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

// ── Outbound envelopes ────────────────────────────────────────────────────────

/// Request body for sending a text message.
#[derive(Debug, Clone, Serialize)]
pub struct SendTextRequest {
    /// Must be "whatsapp".
    pub messaging_product: &'static str,
    /// Recipient type (always "individual" here).
    pub recipient_type: &'static str,
    /// Recipient's WhatsApp ID (normalized phone number).
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub text: OutboundText,
}

impl SendTextRequest {
    pub fn new(to: String, body: String) -> Self {
        Self {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to,
            message_type: "text",
            text: OutboundText {
                preview_url: false,
                body,
            },
        }
    }
}

/// Outbound text content.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundText {
    pub preview_url: bool,
    pub body: String,
}

/// Request body for sending a template message.
#[derive(Debug, Clone, Serialize)]
pub struct SendTemplateRequest {
    pub messaging_product: &'static str,
    pub recipient_type: &'static str,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub template: TemplateObject,
}

impl SendTemplateRequest {
    pub fn new(to: String, name: String, language: String, components: Option<JsonValue>) -> Self {
        Self {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to,
            message_type: "template",
            template: TemplateObject {
                name,
                language: LanguageObject { code: language },
                components,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateObject {
    pub name: String,
    pub language: LanguageObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageObject {
    pub code: String,
}

/// Request body for sending a media message.
#[derive(Debug, Clone, Serialize)]
pub struct SendMediaRequest {
    pub messaging_product: &'static str,
    pub recipient_type: &'static str,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: MediaType,
    /// Media content; the serialized field name matches the type.
    #[serde(flatten)]
    pub media: OutboundMediaContent,
}

impl SendMediaRequest {
    /// Build a media envelope referencing either an uploaded media ID or
    /// a direct link. `filename` is honored for documents only.
    pub fn new(
        to: String,
        media_type: MediaType,
        id: Option<String>,
        link: Option<String>,
        caption: Option<String>,
        filename: Option<String>,
    ) -> Self {
        let media = match media_type {
            MediaType::Image => OutboundMediaContent::Image {
                image: MediaObject { id, link, caption },
            },
            MediaType::Video => OutboundMediaContent::Video {
                video: MediaObject { id, link, caption },
            },
            MediaType::Audio => OutboundMediaContent::Audio {
                audio: MediaObject { id, link, caption },
            },
            MediaType::Sticker => OutboundMediaContent::Sticker {
                sticker: MediaObject { id, link, caption },
            },
            MediaType::Document => OutboundMediaContent::Document {
                document: DocumentObject {
                    id,
                    link,
                    caption,
                    filename,
                },
            },
        };
        Self {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to,
            message_type: media_type,
            media,
        }
    }
}

/// Outbound media content, keyed by the message type.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OutboundMediaContent {
    Image { image: MediaObject },
    Video { video: MediaObject },
    Audio { audio: MediaObject },
    Sticker { sticker: MediaObject },
    Document { document: DocumentObject },
}

/// Media object for outbound messages.
#[derive(Debug, Clone, Serialize)]
pub struct MediaObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Document object for outbound messages.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Request body for sending an interactive message.
#[derive(Debug, Clone, Serialize)]
pub struct SendInteractiveRequest {
    pub messaging_product: &'static str,
    pub recipient_type: &'static str,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub interactive: InteractiveObject,
}

impl SendInteractiveRequest {
    pub fn new(
        to: String,
        interactive_type: String,
        body: String,
        header: Option<JsonValue>,
        footer: Option<String>,
        action: JsonValue,
    ) -> Self {
        Self {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to,
            message_type: "interactive",
            interactive: InteractiveObject {
                interactive_type,
                header,
                body: TextBlock { text: body },
                footer: footer.map(|text| TextBlock { text }),
                action,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractiveObject {
    #[serde(rename = "type")]
    pub interactive_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<JsonValue>,
    pub body: TextBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<TextBlock>,
    pub action: JsonValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    pub text: String,
}

/// Request body for sending a location message.
#[derive(Debug, Clone, Serialize)]
pub struct SendLocationRequest {
    pub messaging_product: &'static str,
    pub recipient_type: &'static str,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub location: LocationObject,
}

impl SendLocationRequest {
    pub fn new(
        to: String,
        latitude: f64,
        longitude: f64,
        name: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to,
            message_type: "location",
            location: LocationObject {
                latitude,
                longitude,
                name,
                address,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationObject {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Request body for a read receipt.
#[derive(Debug, Clone, Serialize)]
pub struct MarkReadRequest {
    pub messaging_product: &'static str,
    pub status: &'static str,
    pub message_id: String,
}

impl MarkReadRequest {
    pub fn new(message_id: String) -> Self {
        Self {
            messaging_product: "whatsapp",
            status: "read",
            message_id,
        }
    }
}

/// Request body for a business profile update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBusinessProfileRequest {
    pub messaging_product: &'static str,
    #[serde(flatten)]
    pub profile: BusinessProfile,
}

impl UpdateBusinessProfileRequest {
    pub fn new(profile: BusinessProfile) -> Self {
        Self {
            messaging_product: "whatsapp",
            profile,
        }
    }
}

// ── Responses ─────────────────────────────────────────────────────────────────

/// Response from the send message API.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    #[serde(default)]
    pub messages: Vec<SentMessage>,
}

/// Sent message info.
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    /// Vendor message ID (wamid).
    pub id: String,
}

/// Generic `{"success": bool}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
}

/// Response from the media upload API.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUploadResponse {
    pub id: Option<String>,
}

/// Response from the media URL lookup API.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUrlResponse {
    pub url: Option<String>,
}

/// A WhatsApp Business profile record.
///
/// Also serves as the update payload: every field is optional and only
/// set fields are serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub websites: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
}

/// Response from the business profile API.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessProfileResponse {
    #[serde(default)]
    pub data: Vec<BusinessProfile>,
}

/// A contact record.
///
/// The Cloud API has no contact lookup endpoint, so records synthesized
/// by this crate carry only the normalized number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// WhatsApp ID (normalized phone number).
    pub wa_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_business: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl Contact {
    /// Placeholder record for a number with no directory data.
    pub fn placeholder(wa_id: impl Into<String>) -> Self {
        Self {
            wa_id: wa_id.into(),
            name: None,
            is_business: None,
            profile_picture_url: None,
        }
    }
}

// ── Graph API error body ──────────────────────────────────────────────────────

/// Error envelope returned by the Graph API on failed requests.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorResponse {
    pub error: GraphErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: i64,
    pub error_subcode: Option<i64>,
    pub error_user_title: Option<String>,
    pub error_user_msg: Option<String>,
    pub fbtrace_id: Option<String>,
}
