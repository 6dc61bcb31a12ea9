//! WhatsApp Cloud API configuration
//!
//! Resolution order: explicit override, then environment variables,
//! then hardcoded defaults. Credentials are validated once, at client
//! construction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhatsAppError};

/// Default Graph API version.
const DEFAULT_API_VERSION: &str = "v21.0";

/// Default Graph API host.
const DEFAULT_API_BASE_URL: &str = "https://graph.facebook.com";

const DEFAULT_MESSAGE_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_CONTACT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Configuration for the WhatsApp Cloud API client
#[derive(Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Graph API version, e.g. "v21.0"
    pub api_version: String,

    /// WhatsApp Business access token
    pub access_token: String,

    /// WhatsApp Business phone number ID (from Meta Business Suite)
    pub phone_number_id: String,

    /// WhatsApp Business account ID
    pub business_account_id: String,

    /// TTL for the sent-message cache, in seconds
    pub message_cache_ttl_secs: u64,

    /// TTL for the contact cache, in seconds
    pub contact_cache_ttl_secs: u64,

    /// Per-request timeout, in milliseconds
    pub request_timeout_ms: u64,

    /// Base URL for the Graph API (overridable for tests)
    pub api_base_url: String,
}

impl WhatsAppConfig {
    /// Resolve configuration from the process environment, falling back
    /// to defaults for everything except credentials (which stay empty
    /// when unset and are caught by `validate`).
    pub fn from_env() -> Self {
        Self {
            api_version: env_or("WHATSAPP_API_VERSION", DEFAULT_API_VERSION),
            access_token: std::env::var("WHATSAPP_ACCESS_TOKEN").unwrap_or_default(),
            phone_number_id: std::env::var("WHATSAPP_PHONE_NUMBER_ID").unwrap_or_default(),
            business_account_id: std::env::var("WHATSAPP_BUSINESS_ACCOUNT_ID").unwrap_or_default(),
            message_cache_ttl_secs: env_parse(
                "WHATSAPP_MESSAGE_CACHE_TTL",
                DEFAULT_MESSAGE_CACHE_TTL_SECS,
            ),
            contact_cache_ttl_secs: env_parse(
                "WHATSAPP_CONTACT_CACHE_TTL",
                DEFAULT_CONTACT_CACHE_TTL_SECS,
            ),
            request_timeout_ms: env_parse(
                "WHATSAPP_REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            ),
            api_base_url: env_or("WHATSAPP_API_BASE_URL", DEFAULT_API_BASE_URL),
        }
    }

    /// Check the credential invariant: the access token and phone number
    /// ID must both be set.
    pub fn validate(&self) -> Result<()> {
        if self.access_token.is_empty() {
            return Err(WhatsAppError::Config(
                "WhatsApp access token is not set (WHATSAPP_ACCESS_TOKEN)".to_string(),
            ));
        }
        if self.phone_number_id.is_empty() {
            return Err(WhatsAppError::Config(
                "WhatsApp phone number ID is not set (WHATSAPP_PHONE_NUMBER_ID)".to_string(),
            ));
        }
        Ok(())
    }

    /// Versioned API root, e.g. `https://graph.facebook.com/v21.0`.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.api_version
        )
    }

    /// Endpoint for sending messages and read receipts.
    pub fn messages_url(&self) -> String {
        format!("{}/{}/messages", self.api_root(), self.phone_number_id)
    }

    /// Endpoint for uploading media.
    pub fn media_upload_url(&self) -> String {
        format!("{}/{}/media", self.api_root(), self.phone_number_id)
    }

    /// Endpoint for retrieving a media URL by ID.
    pub fn media_url(&self, media_id: &str) -> String {
        format!("{}/{}", self.api_root(), media_id)
    }

    /// Endpoint for the business profile.
    pub fn business_profile_url(&self) -> String {
        format!(
            "{}/{}/whatsapp_business_profile",
            self.api_root(),
            self.phone_number_id
        )
    }
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token: String::new(),
            phone_number_id: String::new(),
            business_account_id: String::new(),
            message_cache_ttl_secs: DEFAULT_MESSAGE_CACHE_TTL_SECS,
            contact_cache_ttl_secs: DEFAULT_CONTACT_CACHE_TTL_SECS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for WhatsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppConfig")
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .field("phone_number_id", &self.phone_number_id)
            .field("business_account_id", &self.business_account_id)
            .field("message_cache_ttl_secs", &self.message_cache_ttl_secs)
            .field("contact_cache_ttl_secs", &self.contact_cache_ttl_secs)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn env_parse(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
