//! wa-cloud: WhatsApp Cloud API tools for wa-gateway
//!
//! Exposes the WhatsApp Cloud API (text, template, media, interactive,
//! and location messages, read receipts, business profile management,
//! media upload/fetch) as tools behind the wa-core plugin contract.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod plugin;
pub mod types;

pub use client::{normalize_phone, WhatsAppClient};
pub use config::WhatsAppConfig;
pub use error::{GraphApiError, Result, WhatsAppError};
pub use params::{ToolName, ToolParams};
pub use plugin::{WhatsAppPlugin, WhatsAppTool};
pub use types::{BusinessProfile, Contact, MediaType};
