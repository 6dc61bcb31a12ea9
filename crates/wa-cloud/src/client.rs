//! WhatsApp Cloud API client
//!
//! One method per API capability; every call is a single authenticated
//! request with no retries. Failures carry the structured Graph error
//! body when the vendor supplies one.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::multipart;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::cache::TtlCache;
use crate::config::WhatsAppConfig;
use crate::error::{GraphApiError, Result, WhatsAppError};
use crate::types::{
    BusinessProfile, BusinessProfileResponse, Contact, GraphErrorResponse, InteractiveMessage,
    LocationMessage, MarkReadRequest, MediaMessage, MediaUploadResponse, MediaUrlResponse,
    SendInteractiveRequest, SendLocationRequest, SendMediaRequest, SendMessageResponse,
    SendTemplateRequest, SendTextRequest, TemplateMessage, UpdateBusinessProfileRequest,
};

/// Entries each cache holds before evicting the oldest.
const CACHE_CAPACITY: usize = 1024;

/// Fields requested when fetching the business profile.
const PROFILE_FIELDS: &str =
    "about,address,description,email,profile_picture_url,websites,vertical";

/// Normalize a phone number for use as the API recipient field.
///
/// A leading `+` is stripped; otherwise every non-digit character is
/// removed. Already-normalized input passes through unchanged.
pub fn normalize_phone(number: &str) -> String {
    if let Some(rest) = number.strip_prefix('+') {
        rest.to_string()
    } else {
        number.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

/// WhatsApp Cloud API client
#[derive(Debug)]
pub struct WhatsAppClient {
    client: Client,
    config: WhatsAppConfig,
    /// Receipts for recently sent messages, keyed by message ID.
    message_cache: Mutex<TtlCache<String, String>>,
    /// Synthesized contact records, keyed by normalized number.
    contact_cache: Mutex<TtlCache<String, Contact>>,
}

impl WhatsAppClient {
    /// Create a new client, validating credentials and building the
    /// underlying HTTP client with the configured timeout.
    pub fn new(config: WhatsAppConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        let message_cache = Mutex::new(TtlCache::new(
            CACHE_CAPACITY,
            Duration::from_secs(config.message_cache_ttl_secs),
        ));
        let contact_cache = Mutex::new(TtlCache::new(
            CACHE_CAPACITY,
            Duration::from_secs(config.contact_cache_ttl_secs),
        ));

        Ok(Self {
            client,
            config,
            message_cache,
            contact_cache,
        })
    }

    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }

    /// Send a plain text message. Returns the vendor message ID, or an
    /// empty string when the response carries none.
    pub async fn send_message(&self, to: &str, body: &str) -> Result<String> {
        let recipient = normalize_phone(to);
        info!("Sending WhatsApp message to {}", recipient);

        let request = SendTextRequest::new(recipient.clone(), body.to_string());
        self.post_message(&recipient, &request).await
    }

    /// Send a template message.
    pub async fn send_template(&self, message: TemplateMessage) -> Result<String> {
        let recipient = normalize_phone(&message.to);
        info!(
            "Sending WhatsApp template '{}' to {}",
            message.name, recipient
        );

        let request = SendTemplateRequest::new(
            recipient.clone(),
            message.name,
            message.language,
            message.components,
        );
        self.post_message(&recipient, &request).await
    }

    /// Send a media message.
    ///
    /// A local `file_path` is uploaded first and referenced by ID; a
    /// `url` is referenced directly. With neither, the call fails before
    /// any request is made.
    pub async fn send_media(&self, message: MediaMessage) -> Result<String> {
        let recipient = normalize_phone(&message.to);

        let (id, link) = if let Some(ref file_path) = message.file_path {
            (Some(self.upload_media(file_path).await?), None)
        } else if let Some(url) = message.url {
            (None, Some(url))
        } else {
            return Err(WhatsAppError::MissingMediaSource);
        };

        info!(
            "Sending WhatsApp {} message to {}",
            message.media_type.as_str(),
            recipient
        );

        let request = SendMediaRequest::new(
            recipient.clone(),
            message.media_type,
            id,
            link,
            message.caption,
            message.filename,
        );
        self.post_message(&recipient, &request).await
    }

    /// Send an interactive message (buttons, list, or product).
    pub async fn send_interactive(&self, message: InteractiveMessage) -> Result<String> {
        let recipient = normalize_phone(&message.to);
        info!(
            "Sending WhatsApp interactive '{}' message to {}",
            message.interactive_type, recipient
        );

        let request = SendInteractiveRequest::new(
            recipient.clone(),
            message.interactive_type,
            message.body,
            message.header,
            message.footer,
            message.action,
        );
        self.post_message(&recipient, &request).await
    }

    /// Send a location message.
    pub async fn send_location(&self, message: LocationMessage) -> Result<String> {
        let recipient = normalize_phone(&message.to);
        info!("Sending WhatsApp location to {}", recipient);

        let request = SendLocationRequest::new(
            recipient.clone(),
            message.latitude,
            message.longitude,
            message.name,
            message.address,
        );
        self.post_message(&recipient, &request).await
    }

    /// Mark a message as read. Returns the vendor's success flag.
    pub async fn mark_message_as_read(&self, message_id: &str) -> Result<bool> {
        debug!("Marking WhatsApp message {} as read", message_id);

        let request = MarkReadRequest::new(message_id.to_string());
        let response = self
            .client
            .post(self.config.messages_url())
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let parsed: crate::types::StatusResponse = response.json().await?;
        Ok(parsed.success)
    }

    /// Fetch the business profile. Returns the first record, or an empty
    /// record when the vendor returns none.
    pub async fn get_business_profile(&self) -> Result<BusinessProfile> {
        let response = self
            .client
            .get(self.config.business_profile_url())
            .query(&[("fields", PROFILE_FIELDS)])
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let parsed: BusinessProfileResponse = response.json().await?;
        Ok(parsed.data.into_iter().next().unwrap_or_default())
    }

    /// Update the business profile with the caller-supplied fields.
    /// Returns the vendor's success flag.
    pub async fn update_business_profile(&self, profile: BusinessProfile) -> Result<bool> {
        info!("Updating WhatsApp business profile");

        let request = UpdateBusinessProfileRequest::new(profile);
        let response = self
            .client
            .post(self.config.business_profile_url())
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let parsed: crate::types::StatusResponse = response.json().await?;
        Ok(parsed.success)
    }

    /// Upload a local file. Returns the vendor media ID.
    pub async fn upload_media(&self, file_path: &str) -> Result<String> {
        let path = Path::new(file_path);
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(WhatsAppError::MediaFileNotFound(file_path.to_string()));
        }

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(guess_mime(path))?;
        let form = multipart::Form::new()
            .text("messaging_product", "whatsapp")
            .part("file", part);

        let response = self
            .client
            .post(self.config.media_upload_url())
            .bearer_auth(&self.config.access_token)
            .multipart(form)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let parsed: MediaUploadResponse = response.json().await?;
        let media_id = parsed.id.ok_or(WhatsAppError::MissingField("id"))?;

        info!("Uploaded media {} as {}", file_path, media_id);
        Ok(media_id)
    }

    /// Resolve a media ID to a download URL.
    pub async fn get_media_url(&self, media_id: &str) -> Result<String> {
        let response = self
            .client
            .get(self.config.media_url(media_id))
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let parsed: MediaUrlResponse = response.json().await?;
        parsed.url.ok_or(WhatsAppError::MissingField("url"))
    }

    /// Look up contact info for a phone number.
    ///
    /// The Cloud API has no contact lookup endpoint, so this synthesizes
    /// a placeholder record carrying only the normalized number and
    /// caches it for the configured contact TTL. No request is made.
    pub async fn get_contact_info(&self, phone_number: &str) -> Result<Contact> {
        let wa_id = normalize_phone(phone_number);

        let mut cache = self.contact_cache.lock().unwrap();
        if let Some(contact) = cache.get(&wa_id) {
            debug!("Contact cache hit for {}", wa_id);
            return Ok(contact.clone());
        }

        let contact = Contact::placeholder(wa_id.clone());
        cache.insert(wa_id, contact.clone());
        Ok(contact)
    }

    /// Number of sent-message receipts currently cached (diagnostics).
    pub fn recent_message_count(&self) -> usize {
        self.message_cache.lock().unwrap().len()
    }

    /// POST an envelope to the messages endpoint and extract the first
    /// message ID, or an empty string when the response carries none.
    /// Successful sends are recorded in the message cache.
    async fn post_message<T: Serialize>(&self, recipient: &str, payload: &T) -> Result<String> {
        let response = self
            .client
            .post(self.config.messages_url())
            .bearer_auth(&self.config.access_token)
            .json(payload)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let parsed: SendMessageResponse = response.json().await?;
        let message_id = parsed
            .messages
            .first()
            .map(|message| message.id.clone())
            .unwrap_or_default();

        if !message_id.is_empty() {
            let mut cache = self.message_cache.lock().unwrap();
            cache.insert(message_id.clone(), recipient.to_string());
        }

        Ok(message_id)
    }

    /// Convert a non-success response into an error, enriched with the
    /// structured Graph error body when one is present.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("WhatsApp API error: {} - {}", status, body);

        match serde_json::from_str::<GraphErrorResponse>(&body) {
            Ok(parsed) => {
                let graph = parsed.error;
                Err(WhatsAppError::Graph(GraphApiError {
                    status: status.as_u16(),
                    code: graph.code,
                    message: graph.message,
                    subcode: graph.error_subcode,
                    user_title: graph.error_user_title,
                    user_message: graph.error_user_msg,
                }))
            }
            Err(_) => Err(WhatsAppError::Api(format!("{status} - {body}"))),
        }
    }
}

/// Best-effort MIME type from the file extension.
fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "3gp" => "video/3gpp",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "aac" => "audio/aac",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::types::MediaType;

    fn test_config(base_url: &str) -> WhatsAppConfig {
        WhatsAppConfig {
            access_token: "test-token".to_string(),
            phone_number_id: "123456789".to_string(),
            api_base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    fn test_client(base_url: &str) -> WhatsAppClient {
        WhatsAppClient::new(test_config(base_url)).unwrap()
    }

    #[test]
    fn test_normalize_phone_strips_plus() {
        assert_eq!(normalize_phone("+1234567890"), "1234567890");
    }

    #[test]
    fn test_normalize_phone_strips_punctuation() {
        assert_eq!(normalize_phone("1 (234) 567-890"), "1234567890");
    }

    #[test]
    fn test_normalize_phone_idempotent() {
        assert_eq!(normalize_phone("1234567890"), "1234567890");
        assert_eq!(
            normalize_phone(&normalize_phone("+1234567890")),
            "1234567890"
        );
    }

    #[test]
    fn test_new_rejects_missing_credentials() {
        let config = WhatsAppConfig::default();
        let err = WhatsAppClient::new(config).unwrap_err();
        assert!(matches!(err, WhatsAppError::Config(_)));
    }

    #[tokio::test]
    async fn test_send_message_returns_message_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v21.0/123456789/messages")
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::PartialJson(json!({
                "messaging_product": "whatsapp",
                "recipient_type": "individual",
                "to": "15551234567",
                "type": "text",
                "text": {"body": "Hello!"}
            })))
            .with_status(200)
            .with_body(r#"{"messaging_product":"whatsapp","contacts":[],"messages":[{"id":"wamid.ABC"}]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let message_id = client.send_message("+15551234567", "Hello!").await.unwrap();

        assert_eq!(message_id, "wamid.ABC");
        assert_eq!(client.recent_message_count(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_empty_response_yields_empty_id() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v21.0/123456789/messages")
            .with_status(200)
            .with_body(r#"{"messaging_product":"whatsapp","contacts":[],"messages":[]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let message_id = client.send_message("15551234567", "Hello!").await.unwrap();

        assert_eq!(message_id, "");
        assert_eq!(client.recent_message_count(), 0);
    }

    #[tokio::test]
    async fn test_structured_vendor_error_is_enriched() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v21.0/123456789/messages")
            .with_status(400)
            .with_body(
                r#"{"error":{"message":"Invalid parameter","type":"OAuthException","code":100,"error_subcode":2018001,"fbtrace_id":"Az8or2RiK4"}}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client
            .send_message("15551234567", "Hello!")
            .await
            .unwrap_err();

        assert!(matches!(err, WhatsAppError::Graph(_)));
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("code 100"));
        assert!(text.contains("Invalid parameter"));
    }

    #[tokio::test]
    async fn test_unstructured_error_passes_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v21.0/123456789/messages")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client
            .send_message("15551234567", "Hello!")
            .await
            .unwrap_err();

        assert!(matches!(err, WhatsAppError::Api(_)));
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("internal error"));
    }

    #[tokio::test]
    async fn test_send_template() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v21.0/123456789/messages")
            .match_body(Matcher::PartialJson(json!({
                "type": "template",
                "template": {"name": "order_update", "language": {"code": "en_US"}}
            })))
            .with_status(200)
            .with_body(r#"{"messages":[{"id":"wamid.TPL"}]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let message = TemplateMessage {
            to: "+15551234567".to_string(),
            name: "order_update".to_string(),
            language: "en_US".to_string(),
            components: None,
        };
        let message_id = client.send_template(message).await.unwrap();

        assert_eq!(message_id, "wamid.TPL");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_media_without_source_fails_before_request() {
        let server = mockito::Server::new_async().await;
        let client = test_client(&server.url());

        let message = MediaMessage {
            to: "15551234567".to_string(),
            media_type: MediaType::Image,
            url: None,
            file_path: None,
            caption: None,
            filename: None,
        };
        let err = client.send_media(message).await.unwrap_err();
        assert!(matches!(err, WhatsAppError::MissingMediaSource));
    }

    #[tokio::test]
    async fn test_send_media_by_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v21.0/123456789/messages")
            .match_body(Matcher::PartialJson(json!({
                "type": "image",
                "image": {"link": "https://example.com/cat.jpg", "caption": "A cat"}
            })))
            .with_status(200)
            .with_body(r#"{"messages":[{"id":"wamid.IMG"}]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let message = MediaMessage {
            to: "15551234567".to_string(),
            media_type: MediaType::Image,
            url: Some("https://example.com/cat.jpg".to_string()),
            file_path: None,
            caption: Some("A cat".to_string()),
            filename: None,
        };
        let message_id = client.send_media(message).await.unwrap();

        assert_eq!(message_id, "wamid.IMG");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_media_uploads_file_and_references_id() {
        let mut server = mockito::Server::new_async().await;
        let upload_mock = server
            .mock("POST", "/v21.0/123456789/media")
            .with_status(200)
            .with_body(r#"{"id":"MEDIA42"}"#)
            .create_async()
            .await;
        let send_mock = server
            .mock("POST", "/v21.0/123456789/messages")
            .match_body(Matcher::PartialJson(json!({
                "type": "document",
                "document": {"id": "MEDIA42", "filename": "report.pdf"}
            })))
            .with_status(200)
            .with_body(r#"{"messages":[{"id":"wamid.DOC"}]}"#)
            .create_async()
            .await;

        let mut file = tempfile::NamedTempFile::with_suffix(".pdf").unwrap();
        file.write_all(b"%PDF-1.4 test").unwrap();

        let client = test_client(&server.url());
        let message = MediaMessage {
            to: "15551234567".to_string(),
            media_type: MediaType::Document,
            url: None,
            file_path: Some(file.path().to_str().unwrap().to_string()),
            caption: None,
            filename: Some("report.pdf".to_string()),
        };
        let message_id = client.send_media(message).await.unwrap();

        assert_eq!(message_id, "wamid.DOC");
        upload_mock.assert_async().await;
        send_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_media_missing_file() {
        let server = mockito::Server::new_async().await;
        let client = test_client(&server.url());

        let err = client
            .upload_media("/nonexistent/path/file.png")
            .await
            .unwrap_err();
        assert!(matches!(err, WhatsAppError::MediaFileNotFound(_)));
    }

    #[tokio::test]
    async fn test_upload_media_response_without_id_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v21.0/123456789/media")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
        file.write_all(b"png bytes").unwrap();

        let client = test_client(&server.url());
        let err = client
            .upload_media(file.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, WhatsAppError::MissingField("id")));
    }

    #[tokio::test]
    async fn test_mark_message_as_read() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v21.0/123456789/messages")
            .match_body(Matcher::PartialJson(json!({
                "messaging_product": "whatsapp",
                "status": "read",
                "message_id": "wamid.ABC"
            })))
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let success = client.mark_message_as_read("wamid.ABC").await.unwrap();

        assert!(success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_business_profile_returns_first_record() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v21.0/123456789/whatsapp_business_profile")
            .match_query(Matcher::UrlEncoded(
                "fields".to_string(),
                PROFILE_FIELDS.to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"data":[{"about":"We sell hats","vertical":"RETAIL"}]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let profile = client.get_business_profile().await.unwrap();

        assert_eq!(profile.about.as_deref(), Some("We sell hats"));
        assert_eq!(profile.vertical.as_deref(), Some("RETAIL"));
    }

    #[tokio::test]
    async fn test_get_business_profile_empty_data() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v21.0/123456789/whatsapp_business_profile")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let profile = client.get_business_profile().await.unwrap();

        assert!(profile.about.is_none());
        assert!(profile.email.is_none());
    }

    #[tokio::test]
    async fn test_update_business_profile() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v21.0/123456789/whatsapp_business_profile")
            .match_body(Matcher::PartialJson(json!({
                "messaging_product": "whatsapp",
                "about": "New about text"
            })))
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let success = client
            .update_business_profile(BusinessProfile {
                about: Some("New about text".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_media_url() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v21.0/MEDIA42")
            .with_status(200)
            .with_body(r#"{"url":"https://lookaside.example.com/media/42","mime_type":"image/png"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let url = client.get_media_url("MEDIA42").await.unwrap();
        assert_eq!(url, "https://lookaside.example.com/media/42");
    }

    #[tokio::test]
    async fn test_get_media_url_missing_url_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v21.0/MEDIA42")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.get_media_url("MEDIA42").await.unwrap_err();
        assert!(matches!(err, WhatsAppError::MissingField("url")));
    }

    #[tokio::test]
    async fn test_get_contact_info_caches_by_normalized_number() {
        let server = mockito::Server::new_async().await;
        let client = test_client(&server.url());

        let first = client.get_contact_info("1 (555) 123-4567").await.unwrap();
        assert_eq!(first.wa_id, "15551234567");
        assert!(first.name.is_none());

        // Same number in a different format hits the same cache entry.
        let second = client.get_contact_info("+15551234567").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_contact_info_resynthesizes_after_ttl() {
        let server = mockito::Server::new_async().await;
        let config = WhatsAppConfig {
            contact_cache_ttl_secs: 0,
            ..test_config(&server.url())
        };
        let client = WhatsAppClient::new(config).unwrap();

        let first = client.get_contact_info("15551234567").await.unwrap();
        std::thread::sleep(Duration::from_millis(10));
        // TTL of zero: the cached entry is already stale on next read.
        let second = client.get_contact_info("15551234567").await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("a.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("b.pdf")), "application/pdf");
        assert_eq!(guess_mime(Path::new("noext")), "application/octet-stream");
    }
}
