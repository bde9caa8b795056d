//! JSON-over-HTTP client for the generation backend route.
//!
//! Every call is `POST <endpoint>` with `{"action": ..., "params": {...}}`. Image and video
//! generation send the structured campaign as `params.params = {brandAssets, campaignDetails}`
//! (asset files nulled out) next to base64 asset data; the route composes its own prompt
//! from that structure. Media comes back as `data:<mime>;base64,<payload>` strings; video
//! operations come back as operation objects carrying `done` and, once finished,
//! `response.generatedVideos[0].video.uri`.
//!
//! Actions: `generateAdCreatives`, `startVideoGeneration`, `checkVideoStatus`, `fetchVideo`,
//! `generateTaglineSuggestions`, `generateCampaignPromptSuggestions`, `removeImageBackground`,
//! `stylizeProductImage`, `generateLogoVariations`, `generateMascotSuggestions`.

use crate::config::ProviderConfig;
use crate::error::{ApiError, GenerationError};
use crate::generation::brief::{ImageBrief, VideoBrief};
use crate::provider::{CreativeGenerationClient, OperationHandle};
use crate::types::{AssetRef, CampaignConfig, MediaPayload, Platform};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Lowercase markers; messages are lowercased before matching.
const QUOTA_MARKERS: &[&str] = &["resource_exhausted", "quota"];
const POLICY_MARKERS: &[&str] = &["safety", "content policy", "blocked"];

/// Map a failed backend response to a classified error.
pub fn classify_failure(status: Option<u16>, message: &str) -> GenerationError {
    let message = message.trim().to_string();
    let lowered = message.to_ascii_lowercase();
    if status == Some(429) || QUOTA_MARKERS.iter().any(|m| lowered.contains(m)) {
        return GenerationError::QuotaExhausted(message);
    }
    if POLICY_MARKERS.iter().any(|m| lowered.contains(m)) {
        return GenerationError::ContentRejected(message);
    }
    match status {
        Some(400) | Some(413) | Some(422) => GenerationError::InvalidInput(message),
        Some(502) | Some(503) | Some(504) => GenerationError::Transport(message),
        _ => GenerationError::Provider(message),
    }
}

// Helper function to map transport errors to GenerationError
fn map_http_error(error: reqwest::Error) -> GenerationError {
    if let Some(status) = error.status() {
        classify_failure(Some(status.as_u16()), &error.to_string())
    } else if error.is_timeout() {
        GenerationError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        GenerationError::Transport(format!("Connection error: {}", error))
    } else if error.is_decode() {
        GenerationError::Provider(format!("Failed to parse response: {}", error))
    } else {
        GenerationError::Transport(format!("HTTP error: {}", error))
    }
}

/// Pull a readable message out of an error body: `{"error": "..."}`, `{"error": {"message": "..."}}`,
/// or the raw text.
fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
            None => body.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

/// Decode a `data:<mime>;base64,<payload>` URL.
pub fn decode_data_url(url: &str) -> Result<MediaPayload, GenerationError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| GenerationError::Provider("Expected a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| GenerationError::Provider("Malformed data URL".to_string()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| GenerationError::Provider("Data URL is not base64 encoded".to_string()))?;
    if payload.is_empty() {
        return Err(GenerationError::MissingPayload(
            "Backend returned an empty media payload".to_string(),
        ));
    }
    let data = BASE64
        .decode(payload)
        .map_err(|e| GenerationError::Provider(format!("Invalid base64 payload: {}", e)))?;
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    Ok(MediaPayload::new(mime_type, data))
}

fn asset_param(asset: &AssetRef) -> Value {
    json!({
        "data": BASE64.encode(&asset.data),
        "mimeType": asset.mime_type,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlatformWire<'a> {
    name: &'a str,
    dimensions: &'a str,
    aspect_ratio: &'a str,
    is_video: bool,
}

impl<'a> From<&'a Platform> for PlatformWire<'a> {
    fn from(platform: &'a Platform) -> Self {
        Self {
            name: &platform.name,
            dimensions: &platform.dimensions,
            aspect_ratio: &platform.aspect_ratio,
            is_video: platform.is_video,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrandAssetsWire<'a> {
    brand_name: &'a str,
    logo_file: Option<()>,
    mascot_file: Option<()>,
    color_palette: &'a str,
    font_style: &'a str,
    tone: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CampaignDetailsWire<'a> {
    product_description: &'a str,
    product_photo_file: Option<()>,
    preset: &'a str,
    custom_preset: &'a str,
    platforms: Vec<PlatformWire<'a>>,
    tagline: &'a str,
    cta_button: Option<&'a str>,
    seasonal_overlay: &'a str,
    #[serde(rename = "generateABTest")]
    generate_ab_test: bool,
    logo_placement: Option<&'a str>,
    tagline_placement: Option<&'a str>,
    mascot_placement: Option<&'a str>,
    video_prompt: Option<&'a str>,
    video_aspect_ratio: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationParamsWire<'a> {
    brand_assets: BrandAssetsWire<'a>,
    campaign_details: CampaignDetailsWire<'a>,
}

/// Structured campaign narrowed to one platform. A/B is always off on the wire: each job
/// asks for exactly one creative.
fn generation_params<'a>(
    config: &'a CampaignConfig,
    platform: &'a Platform,
    video_prompt: Option<&'a str>,
) -> GenerationParamsWire<'a> {
    let brand = &config.brand;
    let campaign = &config.campaign;
    GenerationParamsWire {
        brand_assets: BrandAssetsWire {
            brand_name: &brand.name,
            logo_file: None,
            mascot_file: None,
            color_palette: &brand.color_palette,
            font_style: &brand.font_style,
            tone: &brand.tone,
        },
        campaign_details: CampaignDetailsWire {
            product_description: &campaign.product_description,
            product_photo_file: None,
            preset: &campaign.preset,
            custom_preset: &campaign.custom_preset,
            platforms: vec![PlatformWire::from(platform)],
            tagline: &campaign.tagline,
            cta_button: campaign.cta.as_deref(),
            seasonal_overlay: &campaign.seasonal_overlay,
            generate_ab_test: false,
            logo_placement: campaign.logo_placement.as_deref(),
            tagline_placement: campaign.tagline_placement.as_deref(),
            mascot_placement: campaign.mascot_placement.as_deref(),
            video_prompt,
            video_aspect_ratio: &campaign.video_aspect_ratio,
        },
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageCreativeWire {
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OperationWire {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    response: Option<OperationResponse>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationResponse {
    #[serde(default)]
    generated_videos: Vec<GeneratedVideo>,
}

#[derive(Debug, Deserialize)]
struct GeneratedVideo {
    #[serde(default)]
    video: Option<VideoRef>,
}

#[derive(Debug, Deserialize)]
struct VideoRef {
    #[serde(default)]
    uri: Option<String>,
}

/// Convert an operation object into a handle. `fallback_name` keeps the handle addressable
/// when a poll response omits the name.
pub fn parse_operation(value: Value, fallback_name: &str) -> Result<OperationHandle, GenerationError> {
    let wire: OperationWire = serde_json::from_value(value)
        .map_err(|e| GenerationError::Provider(format!("Malformed video operation: {}", e)))?;
    if let Some(error) = wire.error {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        let status = error
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok());
        return Err(classify_failure(status, &message));
    }
    let name = wire
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| fallback_name.to_string());
    if name.is_empty() {
        return Err(GenerationError::Provider(
            "Video operation has no name".to_string(),
        ));
    }
    let download_uri = wire
        .response
        .and_then(|r| r.generated_videos.into_iter().next())
        .and_then(|v| v.video)
        .and_then(|v| v.uri);
    Ok(OperationHandle {
        name,
        done: wire.done,
        download_uri,
    })
}

#[derive(Debug, Deserialize)]
struct SuggestionsWire {
    #[serde(default)]
    suggestions: Vec<String>,
}

/// HTTP client for a backend route speaking the action protocol.
pub struct HttpCreativeClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpCreativeClient {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Build from provider configuration, reading the API key from the configured
    /// environment variable when one is named.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ApiError> {
        config.validate().map_err(ApiError::ConfigError)?;
        let api_key = config.api_key();
        if let (None, Some(var)) = (&api_key, config.api_key_env.as_deref()) {
            warn!(env_var = var, "API key environment variable is not set");
        }
        Self::new(
            config.endpoint.clone(),
            api_key,
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<T: DeserializeOwned>(&self, action: &str, params: Value) -> Result<T, GenerationError> {
        debug!(action, endpoint = %self.endpoint, "Calling generation backend");
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&json!({ "action": action, "params": params }));
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await.map_err(map_http_error)?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = error_message_from_body(&body);
            let message = if message.trim().is_empty() {
                format!("Request failed with status {}", status)
            } else {
                message
            };
            warn!(action, status = status.as_u16(), error = %message, "Backend call failed");
            return Err(classify_failure(Some(status.as_u16()), &message));
        }

        response.json::<T>().await.map_err(map_http_error)
    }

    async fn call_for_images(&self, action: &str, params: Value) -> Result<Vec<MediaPayload>, GenerationError> {
        let data_urls: Vec<String> = self.call(action, params).await?;
        data_urls.iter().map(|url| decode_data_url(url)).collect()
    }
}

#[async_trait]
impl CreativeGenerationClient for HttpCreativeClient {
    async fn generate_image(&self, brief: &ImageBrief) -> Result<MediaPayload, GenerationError> {
        let params = json!({
            "params": generation_params(&brief.campaign, &brief.platform, None),
            "platform": PlatformWire::from(&brief.platform),
            "variation": brief.variation.map(|v| v.as_str()),
            "prompt": brief.prompt,
            "productPhotoData": asset_param(&brief.product_photo),
            "logoData": asset_param(&brief.logo),
            "mascotData": brief.mascot.as_ref().map(asset_param),
        });
        let creatives: Vec<ImageCreativeWire> = self.call("generateAdCreatives", params).await?;
        let data_url = creatives
            .into_iter()
            .find_map(|c| c.image_url)
            .ok_or_else(|| {
                GenerationError::MissingPayload(format!(
                    "No image was returned for {}",
                    brief.platform.name
                ))
            })?;
        decode_data_url(&data_url)
    }

    async fn start_video(&self, brief: &VideoBrief) -> Result<OperationHandle, GenerationError> {
        // The route prefers `campaignDetails.videoPrompt` over its own composition.
        let params = json!({
            "params": generation_params(&brief.campaign, &brief.platform, Some(brief.prompt.as_str())),
            "productPhotoData": asset_param(&brief.product_photo),
        });
        let operation: Value = self.call("startVideoGeneration", params).await?;
        parse_operation(operation, "")
    }

    async fn poll_video(
        &self,
        handle: &OperationHandle,
    ) -> Result<OperationHandle, GenerationError> {
        let params = json!({ "operation": { "name": handle.name, "done": handle.done } });
        let operation: Value = self.call("checkVideoStatus", params).await?;
        parse_operation(operation, &handle.name)
    }

    async fn fetch_video_bytes(&self, download_uri: &str) -> Result<MediaPayload, GenerationError> {
        let data_url: String = self
            .call("fetchVideo", json!({ "downloadLink": download_uri }))
            .await?;
        decode_data_url(&data_url)
    }

    async fn suggest_taglines(
        &self,
        product_description: &str,
    ) -> Result<Vec<String>, GenerationError> {
        let wire: SuggestionsWire = self
            .call(
                "generateTaglineSuggestions",
                json!({ "productDescription": product_description }),
            )
            .await?;
        Ok(wire.suggestions)
    }

    async fn suggest_campaign_prompts(
        &self,
        brand_name: &str,
        tone: &str,
    ) -> Result<Vec<String>, GenerationError> {
        let wire: SuggestionsWire = self
            .call(
                "generateCampaignPromptSuggestions",
                json!({ "brandName": brand_name, "tone": tone }),
            )
            .await?;
        Ok(wire.suggestions)
    }

    async fn remove_background(&self, image: &AssetRef) -> Result<MediaPayload, GenerationError> {
        let data_url: String = self
            .call("removeImageBackground", json!({ "fileData": asset_param(image) }))
            .await?;
        decode_data_url(&data_url)
    }

    async fn stylize_product_photo(
        &self,
        product_photo: &AssetRef,
        logo: &AssetRef,
        color_palette: &str,
    ) -> Result<MediaPayload, GenerationError> {
        let params = json!({
            "productPhotoData": asset_param(product_photo),
            "logoData": asset_param(logo),
            "colorPalette": color_palette,
        });
        let data_url: String = self.call("stylizeProductImage", params).await?;
        decode_data_url(&data_url)
    }

    async fn logo_variations(&self, brand_name: &str) -> Result<Vec<MediaPayload>, GenerationError> {
        self.call_for_images("generateLogoVariations", json!({ "brandName": brand_name }))
            .await
    }

    async fn mascot_suggestions(
        &self,
        brand_name: &str,
        product_description: &str,
        tone: &str,
    ) -> Result<Vec<MediaPayload>, GenerationError> {
        let params = json!({
            "brandName": brand_name,
            "productDescription": product_description,
            "tone": tone,
        });
        self.call_for_images("generateMascotSuggestions", params).await
    }

    fn client_name(&self) -> &str {
        "http"
    }
}
