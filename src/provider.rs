//! Creative Generation Client Abstraction
//!
//! Interface to the generative backend that renders images, runs long video operations,
//! proposes copy, and reworks brand assets. The orchestrator only ever talks to a `CreativeGenerationClient`
//! handed to it by the caller, so backends can be swapped or faked.

use crate::error::GenerationError;
use crate::generation::brief::{ImageBrief, VideoBrief};
use crate::types::{AssetRef, MediaPayload};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpCreativeClient;

/// Reference to an in-progress video operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationHandle {
    pub name: String,
    pub done: bool,
    /// Where the finished video can be fetched from; set once `done` is true.
    pub download_uri: Option<String>,
}

impl OperationHandle {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            download_uri: None,
        }
    }

    pub fn finished(name: impl Into<String>, download_uri: Option<String>) -> Self {
        Self {
            name: name.into(),
            done: true,
            download_uri,
        }
    }
}

/// Creative generation client trait
#[async_trait]
pub trait CreativeGenerationClient: Send + Sync {
    /// Render one image creative from a brief
    async fn generate_image(&self, brief: &ImageBrief) -> Result<MediaPayload, GenerationError>;

    /// Submit a video brief and return the operation handle
    async fn start_video(&self, brief: &VideoBrief) -> Result<OperationHandle, GenerationError>;

    /// Re-check a video operation
    async fn poll_video(&self, handle: &OperationHandle)
        -> Result<OperationHandle, GenerationError>;

    /// Download the finished video
    async fn fetch_video_bytes(&self, download_uri: &str) -> Result<MediaPayload, GenerationError>;

    /// Propose taglines for a product description
    async fn suggest_taglines(
        &self,
        _product_description: &str,
    ) -> Result<Vec<String>, GenerationError> {
        Err(GenerationError::Unsupported(format!(
            "{} does not provide tagline suggestions",
            self.client_name()
        )))
    }

    /// Propose campaign concepts for a brand and tone
    async fn suggest_campaign_prompts(
        &self,
        _brand_name: &str,
        _tone: &str,
    ) -> Result<Vec<String>, GenerationError> {
        Err(GenerationError::Unsupported(format!(
            "{} does not provide campaign prompt suggestions",
            self.client_name()
        )))
    }

    /// Cut the subject of an image out onto a transparent background
    async fn remove_background(&self, _image: &AssetRef) -> Result<MediaPayload, GenerationError> {
        Err(GenerationError::Unsupported(format!(
            "{} does not provide background removal",
            self.client_name()
        )))
    }

    /// Restage a product photo on a palette-inspired backdrop with the logo worked in
    async fn stylize_product_photo(
        &self,
        _product_photo: &AssetRef,
        _logo: &AssetRef,
        _color_palette: &str,
    ) -> Result<MediaPayload, GenerationError> {
        Err(GenerationError::Unsupported(format!(
            "{} does not provide product photo stylizing",
            self.client_name()
        )))
    }

    /// Draft logo candidates for a brand name
    async fn logo_variations(&self, _brand_name: &str) -> Result<Vec<MediaPayload>, GenerationError> {
        Err(GenerationError::Unsupported(format!(
            "{} does not provide logo variations",
            self.client_name()
        )))
    }

    /// Draft mascot candidates for a brand
    async fn mascot_suggestions(
        &self,
        _brand_name: &str,
        _product_description: &str,
        _tone: &str,
    ) -> Result<Vec<MediaPayload>, GenerationError> {
        Err(GenerationError::Unsupported(format!(
            "{} does not provide mascot suggestions",
            self.client_name()
        )))
    }

    /// Get the client name
    fn client_name(&self) -> &str;
}
