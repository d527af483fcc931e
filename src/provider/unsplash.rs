// SPDX-License-Identifier: MPL-2.0
//! [`ImageProvider`] backed by the Unsplash REST API.
//!
//! Endpoints used:
//!
//! - `GET /photos/random?count=N&client_id=KEY`
//! - `GET /search/photos?query=Q&page=P&per_page=N&client_id=KEY`
//!
//! Image bytes are downloaded straight from the CDN URLs in each photo's
//! `urls` object.

use super::{ImageProvider, ProviderSettings};
use crate::domain::search::RANDOM_SAMPLE_SIZE;
use crate::domain::{Image, SearchPage};
use crate::error::{Error, ProviderError, Result};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;

const API_VERSION: &str = "v1";
const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
const USER_AGENT: &str = concat!("IcedCardmaker/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Wire format
// ==========================================================================

#[derive(Debug, Deserialize)]
struct PhotoDto {
    id: String,
    urls: PhotoUrlsDto,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrlsDto {
    small: String,
    regular: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    #[serde(default)]
    results: Vec<PhotoDto>,
    #[serde(default)]
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorBodyDto {
    #[serde(default)]
    errors: Vec<String>,
}

impl From<PhotoDto> for Image {
    fn from(dto: PhotoDto) -> Self {
        let description = dto
            .alt_description
            .filter(|text| !text.trim().is_empty())
            .or(dto.description)
            .unwrap_or_default();
        Image::new(dto.id, dto.urls.small, dto.urls.regular, description)
    }
}

// ==========================================================================
// Client
// ==========================================================================

/// HTTP client for the Unsplash API.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    settings: ProviderSettings,
}

impl UnsplashClient {
    /// Builds a client. Fails only if the TLS backend cannot be initialized.
    pub fn new(settings: ProviderSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(ProviderError::from)?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url, path)
    }

    async fn get_json<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(self.endpoint(path))
            .header("Accept-Version", API_VERSION)
            .query(params)
            .query(&[("client_id", self.settings.access_key.as_str())])
            .send()
            .await
            .map_err(ProviderError::from)?;

        log_rate_limit(&response);
        let response = ensure_success(response).await?;
        let body = response.bytes().await.map_err(ProviderError::from)?;
        serde_json::from_slice(&body)
            .map_err(|err| Error::from(ProviderError::Decode(err.to_string())))
    }
}

fn log_rate_limit(response: &Response) {
    if let Some(remaining) = response
        .headers()
        .get(RATE_LIMIT_REMAINING_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        tracing::debug!(remaining, "unsplash rate limit");
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBodyDto>(&body)
        .ok()
        .filter(|dto| !dto.errors.is_empty())
        .map(|dto| dto.errors.join("; "))
        .unwrap_or_else(|| reason(status));

    Err(ProviderError::Status {
        status: status.as_u16(),
        message,
    }
    .into())
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}

#[async_trait]
impl ImageProvider for UnsplashClient {
    async fn fetch_random(&self) -> Result<Vec<Image>> {
        let params = [("count", RANDOM_SAMPLE_SIZE.to_string())];
        let photos: Vec<PhotoDto> = self
            .get_json("/photos/random", &params)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "fetching random images failed"))?;
        Ok(photos.into_iter().map(Image::from).collect())
    }

    async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<SearchPage> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProviderError::InvalidQuery.into());
        }

        let params = [
            ("query", query.to_string()),
            ("page", page.max(1).to_string()),
            ("per_page", page_size.to_string()),
        ];
        let response: SearchResponseDto = self
            .get_json("/search/photos", &params)
            .await
            .inspect_err(|err| tracing::error!(query, page, error = %err, "image search failed"))?;

        Ok(SearchPage::new(
            response.results.into_iter().map(Image::from).collect(),
            response.total_pages,
        ))
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ProviderError::from)?;
        let response = ensure_success(response).await?;
        let bytes = response.bytes().await.map_err(ProviderError::from)?;
        Ok(bytes.to_vec())
    }
}
