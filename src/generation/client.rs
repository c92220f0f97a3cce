//! Blocking HTTP client for the image-generation endpoint
//!
//! Every failure along the way is reported as
//! [`PuzzleError::GenerationFailed`](crate::io::error::PuzzleError::GenerationFailed);
//! nothing is retried.

use crate::generation::request::{GenerateRequest, GenerateResponse};
use crate::io::configuration::{DEFAULT_GENERATE_ENDPOINT, GENERATE_TIMEOUT_SECS};
use crate::io::error::{Result, generation_failed};
use image::RgbaImage;
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, error, info};

/// Pick the endpoint from an explicit value, then the environment, then the default
pub fn resolve_endpoint(explicit: Option<&str>, env_value: Option<&str>) -> String {
    explicit
        .or(env_value)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_GENERATE_ENDPOINT)
        .to_string()
}

/// Client posting generation requests and fetching their images
pub struct GenerationClient {
    endpoint: Url,
    http: Client,
}

impl GenerationClient {
    /// Create a client for `endpoint` with the default timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the HTTP
    /// client cannot be built
    pub fn new(endpoint: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(GENERATE_TIMEOUT_SECS))
            .build()
            .map_err(|e| generation_failed(&endpoint, &e))?;
        Self::with_http_client(endpoint, http)
    }

    /// Create a client for `endpoint` reusing a configured HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL
    pub fn with_http_client(endpoint: &str, http: Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| generation_failed(&endpoint, &format!("invalid endpoint: {e}")))?;
        Ok(Self { endpoint, http })
    }

    /// Endpoint requests are posted to
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post a generation request
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the endpoint answers
    /// with a non-success status, or the body is not a valid response
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = self.endpoint.as_str();
        debug!(endpoint = url, prompt = %request.prompt, "posting generation request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .map_err(|e| {
                error!(endpoint = url, error = %e, "generation request failed");
                generation_failed(&url, &e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(endpoint = url, status = status.as_u16(), "generation request rejected");
            return Err(generation_failed(&url, &format!("endpoint returned {status}")));
        }

        let body = response
            .json::<GenerateResponse>()
            .map_err(|e| generation_failed(&url, &format!("malformed response: {e}")))?;
        info!(image_url = %body.image_url, "image generated");
        Ok(body)
    }

    /// Download and decode an image, resolving relative URLs against the endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the download fails, or the
    /// bytes are not a supported image
    pub fn fetch_image(&self, image_url: &str) -> Result<RgbaImage> {
        let url = self
            .endpoint
            .join(image_url)
            .map_err(|e| generation_failed(&image_url, &format!("invalid image URL: {e}")))?;

        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|e| generation_failed(&url, &e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(generation_failed(
                &url,
                &format!("image download returned {status}"),
            ));
        }

        let bytes = response
            .bytes()
            .map_err(|e| generation_failed(&url, &e))?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| generation_failed(&url, &format!("undecodable image: {e}")))?
            .to_rgba8();
        debug!(url = %url, width = image.width(), height = image.height(), "image fetched");
        Ok(image)
    }

    /// Generate an image and download it
    ///
    /// # Errors
    ///
    /// Returns an error if either the generation request or the download fails
    pub fn generate_image(
        &self,
        request: &GenerateRequest,
    ) -> Result<(GenerateResponse, RgbaImage)> {
        let response = self.generate(request)?;
        let image = self.fetch_image(&response.image_url)?;
        Ok((response, image))
    }
}
