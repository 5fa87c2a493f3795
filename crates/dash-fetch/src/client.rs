//! Blocking HTTP client for direct-download URLs.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{FetchError, Result};
use crate::resolver::{LinkResolution, resolve_share_link};

/// User agent string sent with download requests.
const USER_AGENT_VALUE: &str = concat!("data-exploration-studio/", env!("CARGO_PKG_VERSION"));

/// Client for fetching resolved share links.
///
/// One synchronous request per fetch; the pipeline is request-driven and
/// single-threaded, so nothing here is async. Redirects follow the HTTP
/// client's defaults; large-file interstitial pages are a known external
/// edge case that is not handled.
#[derive(Debug, Clone)]
pub struct DriveClient {
    client: reqwest::blocking::Client,
}

impl DriveClient {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Downloads the raw bytes behind a resolved link.
    pub fn fetch(&self, resolution: &LinkResolution) -> Result<Vec<u8>> {
        tracing::debug!(url = %resolution.download_url, "fetching dataset");
        let response = self.client.get(&resolution.download_url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        tracing::info!(
            file_id = %resolution.file_id,
            size = bytes.len(),
            "downloaded dataset"
        );
        Ok(bytes.to_vec())
    }
}

/// Resolves a share link and downloads its payload in one step.
pub fn fetch_share_link(link: &str) -> Result<Vec<u8>> {
    let resolution = resolve_share_link(link)?;
    let client = DriveClient::new()?;
    client.fetch(&resolution)
}
