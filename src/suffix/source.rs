use std::time::Duration;

use thiserror::Error;

const SUFFIX_LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("suffix list request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("suffix list request returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

/// Source of the raw public suffix list text.
pub trait FetchSuffixList {
    fn fetch(&self) -> Result<String, FetchError>;
}

/// Downloads the list from publicsuffix.org.
pub struct HttpSuffixSource {
    client: reqwest::blocking::Client,
}

impl HttpSuffixSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|source| FetchError::Transport { source })?;
        Ok(Self { client })
    }
}

impl FetchSuffixList for HttpSuffixSource {
    fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(SUFFIX_LIST_URL)
            .send()
            .map_err(|source| FetchError::Transport { source })?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }
        response
            .text()
            .map_err(|source| FetchError::Transport { source })
    }
}
