//! 薬局ディレクトリAPIクライアント（reqwest）

use std::time::Duration;

use eczane_common::{decode_response, endpoint_url, Endpoint, Error, PharmacyRecord};
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;

pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("izmir-eczane/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.effective_base_url(), config.timeout_seconds)
    }

    /// リストを1回取得（リトライ・キャッシュなし）
    pub async fn load(&self, endpoint: Endpoint) -> std::result::Result<Vec<PharmacyRecord>, Error> {
        let url = endpoint_url(&self.base_url, endpoint);
        debug!(%url, "fetching pharmacy directory");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let records = decode_response(status, &body)?;
        info!(count = records.len(), endpoint = endpoint.path(), "pharmacy directory loaded");
        Ok(records)
    }
}
