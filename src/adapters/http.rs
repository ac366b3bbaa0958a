use crate::core::{ConfigProvider, PayloadSource, RawValue};
use crate::utils::error::{QuestError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const API_KEY_HEADER: &str = "X-Riot-Token";

/// 以 reqwest 向 API 取得原始 JSON
pub struct HttpSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        if config.api_key().is_none() {
            tracing::warn!("⚠️ No API key configured, requests will likely be rejected");
        }
        Ok(Self {
            client,
            base_url: config.api_base_url().to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    /// `{platform}` 換成平台代號後接上路徑
    pub fn url_for(&self, platform: &str, path: &str) -> String {
        format!(
            "{}{}",
            self.base_url.replace("{platform}", platform).trim_end_matches('/'),
            path
        )
    }
}

#[async_trait]
impl PayloadSource for HttpSource {
    async fn fetch(&self, platform: &str, path: &str) -> Result<RawValue> {
        let url = self.url_for(platform, path);

        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        tracing::debug!("📡 Making API request to: {}", url);
        let response = request.send().await?;
        tracing::debug!("📡 API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(QuestError::ApiStatusError {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}
