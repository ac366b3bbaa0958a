use crate::domain::model::{Manifest, RawValue};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 型別 manifest 的來源（靜態表、設定檔等）
pub trait ManifestSource: Send + Sync {
    fn manifest(&self, type_name: &str) -> Result<Manifest>;

    fn contains(&self, type_name: &str) -> bool;

    fn type_names(&self) -> Vec<String>;
}

/// 取得原始 payload 的傳輸層
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn fetch(&self, platform: &str, path: &str) -> Result<RawValue>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout(&self) -> Duration;
    fn default_region(&self) -> &str;
}
