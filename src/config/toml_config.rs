use crate::core::ConfigProvider;
use crate::manifest::ManifestRegistry;
use crate::utils::error::{QuestError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://{platform}.api.riotgames.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

static ENV_VAR: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub manifests: Vec<ManifestConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub default_region: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: None,
            default_region: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// 設定檔中額外宣告的型別，`fields` 與 `list` 擇一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    pub name: String,
    pub fields: Option<Vec<FieldConfig>>,
    pub list: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    pub kind: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuestError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STAT_QUEST_API_KEY})，未設定的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = (*ENV_VAR).as_ref().map_err(|e| QuestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(
        &mut self,
        api_key: Option<String>,
        base_url: Option<String>,
        region: Option<String>,
    ) {
        if let Some(api_key) = api_key {
            self.client.api_key = Some(api_key);
        }
        if let Some(base_url) = base_url {
            tracing::info!("🔧 Base URL overridden to: {}", base_url);
            self.client.base_url = base_url;
        }
        if let Some(region) = region {
            self.client.default_region = Some(region);
        }
    }

    /// 把設定檔中的 manifest 註冊進 registry（同名者覆蓋內建）
    pub fn register_manifests(&self, registry: &mut ManifestRegistry) {
        for manifest in &self.manifests {
            if let Some(element) = &manifest.list {
                registry.register_list(manifest.name.clone(), element.clone());
            } else if let Some(fields) = &manifest.fields {
                registry.register_object(
                    manifest.name.clone(),
                    fields
                        .iter()
                        .map(|f| (f.name.clone(), f.kind.clone()))
                        .collect(),
                );
            }
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("client.base_url", &self.client.base_url)?;

        if let Some(timeout) = self.client.timeout_seconds {
            crate::utils::validation::validate_range("client.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(region) = &self.client.default_region {
            crate::utils::validation::validate_region("client.default_region", region)?;
        }

        for (index, manifest) in self.manifests.iter().enumerate() {
            crate::utils::validation::validate_non_empty_string(
                &format!("manifests[{}].name", index),
                &manifest.name,
            )?;
            if manifest.fields.is_some() == manifest.list.is_some() {
                return Err(QuestError::ConfigValidationError {
                    field: format!("manifests.{}", manifest.name),
                    message: "Declare exactly one of 'fields' or 'list'".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.client.base_url
    }

    fn api_key(&self) -> Option<&str> {
        // 未被替換的 ${VAR} 視為沒有設定
        self.client
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty() && !key.starts_with("${"))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn default_region(&self) -> &str {
        self.client.default_region.as_deref().unwrap_or("")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
