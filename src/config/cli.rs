use crate::core::RawValue;
use crate::utils::error::{QuestError, Result};
use std::collections::HashMap;
use std::io::Read;

/// 解析 `name=value` 形式的路徑參數
pub fn parse_params(params: &[String]) -> Result<HashMap<String, String>> {
    let mut parsed = HashMap::new();
    for param in params {
        let (name, value) = param
            .split_once('=')
            .ok_or_else(|| QuestError::InvalidConfigValueError {
                field: "--param".to_string(),
                value: param.clone(),
                reason: "Expected name=value".to_string(),
            })?;
        if name.is_empty() {
            return Err(QuestError::InvalidConfigValueError {
                field: "--param".to_string(),
                value: param.clone(),
                reason: "Parameter name cannot be empty".to_string(),
            });
        }
        parsed.insert(name.to_string(), value.to_string());
    }
    Ok(parsed)
}

/// 讀取本地 payload：檔案路徑或 `-`（stdin）
pub fn read_input(input: &str) -> Result<RawValue> {
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input)?
    };
    tracing::debug!("📂 Read {} bytes from {}", content.len(), input);
    Ok(serde_json::from_str(&content)?)
}
