use crate::core::materializer::materialize;
use crate::core::schema::SchemaDeriver;
use crate::domain::model::{RawValue, Schema, Value};
use crate::domain::ports::ManifestSource;
use crate::utils::error::Result;
use std::sync::Arc;

/// 推導 Schema 並實體化 payload 的入口
pub struct QuestEngine<M: ManifestSource> {
    deriver: SchemaDeriver<M>,
}

impl<M: ManifestSource> QuestEngine<M> {
    pub fn new(source: M) -> Self {
        Self {
            deriver: SchemaDeriver::new(source),
        }
    }

    pub fn deriver(&self) -> &SchemaDeriver<M> {
        &self.deriver
    }

    pub fn schema(&self, type_name: &str) -> Result<Arc<Schema>> {
        self.deriver.derive(type_name)
    }

    /// 將原始資料載入指定型別，region 會傳遞到每個巢狀物件
    pub fn load(&self, type_name: &str, raw: &RawValue, region: &str) -> Result<Value> {
        tracing::debug!("📥 Materializing {} (region: '{}')", type_name, region);

        let schema = self.deriver.derive(type_name)?;
        let value = materialize(&schema, raw, region).inspect_err(|e| {
            tracing::warn!("⚠️ Failed to materialize {}: {}", type_name, e);
        })?;

        tracing::debug!("✅ Materialized {}", type_name);
        Ok(value)
    }

    /// 從 JSON 文字載入
    pub fn load_str(&self, type_name: &str, json: &str, region: &str) -> Result<Value> {
        let raw: RawValue = serde_json::from_str(json)?;
        self.load(type_name, &raw, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestRegistry;
    use crate::utils::error::QuestError;

    #[test]
    fn test_load_from_catalog() {
        let engine = QuestEngine::new(ManifestRegistry::with_catalog());
        let value = engine
            .load_str(
                "Summoner",
                r#"{"name": "Hide on bush", "summonerLevel": "512", "id": 77}"#,
                "kr",
            )
            .unwrap();

        let summoner = value.as_object().unwrap();
        assert_eq!(summoner.get_str("name"), Some("Hide on bush"));
        assert_eq!(summoner.get_i64("summonerLevel"), Some(512));
        assert_eq!(summoner.get_str("id"), Some("77"));
        assert_eq!(summoner.region(), "kr");
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let engine = QuestEngine::new(ManifestRegistry::with_catalog());
        assert!(matches!(
            engine.load_str("Summoner", "{not json", ""),
            Err(QuestError::SerializationError(_))
        ));
    }

    #[test]
    fn test_schema_is_memoized() {
        let engine = QuestEngine::new(ManifestRegistry::with_catalog());
        let first = engine.schema("TeamBansList").unwrap();
        let second = engine.schema("TeamBansList").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
