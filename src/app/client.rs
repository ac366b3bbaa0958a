use crate::app::endpoints::{self, ReturnType};
use crate::core::engine::QuestEngine;
use crate::core::{ManifestSource, PayloadSource, Value};
use crate::utils::error::{QuestError, Result};
use crate::utils::{region, template};
use std::collections::HashMap;

/// 呼叫 API 端點並依回傳型別實體化
pub struct QuestClient<S: PayloadSource, M: ManifestSource> {
    source: S,
    engine: QuestEngine<M>,
}

impl<S: PayloadSource, M: ManifestSource> QuestClient<S, M> {
    pub fn new(source: S, engine: QuestEngine<M>) -> Self {
        Self { source, engine }
    }

    pub fn engine(&self) -> &QuestEngine<M> {
        &self.engine
    }

    pub async fn call(
        &self,
        endpoint: &str,
        params: &HashMap<String, String>,
        region: &str,
    ) -> Result<Value> {
        let endpoint = endpoints::find(endpoint)?;
        let platform = region::normalize(region).ok_or_else(|| QuestError::UnknownRegion {
            region: region.to_string(),
        })?;
        let path = template::replace(endpoint.path, params)?;

        tracing::info!("📡 {} -> {} ({})", endpoint.name(), path, platform);
        let raw = self.source.fetch(platform, &path).await?;

        match endpoint.returns {
            ReturnType::Typed(type_name) => self.engine.load(type_name, &raw, platform),
            ReturnType::Declared(type_name)
                if self.engine.deriver().source().contains(type_name) =>
            {
                self.engine.load(type_name, &raw, platform)
            }
            ReturnType::Declared(type_name) => {
                tracing::debug!("📭 {} is not declared, returning raw payload", type_name);
                Ok(Value::Raw(raw))
            }
            ReturnType::Plain => Ok(Value::Raw(raw)),
        }
    }
}
