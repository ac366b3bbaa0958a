use crate::domain::model::{DeclaredKind, ListSchema, Manifest, ObjectSchema, Schema};
use crate::domain::ports::ManifestSource;
use crate::utils::error::{QuestError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// 從 manifest 推導 Schema，並以型別名稱快取結果
pub struct SchemaDeriver<M: ManifestSource> {
    source: M,
    cache: RwLock<HashMap<String, Arc<Schema>>>,
}

impl<M: ManifestSource> SchemaDeriver<M> {
    pub fn new(source: M) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &M {
        &self.source
    }

    /// 推導指定型別的 Schema，遞迴展開所有巢狀型別
    pub fn derive(&self, type_name: &str) -> Result<Arc<Schema>> {
        let mut in_progress = Vec::new();
        self.derive_type(type_name, &mut in_progress)
    }

    fn derive_type(&self, type_name: &str, in_progress: &mut Vec<String>) -> Result<Arc<Schema>> {
        if let Some(schema) = self.cached(type_name) {
            return Ok(schema);
        }

        if let Some(start) = in_progress.iter().position(|name| name == type_name) {
            let mut cycle = in_progress[start..].to_vec();
            cycle.push(type_name.to_string());
            tracing::error!("❌ Manifest cycle: {}", cycle.join(" -> "));
            return Err(QuestError::SchemaCycleDetected {
                path: cycle.join(" -> "),
            });
        }

        in_progress.push(type_name.to_string());
        let built = self.build(type_name, in_progress);
        in_progress.pop();

        let schema = Arc::new(built?);
        tracing::debug!("🧩 Derived schema for {}", type_name);
        Ok(self.store(type_name, schema))
    }

    fn build(&self, type_name: &str, in_progress: &mut Vec<String>) -> Result<Schema> {
        match self.source.manifest(type_name)? {
            Manifest::List(element) => Ok(Schema::List(ListSchema {
                type_name: Some(type_name.to_string()),
                element: self.resolve(&element, in_progress)?,
            })),
            Manifest::Object(decls) => {
                let mut fields = Vec::with_capacity(decls.len());
                for decl in decls {
                    let schema = self.resolve(&decl.kind, in_progress)?;
                    fields.push((decl.name, schema));
                }
                Ok(Schema::Object(ObjectSchema {
                    type_name: type_name.to_string(),
                    fields,
                }))
            }
        }
    }

    fn resolve(&self, kind: &DeclaredKind, in_progress: &mut Vec<String>) -> Result<Arc<Schema>> {
        match kind {
            DeclaredKind::Scalar(scalar) => Ok(Arc::new(Schema::Scalar(*scalar))),
            DeclaredKind::Type(name) => self.derive_type(name, in_progress),
            DeclaredKind::ListOf(inner) => Ok(Arc::new(Schema::List(ListSchema {
                type_name: None,
                element: self.resolve(inner, in_progress)?,
            }))),
        }
    }

    fn cached(&self, type_name: &str) -> Option<Arc<Schema>> {
        self.cache.read().ok()?.get(type_name).cloned()
    }

    // 並行推導同一型別時保留先寫入者，後到的結果丟棄
    fn store(&self, type_name: &str, schema: Arc<Schema>) -> Arc<Schema> {
        match self.cache.write() {
            Ok(mut cache) => cache
                .entry(type_name.to_string())
                .or_insert(schema)
                .clone(),
            Err(_) => schema,
        }
    }

    pub fn cached_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .cache
            .read()
            .map(|cache| cache.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }
}
