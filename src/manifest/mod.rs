//! Manifest registry.
//!
//! Every domain type declares its shape once, as a static table of
//! `(field name, declared kind)` pairs or, for list types, a single element
//! kind. Declared kinds are kept as text and parsed on lookup:
//!
//! * scalar names: `string`, `int`/`integer`, `double`/`float`,
//!   `bool`/`boolean`, `array`/`mixed`/`raw`
//! * type names: `[A-Za-z_][A-Za-z0-9_]*`
//! * lists: `X[]` or `list<X>`, nesting allowed (`int[][]`)

pub mod catalog;

use crate::domain::model::{DeclaredKind, FieldDecl, Manifest, ScalarKind};
use crate::domain::ports::ManifestSource;
use crate::utils::error::{QuestError, Result};
use std::collections::{HashMap, HashSet};

/// 靜態宣告的型別形狀
#[derive(Debug, Clone, Copy)]
pub enum ShapeDecl {
    Object(&'static [(&'static str, &'static str)]),
    List(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct TypeDecl {
    pub name: &'static str,
    pub shape: ShapeDecl,
}

#[derive(Debug, Clone)]
enum Declaration {
    Object(Vec<(String, String)>),
    List(String),
}

#[derive(Debug, Clone, Default)]
pub struct ManifestRegistry {
    entries: HashMap<String, Declaration>,
}

impl ManifestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_decls(decls: &[TypeDecl]) -> Self {
        let mut registry = Self::new();
        for decl in decls {
            match decl.shape {
                ShapeDecl::Object(fields) => registry.register_object(
                    decl.name,
                    fields
                        .iter()
                        .map(|(name, kind)| (name.to_string(), kind.to_string()))
                        .collect(),
                ),
                ShapeDecl::List(element) => registry.register_list(decl.name, element),
            }
        }
        registry
    }

    /// 內建的 API 型別目錄
    pub fn with_catalog() -> Self {
        Self::from_decls(catalog::CATALOG)
    }

    /// 註冊（或覆蓋）物件型別
    pub fn register_object(&mut self, type_name: impl Into<String>, fields: Vec<(String, String)>) {
        let type_name = type_name.into();
        tracing::debug!("📋 Registering object manifest: {} ({} fields)", type_name, fields.len());
        self.entries.insert(type_name, Declaration::Object(fields));
    }

    /// 註冊（或覆蓋）列表型別
    pub fn register_list(&mut self, type_name: impl Into<String>, element: impl Into<String>) {
        let type_name = type_name.into();
        let element = element.into();
        tracing::debug!("📋 Registering list manifest: {} of {}", type_name, element);
        self.entries.insert(type_name, Declaration::List(element));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ManifestSource for ManifestRegistry {
    fn manifest(&self, type_name: &str) -> Result<Manifest> {
        let declaration =
            self.entries
                .get(type_name)
                .ok_or_else(|| QuestError::ManifestNotFound {
                    type_name: type_name.to_string(),
                })?;

        match declaration {
            Declaration::List(element) => {
                let kind = parse_declared_kind(element)
                    .map_err(|reason| malformed(type_name, "<element>", element, reason))?;
                Ok(Manifest::List(kind))
            }
            Declaration::Object(fields) => {
                let mut seen = HashSet::new();
                let mut decls = Vec::with_capacity(fields.len());
                for (name, declared) in fields {
                    if name.is_empty() {
                        return Err(malformed(type_name, name, declared, "empty field name".to_string()));
                    }
                    if !seen.insert(name.as_str()) {
                        return Err(malformed(type_name, name, declared, "duplicate field".to_string()));
                    }
                    let kind = parse_declared_kind(declared)
                        .map_err(|reason| malformed(type_name, name, declared, reason))?;
                    decls.push(FieldDecl {
                        name: name.clone(),
                        kind,
                    });
                }
                Ok(Manifest::Object(decls))
            }
        }
    }

    fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

fn malformed(type_name: &str, field: &str, declared: &str, reason: String) -> QuestError {
    QuestError::ManifestMalformed {
        type_name: type_name.to_string(),
        field: field.to_string(),
        declared: declared.to_string(),
        reason,
    }
}

/// 解析宣告型別字串
pub fn parse_declared_kind(text: &str) -> std::result::Result<DeclaredKind, String> {
    if text.is_empty() {
        return Err("empty kind".to_string());
    }

    if let Some(inner) = text.strip_suffix("[]") {
        return parse_declared_kind(inner).map(|kind| DeclaredKind::ListOf(Box::new(kind)));
    }

    if let Some(rest) = text.strip_prefix("list<") {
        let inner = rest
            .strip_suffix('>')
            .ok_or_else(|| "unterminated 'list<'".to_string())?;
        return parse_declared_kind(inner).map(|kind| DeclaredKind::ListOf(Box::new(kind)));
    }

    if let Some(kind) = ScalarKind::from_name(text) {
        return Ok(DeclaredKind::Scalar(kind));
    }

    if is_type_identifier(text) {
        Ok(DeclaredKind::Type(text.to_string()))
    } else {
        Err(format!(
            "'{}' is not a scalar name, type name or list marker",
            text
        ))
    }
}

fn is_type_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
