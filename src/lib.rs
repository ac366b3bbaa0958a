pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod manifest;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpSource;
pub use app::client::QuestClient;
pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::QuestEngine, materializer::materialize, schema::SchemaDeriver};
pub use domain::model::{DomainList, DomainObject, ListKey, RawValue, ScalarKind, Schema, Value};
pub use manifest::ManifestRegistry;
pub use utils::error::{QuestError, Result};
