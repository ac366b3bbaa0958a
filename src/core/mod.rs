pub mod coerce;
pub mod engine;
pub mod materializer;
pub mod schema;

pub use crate::domain::model::{DomainList, DomainObject, RawValue, Schema, Value};
pub use crate::domain::ports::{ConfigProvider, ManifestSource, PayloadSource};
pub use crate::utils::error::Result;
