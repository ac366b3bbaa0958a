pub mod error;
pub mod logger;
pub mod region;
pub mod template;
pub mod validation;
