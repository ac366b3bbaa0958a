use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Manifest not found for type '{type_name}'")]
    ManifestNotFound { type_name: String },

    #[error("Malformed manifest for '{type_name}.{field}': {reason} (declared: '{declared}')")]
    ManifestMalformed {
        type_name: String,
        field: String,
        declared: String,
        reason: String,
    },

    #[error("Schema cycle detected: {path}")]
    SchemaCycleDetected { path: String },

    #[error("Shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Cannot coerce {value} to {kind} at {path}")]
    ScalarCoercionError {
        path: String,
        kind: &'static str,
        value: String,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status} for {url}")]
    ApiStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown region '{region}'")]
    UnknownRegion { region: String },

    #[error("Unknown endpoint '{endpoint}'")]
    UnknownEndpoint { endpoint: String },

    #[error("Template error in '{template}': {message}")]
    TemplateError { template: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl QuestError {
    /// 錯誤嚴重程度，CLI 用來決定退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuestError::ApiError(_) | QuestError::ApiStatusError { .. } => ErrorSeverity::Medium,
            QuestError::ShapeMismatch { .. }
            | QuestError::ScalarCoercionError { .. }
            | QuestError::SerializationError(_)
            | QuestError::UnknownRegion { .. }
            | QuestError::UnknownEndpoint { .. }
            | QuestError::TemplateError { .. }
            | QuestError::ConfigValidationError { .. }
            | QuestError::InvalidConfigValueError { .. }
            | QuestError::MissingConfigError { .. } => ErrorSeverity::High,
            QuestError::ManifestNotFound { .. }
            | QuestError::ManifestMalformed { .. }
            | QuestError::SchemaCycleDetected { .. }
            | QuestError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            QuestError::ManifestNotFound { type_name } => format!(
                "Declare a manifest for '{}' in the catalog or under [[manifests]] in the config file",
                type_name
            ),
            QuestError::ManifestMalformed { .. } => {
                "Use a scalar name (string, int, double, boolean, array), a type name, or 'X[]'"
                    .to_string()
            }
            QuestError::SchemaCycleDetected { .. } => {
                "Break the self reference between the listed manifests".to_string()
            }
            QuestError::ShapeMismatch { .. } | QuestError::ScalarCoercionError { .. } => {
                "The payload does not match the declared manifest; check the requested type"
                    .to_string()
            }
            QuestError::ApiError(_) | QuestError::ApiStatusError { .. } => {
                "Check network connectivity, the API key and rate limits, then retry".to_string()
            }
            QuestError::UnknownRegion { .. } => {
                "Use a platform id such as na1, euw1, kr or an alias like 'north-america'"
                    .to_string()
            }
            QuestError::UnknownEndpoint { .. } => {
                "Run with --list-types to see the supported endpoints".to_string()
            }
            QuestError::TemplateError { .. } => {
                "Pass every path placeholder with --param name=value".to_string()
            }
            QuestError::ConfigValidationError { .. }
            | QuestError::InvalidConfigValueError { .. }
            | QuestError::MissingConfigError { .. } => {
                "Fix the configuration file or command line arguments".to_string()
            }
            QuestError::IoError(_) => "Check that the file exists and is readable".to_string(),
            QuestError::SerializationError(_) => "Make sure the payload is valid JSON".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuestError::ApiError(_) | QuestError::ApiStatusError { .. } => {
                format!("Could not fetch data from the API: {}", self)
            }
            QuestError::ShapeMismatch { .. } | QuestError::ScalarCoercionError { .. } => {
                format!("Payload could not be materialized: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuestError>;
