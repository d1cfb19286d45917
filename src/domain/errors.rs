/// Flat application error, one variant per boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NetworkError(String),
    ValidationError(String),
    ExportError(String),
    ConfigError(String),
    BrowserApiError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::ExportError(msg) => write!(f, "Export Error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            AppError::BrowserApiError(msg) => write!(f, "Browser API Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type NetworkResult<T> = Result<T, AppError>;
pub type ExportResult<T> = Result<T, AppError>;
