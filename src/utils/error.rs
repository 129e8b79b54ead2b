use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("FTP {step} failed: {source}")]
    FtpError {
        step: &'static str,
        #[source]
        source: suppaftp::FtpError,
    },

    #[error("Upload task failed: {message}")]
    UploadTaskFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected API response at offset {offset}: {message}")]
    InvalidResponse { offset: usize, message: String },

    #[error("Record is missing column '{column}'")]
    MissingField { column: String },

    #[error("Entry count mismatch: fetched {fetched} records but built {entries} entries")]
    CountMismatch { fetched: usize, entries: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Coarse grouping used when reporting a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Io,
    Data,
    Config,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::ApiError(_)
            | ExportError::HttpStatus { .. }
            | ExportError::FtpError { .. }
            | ExportError::UploadTaskFailed { .. } => ErrorCategory::Transport,
            ExportError::IoError(_) => ErrorCategory::Io,
            ExportError::SerializationError(_)
            | ExportError::InvalidResponse { .. }
            | ExportError::MissingField { .. }
            | ExportError::CountMismatch { .. } => ErrorCategory::Data,
            ExportError::ConfigError { .. }
            | ExportError::InvalidConfigValueError { .. }
            | ExportError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Transport => format!("Network transfer failed: {}", self),
            ErrorCategory::Io => format!("Could not write export files: {}", self),
            ErrorCategory::Data => format!("Search index returned unexpected data: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let io = ExportError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert_eq!(io.category(), ErrorCategory::Io);

        let status = ExportError::HttpStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost/search_index".to_string(),
        };
        assert_eq!(status.category(), ErrorCategory::Transport);
        assert!(status.to_string().contains("500"));

        let missing = ExportError::MissingField {
            column: "histology".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Data);
        assert!(missing.user_friendly_message().contains("histology"));
    }
}
