use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefundError {
    #[error("Missing required input: {field}")]
    MissingRequiredInput { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date out of supported range: {date}")]
    DateOutOfRange { date: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Calculation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RefundError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RefundError::MissingRequiredInput { .. } | RefundError::InvalidInputError { .. } => {
                ErrorCategory::Input
            }
            RefundError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            RefundError::DateOutOfRange { .. } => ErrorCategory::Calculation,
            RefundError::IoError(_)
            | RefundError::CsvError(_)
            | RefundError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Calculation => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RefundError::MissingRequiredInput { .. } => "Please fill all fields".to_string(),
            RefundError::InvalidInputError { field, value, .. } => {
                format!("The value '{}' is not valid for {}", value, field)
            }
            RefundError::DateOutOfRange { date } => {
                format!("The date {} is outside the supported calendar range", date)
            }
            RefundError::ConfigValidationError { field, .. } => {
                format!("The configuration file has an invalid setting: {}", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RefundError::MissingRequiredInput { field } => {
                format!("Provide a value for {}", field)
            }
            RefundError::InvalidInputError { reason, .. } => reason.clone(),
            RefundError::DateOutOfRange { .. } => {
                "Use dates between the years 1 and 9999".to_string()
            }
            RefundError::ConfigValidationError { message, .. } => message.clone(),
            RefundError::IoError(_) => "Check that the file exists and is readable".to_string(),
            RefundError::CsvError(_) => {
                "Check the CSV header row and column count of each line".to_string()
            }
            RefundError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RefundError>;
