use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid input for {expected}: '{found}'")]
    InvalidInputError { expected: String, found: String },

    #[error("Input ended while reading {expected}")]
    UnexpectedEofError { expected: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown lab: {name}")]
    UnknownLabError { name: String },

    #[error("Invalid config value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LabError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LabError::InvalidInputError { .. }
            | LabError::UnexpectedEofError { .. }
            | LabError::InvalidValueError { .. } => ErrorCategory::Input,
            LabError::UnknownLabError { .. }
            | LabError::ConfigParseError(_)
            | LabError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            LabError::IoError(_) | LabError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度對應的結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LabError::InvalidInputError { expected, .. } => {
                format!("Provide {} as a whitespace-separated token", expected)
            }
            LabError::UnexpectedEofError { .. } => {
                "Pass the lab's input with --input or an [inputs] entry in the config file"
                    .to_string()
            }
            LabError::InvalidValueError { field, reason, .. } => {
                format!("Keep {} in range: {}", field, reason)
            }
            LabError::UnknownLabError { .. } => {
                "Run `labbook list` to see the available labs".to_string()
            }
            LabError::ConfigParseError(_) => {
                "Make sure the config file is valid TOML".to_string()
            }
            LabError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the config file", field)
            }
            LabError::IoError(_) => {
                "Check file permissions and that the target directory exists".to_string()
            }
            LabError::SerializationError(_) => "Retry without --json".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LabError::InvalidInputError { expected, found } => {
                format!("Expected {}, got '{}'", expected, found)
            }
            LabError::UnexpectedEofError { expected } => {
                format!("Not enough input: still waiting for {}", expected)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = LabError::UnexpectedEofError {
            expected: "an integer".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("an integer"));
    }

    #[test]
    fn test_config_and_io_exit_codes() {
        let config = LabError::UnknownLabError {
            name: "nope".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
        assert!(config.recovery_suggestion().contains("labbook list"));

        let range = LabError::InvalidValueError {
            field: "gpa".to_string(),
            value: "9.5".to_string(),
            reason: "Value must be between 0 and 4".to_string(),
        };
        assert_eq!(range.category(), ErrorCategory::Input);
        assert_eq!(range.exit_code(), 2);

        let io = LabError::from(std::io::Error::other("disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }
}
