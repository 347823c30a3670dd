//! Error types for the plant_growth library

use thiserror::Error;

/// Result type alias for plant_growth operations
pub type Result<T> = std::result::Result<T, GrowthError>;

/// Error types for growth measurement operations
#[derive(Error, Debug)]
pub enum GrowthError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filesystem operation failed
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Day label carries no trailing day number
    #[error("Invalid day label '{label}': expected a trailing day number (e.g. \"day3\")")]
    InvalidDayLabel { label: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Persisted result table is malformed
    #[error("Malformed result table at line {line}: {reason}")]
    TableFormatError { line: usize, reason: String },

    /// Generic processing error
    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl GrowthError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error only affects a single image and the run may continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GrowthError::ImageLoadError { .. })
    }

    /// Get user-friendly error description for console display
    pub fn user_message(&self) -> String {
        match self {
            GrowthError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            GrowthError::IoError { message, .. } => {
                format!("A file operation failed: {}", message)
            }
            GrowthError::ConfigError { .. } => {
                "Could not use the configuration file. Please check that it is valid JSON."
                    .to_string()
            }
            GrowthError::InvalidDayLabel { label } => {
                format!(
                    "Day folder '{}' has no day number. \
                     Please name day folders like 'day1', 'day2'.",
                    label
                )
            }
            GrowthError::TableFormatError { line, .. } => {
                format!(
                    "The results file is damaged near line {}. Please re-run the analysis.",
                    line
                )
            }
            _ => "Growth analysis failed. Please check the dataset and try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_load_is_recoverable() {
        let err = GrowthError::image_load(
            "bad file",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt"),
        );
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("bad file"));
    }

    #[test]
    fn test_day_label_is_fatal() {
        let err = GrowthError::InvalidDayLabel {
            label: "baseline".into(),
        };
        assert!(!err.is_recoverable());
        assert!(err.user_message().contains("baseline"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = GrowthError::invalid_parameter("kernel_size", 4);
        assert_eq!(err.to_string(), "Invalid parameter: kernel_size = 4");
    }
}
