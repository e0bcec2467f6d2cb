use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error in {source_name}: {message}")]
    TomlError { source_name: String, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: String, id: String },

    #[error("Rating {value} on '{id}' is outside 1..=5")]
    InvalidRating { id: String, value: u8 },

    #[error("'{value}' on '{id}' is not a known {taxonomy}")]
    UnknownTaxonomyValue {
        id: String,
        taxonomy: String,
        value: String,
    },

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Configuration,
    Fixture,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::SerializationError(_)
            | CatalogError::CsvError(_)
            | CatalogError::TomlError { .. } => ErrorCategory::Format,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CatalogError::DuplicateId { .. }
            | CatalogError::InvalidRating { .. }
            | CatalogError::UnknownTaxonomyValue { .. } => ErrorCategory::Fixture,
            CatalogError::UnknownSection(_) => ErrorCategory::Usage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Fixture => ErrorSeverity::High,
            ErrorCategory::Format => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read or write a file: {}", e),
            CatalogError::TomlError { source_name, .. } => {
                format!("{} is not valid TOML", source_name)
            }
            CatalogError::DuplicateId { collection, id } => {
                format!("The {} fixtures contain '{}' more than once", collection, id)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is readable",
            ErrorCategory::Format => "Fix the syntax of the fixture or config file",
            ErrorCategory::Configuration => {
                "Review the configuration values and their allowed ranges"
            }
            ErrorCategory::Fixture => "Correct the offending item in the fixture file",
            ErrorCategory::Usage => "Use one of: blog, case-studies, testimonials",
        }
    }

    pub fn toml(source_name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        CatalogError::TomlError {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_errors_are_high_severity() {
        let err = CatalogError::DuplicateId {
            collection: "case_studies".to_string(),
            id: "cs-1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Fixture);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("cs-1"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: CatalogError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.recovery_suggestion(), "Check that the path exists and is readable");
    }
}
