//! Unified error handling.
//!
//! Error types are generated by a macro so every variant carries a stable
//! code and a human-readable type name.

use std::fmt;

/// Defines the error enum together with:
/// - code() - stable error code
/// - error_type() - type name for logs and responses
/// - message() - error detail
/// - snake_case convenience constructors
macro_rules! define_forum_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ForumError {
            $($variant(String),)*
        }

        impl ForumError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(ForumError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ForumError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(ForumError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl ForumError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ForumError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_forum_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    Permission("E012", "Permission Error"),
    Capacity("E013", "Capacity Error"),
    Duplicate("E014", "Duplicate Error"),
}

impl ForumError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ForumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ForumError {}

impl From<sea_orm::DbErr> for ForumError {
    fn from(err: sea_orm::DbErr) -> Self {
        ForumError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ForumError {
    fn from(err: std::io::Error) -> Self {
        ForumError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ForumError {
    fn from(err: serde_json::Error) -> Self {
        ForumError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ForumError {
    fn from(err: chrono::ParseError) -> Self {
        ForumError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ForumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ForumError::cache_connection("test").code(), "E001");
        assert_eq!(ForumError::validation("test").code(), "E006");
        assert_eq!(ForumError::capacity("test").code(), "E013");
        assert_eq!(ForumError::duplicate("test").code(), "E014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(ForumError::capacity("full").error_type(), "Capacity Error");
        assert_eq!(
            ForumError::permission("not a member").error_type(),
            "Permission Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ForumError::validation("text contribution requires content");
        assert_eq!(err.message(), "text contribution requires content");
    }

    #[test]
    fn test_format_simple() {
        let err = ForumError::duplicate("already a member of this group");
        let formatted = err.format_simple();
        assert!(formatted.contains("Duplicate Error"));
        assert!(formatted.contains("already a member"));
    }
}
