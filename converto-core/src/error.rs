//! Structured errors for callers of the conversion engine
//!
//! Errors never crash the system. They are values handed back to the
//! caller, which decides whether to surface them or simply show nothing.

use crate::NumberError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const CATEGORY_NOT_FOUND: &str = "CATEGORY_NOT_FOUND";
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const INVALID_MAGNITUDE: &str = "INVALID_MAGNITUDE";
    pub const AMBIGUOUS_UNITS: &str = "AMBIGUOUS_UNITS";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const NO_SESSION: &str = "NO_SESSION";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected transient state, the caller shows nothing
    Warning,
    /// The request could not be served
    Error,
    /// The process state is suspect
    Fatal,
}

/// Structured error reported to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertoError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Extra machine-readable data (e.g. candidate categories)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,

    /// Severity level
    pub severity: Severity,
}

impl ConvertoError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            details: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: attach details
    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Whether a caller should suppress output instead of reporting
    pub fn is_silent(&self) -> bool {
        self.severity == Severity::Warning
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Use the form '<value> <from> to <to>', optionally prefixed by '<category>:'")
    }

    pub fn category_not_found(category: &str) -> Self {
        Self::new(codes::CATEGORY_NOT_FOUND, format!("Category \"{}\" not found.", category))
            .with_suggestion("Use list_categories to see available categories")
    }

    pub fn unit_not_found(category: &str, unit: &str) -> Self {
        Self::new(codes::UNIT_NOT_FOUND,
            format!("Unit \"{}\" not found in category \"{}\"", unit, category))
            .with_suggestion(format!("Use get_category('{}') to list its units", category))
    }

    pub fn invalid_magnitude(input: &str) -> Self {
        Self::new(codes::INVALID_MAGNITUDE, format!("Not a finite number: \"{}\"", input))
            .with_severity(Severity::Warning)
    }

    pub fn ambiguous_units(from: &str, to: &str, candidates: &[String]) -> Self {
        Self::new(codes::AMBIGUOUS_UNITS,
            format!("Units \"{}\" and \"{}\" exist in several categories: {}",
                from, to, candidates.join(", ")))
            .with_suggestion("Prefix the query with '<category>:'")
            .with_details(JsonValue::from(candidates.to_vec()))
    }

    pub fn arg_missing(tool: &str, arg: &str) -> Self {
        Self::new(codes::ARG_MISSING, format!("{}: missing argument '{}'", tool, arg))
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str) -> Self {
        Self::new(codes::ARG_TYPE, format!("{}: argument '{}' must be {}", tool, arg, expected))
    }

    pub fn no_session() -> Self {
        Self::new(codes::NO_SESSION, "No converter session is open")
            .with_suggestion("Call session_open with a category first")
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for ConvertoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertoError {}

impl From<NumberError> for ConvertoError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::Empty => Self::invalid_magnitude(""),
            NumberError::ParseError(s) | NumberError::NonFinite(s) => Self::invalid_magnitude(&s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_suggestion() {
        let err = ConvertoError::category_not_found("not-a-real-category");
        let text = err.to_string();
        assert!(text.starts_with("[CATEGORY_NOT_FOUND]"));
        assert!(text.contains("not-a-real-category"));
        assert!(text.contains("suggestion"));
    }

    #[test]
    fn test_invalid_magnitude_is_silent() {
        let err = ConvertoError::from(NumberError::ParseError("12abc".to_string()));
        assert_eq!(err.code, codes::INVALID_MAGNITUDE);
        assert!(err.is_silent());
        assert!(!ConvertoError::unit_not_found("length", "furlongs").is_silent());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let err = ConvertoError::new(codes::INTERNAL, "boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert_eq!(json["severity"], "error");
        assert!(json.get("suggestion").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_ambiguous_units_carries_candidates() {
        let candidates = vec!["force".to_string(), "temperature".to_string()];
        let err = ConvertoError::ambiguous_units("newton", "newton", &candidates);
        assert_eq!(err.details, Some(serde_json::json!(["force", "temperature"])));
    }
}
