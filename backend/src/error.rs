//! Error types for the BantConfirm backend.
//!
//! One enum per concern:
//!
//! - [`StoreError`] - JSON document store failures
//! - [`ValidationError`] - rejected form input
//! - [`ScoringError`] - generative-AI call failures (always absorbed by a fallback)
//! - [`AuthError`] - login, signup and session failures
//! - [`ExportError`] - CSV export failures
//! - [`MarketplaceError`] - top-level CRUD errors
//! - [`ConfigError`] - environment misconfiguration
//! - [`ServerError`] - server startup failures
//!
//! Conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Store Errors
// =============================================================================

/// Errors from the JSON document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read or write a blob.
    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored blob is not valid JSON for its expected shape.
    #[error("Stored value under '{key}' is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized.
    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The write lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    LockPoisoned,
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Rejected form input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Schema validation failed.
    #[error("Validation failed: {}", .errors.join("; "))]
    SchemaError { errors: Vec<String> },

    /// Missing required field.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid field value.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Lead wizard submitted without contact details or requirement.
    #[error("Please provide your contact details and requirement summary.")]
    IncompleteLead,
}

// =============================================================================
// Scoring Errors
// =============================================================================

/// Errors from the generative-AI client.
///
/// Callers of [`crate::ai::ScoringClient::score_lead`] never see these; they
/// are logged and replaced by the fallback analysis.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// No API key configured.
    #[error("Missing GEMINI_API_KEY")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The API answered with an error status.
    #[error("API error: {0}")]
    ApiError(String),

    /// The reply could not be interpreted.
    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),

    /// Configured timeout elapsed.
    #[error("Request timed out")]
    Timeout,
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Account and session errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Storefront login failed.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Admin portal login failed.
    #[error("Invalid business credentials.")]
    InvalidAdminCredentials,

    /// Signup with an email that already has an account.
    #[error("An account with this email already exists.")]
    EmailTaken,

    /// Missing or unknown session token.
    #[error("Authentication required")]
    Unauthorized,

    /// Session exists but lacks admin rights.
    #[error("Admin access required")]
    Forbidden,

    /// Demo bypass requested but not enabled.
    #[error("Demo admin access is disabled")]
    DemoDisabled,

    /// Signup form rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Underlying storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// =============================================================================
// Export Errors
// =============================================================================

/// CSV export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export.
    #[error("No leads to download")]
    NoLeads,

    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writer buffer could not be recovered.
    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

// =============================================================================
// Marketplace Errors (top-level)
// =============================================================================

/// Top-level CRUD errors returned by [`crate::marketplace::Marketplace`].
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// Storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Input rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Export failure.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Record not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl MarketplaceError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Environment misconfiguration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server startup errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Socket bind or serve failure.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store could not be opened.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Result type for account operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for marketplace operations.
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ValidationError -> MarketplaceError
        let err: MarketplaceError = ValidationError::MissingField("name".into()).into();
        assert!(err.to_string().contains("name"));

        // ExportError -> MarketplaceError keeps the user-facing text
        let err: MarketplaceError = ExportError::NoLeads.into();
        assert_eq!(err.to_string(), "No leads to download");
    }

    #[test]
    fn test_not_found_format() {
        let err = MarketplaceError::not_found("Vendor", "42");
        assert_eq!(err.to_string(), "Vendor not found: 42");
    }

    #[test]
    fn test_auth_messages_match_forms() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password.");
        assert_eq!(
            AuthError::InvalidAdminCredentials.to_string(),
            "Invalid business credentials."
        );
    }

    #[test]
    fn test_schema_error_joins_messages() {
        let err = ValidationError::SchemaError {
            errors: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "Validation failed: a; b");
    }
}
