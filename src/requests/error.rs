//! Request Assembly Errors
//!
//! Error taxonomy for building workflow submission payloads. Serialization
//! of a fully constructed description cannot fail, so errors only arise
//! while assembling one: an incremental builder finished without a required
//! field, or a caller-provided sub-object that is not a JSON object.

use thiserror::Error;

/// Errors produced while assembling a workflow submission payload.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The builder was finished without one of the required sequences.
    #[error("missing required field '{0}' in workflow description")]
    MissingField(&'static str),

    /// A sub-object did not serialize to a JSON object.
    #[error("{kind} payload must serialize to a JSON object, got {found}")]
    NotAnObject {
        /// Which kind of sub-object was being wrapped (e.g. "activity").
        kind: &'static str,
        /// JSON type the value actually serialized to.
        found: &'static str,
    },

    /// The underlying JSON serializer failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = RequestError::MissingField("activities");
        assert!(err.to_string().contains("'activities'"));
    }

    #[test]
    fn test_not_an_object_message() {
        let err = RequestError::NotAnObject {
            kind: "variable",
            found: "string",
        };
        let msg = err.to_string();
        assert!(msg.contains("variable"));
        assert!(msg.contains("string"));
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = json_err.to_string();
        let err = RequestError::from(json_err);
        assert_eq!(err.to_string(), expected);
    }
}
