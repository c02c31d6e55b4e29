//! Flowsubmit - Workflow Submission Payloads
//!
//! A data-modeling library for talking to a remote workflow-orchestration
//! REST service. It represents the body of a workflow-submission request as
//! plain Rust values and serializes them into the JSON mapping the service
//! expects. There is no network code here: the produced mapping is attached
//! to an HTTP request by whatever transport the application already uses.
//!
//! # Architecture
//!
//! The library is organized into two modules:
//!
//! - [`requests`]: the workflow description, its builder, and the opaque
//!   activity/transition/variable payload wrappers
//! - [`notifications`]: the status message the service POSTs back when a
//!   workflow finishes
//!
//! # Example
//!
//! ```rust
//! use flowsubmit::{Activity, Transition, WorkflowDescription};
//! use serde_json::json;
//!
//! fn main() -> Result<(), flowsubmit::RequestError> {
//!     let stage_in = Activity::from_serializable(&json!({"id": "stage-in"}))?;
//!     let run = Activity::from_serializable(&json!({"id": "run"}))?;
//!     let edge = Transition::from_serializable(&json!({"from": "stage-in", "to": "run"}))?;
//!
//!     let description = WorkflowDescription::new(vec![stage_in, run], vec![edge], vec![])
//!         .with_notification("https://example.org/callback")
//!         .with_tags(vec!["prod".to_string()]);
//!
//!     // Hand this mapping to your HTTP client as the POST body.
//!     let body = description.to_mapping();
//!     assert_eq!(body.len(), 6);
//!     Ok(())
//! }
//! ```

pub mod notifications;
pub mod requests;

// Re-export commonly used types
pub use notifications::StatusNotification;
pub use requests::{
    Activity, JsonMap, RequestError, Transition, Variable, WorkflowDescription,
    WorkflowDescriptionBuilder,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_module_exports_description() {
        let description = WorkflowDescription::new(vec![], vec![], vec![]);
        assert!(description.activities.is_empty());
        assert_eq!(description.to_mapping().len(), 6);
    }

    #[test]
    fn test_module_exports_builder() {
        let result = WorkflowDescriptionBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_module_exports_payloads() {
        let activity = Activity::from_serializable(&json!({"id": "a1"})).unwrap();
        assert_eq!(activity.as_map()["id"], "a1");
    }
}
