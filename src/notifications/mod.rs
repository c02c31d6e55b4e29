//! Completion Notifications
//!
//! When a submitted workflow finishes processing, the orchestration service
//! sends a POST to the `notification` URL given in the workflow description.
//! This module models that inbound message body so applications can decode
//! it; serving the endpoint that receives the POST is up to the application.
//!
//! # Message Format
//!
//! ```json
//! {
//!   "href": "https://service/workflows/4711",
//!   "group_id": "4711",
//!   "status": "SUCCESSFUL",
//!   "statusMessage": "workflow finished"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::requests::RequestError;

/// Status update delivered to the notification URL of a workflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusNotification {
    /// URL of the workflow resource on the service.
    pub href: String,

    /// Identifier of the workflow or sub-workflow the update refers to.
    pub group_id: String,

    /// Final status reported by the service.
    pub status: String,

    /// Human-readable detail accompanying the status.
    #[serde(rename = "statusMessage")]
    pub status_message: String,
}

impl StatusNotification {
    /// Decodes a notification from the raw POST body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_notification_body() {
        let body = r#"{
            "href": "https://service/workflows/4711",
            "group_id": "4711",
            "status": "SUCCESSFUL",
            "statusMessage": "workflow finished"
        }"#;

        let notice = StatusNotification::from_json(body).unwrap();
        assert_eq!(notice.href, "https://service/workflows/4711");
        assert_eq!(notice.group_id, "4711");
        assert_eq!(notice.status, "SUCCESSFUL");
        assert_eq!(notice.status_message, "workflow finished");
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(StatusNotification::from_json("not json").is_err());
    }

    #[test]
    fn test_status_message_wire_name() {
        let notice = StatusNotification {
            href: "https://service/workflows/1".to_string(),
            group_id: "1".to_string(),
            status: "FAILED".to_string(),
            status_message: "activity 'run' exited with code 1".to_string(),
        };

        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(
            value,
            json!({
                "href": "https://service/workflows/1",
                "group_id": "1",
                "status": "FAILED",
                "statusMessage": "activity 'run' exited with code 1"
            })
        );
    }
}
