//! Opaque Payload Sub-Objects
//!
//! Wrappers for the JSON fragments that make up a workflow submission:
//! activities, transitions, and variables. The submission core never looks
//! inside these values. It only guarantees each one is a JSON object, so
//! the assembled request body is structurally well-formed; whether the
//! contents describe a valid workflow graph is judged by the remote service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::RequestError;

/// A JSON object mapping, as emitted into the request body.
pub type JsonMap = Map<String, Value>;

/// A single task node within a workflow graph.
///
/// Whatever JSON object the caller provides is forwarded to the remote
/// service unchanged.
///
/// # Example
///
/// ```
/// use flowsubmit::Activity;
/// use serde_json::json;
///
/// let activity = Activity::from_serializable(&json!({
///     "id": "stage-in",
///     "type": "START",
/// }))
/// .unwrap();
///
/// assert_eq!(activity.as_map()["id"], "stage-in");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Activity(JsonMap);

/// A directed edge between two activities, encoding execution order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Transition(JsonMap);

/// A named value scoped to a workflow instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Variable(JsonMap);

macro_rules! payload_impl {
    ($type:ident, $kind:literal) => {
        impl $type {
            /// Wraps an existing JSON object as a payload.
            pub fn from_map(map: JsonMap) -> Self {
                Self(map)
            }

            /// Serializes any value into a payload.
            ///
            /// Fails with [`RequestError::NotAnObject`] when the value does
            /// not serialize to a JSON object.
            pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, RequestError> {
                let value = serde_json::to_value(value)?;
                into_object($kind, value).map(Self)
            }

            /// Borrows the underlying JSON object.
            pub fn as_map(&self) -> &JsonMap {
                &self.0
            }

            /// Produces the JSON value emitted into the request body.
            pub fn to_value(&self) -> Value {
                Value::Object(self.0.clone())
            }

            /// Consumes the payload, yielding its JSON value.
            pub fn into_value(self) -> Value {
                Value::Object(self.0)
            }
        }

        impl From<JsonMap> for $type {
            fn from(map: JsonMap) -> Self {
                Self(map)
            }
        }
    };
}

payload_impl!(Activity, "activity");
payload_impl!(Transition, "transition");
payload_impl!(Variable, "variable");

fn into_object(kind: &'static str, value: Value) -> Result<JsonMap, RequestError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(RequestError::NotAnObject {
            kind,
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct EchoTask {
        id: String,
        command: String,
    }

    #[test]
    fn test_activity_from_serializable_struct() {
        let task = EchoTask {
            id: "echo".to_string(),
            command: "echo hello".to_string(),
        };

        let activity = Activity::from_serializable(&task).unwrap();
        assert_eq!(activity.as_map()["id"], "echo");
        assert_eq!(activity.as_map()["command"], "echo hello");
    }

    #[test]
    fn test_activity_from_serializable_json_value() {
        let activity = Activity::from_serializable(&json!({"id": "a1"})).unwrap();
        assert_eq!(activity.to_value(), json!({"id": "a1"}));
    }

    #[test]
    fn test_from_serializable_rejects_scalar() {
        let result = Variable::from_serializable(&42);
        assert!(matches!(
            result,
            Err(RequestError::NotAnObject {
                kind: "variable",
                found: "number",
            })
        ));
    }

    #[test]
    fn test_from_serializable_rejects_array() {
        let result = Transition::from_serializable(&json!(["from", "to"]));
        assert!(matches!(
            result,
            Err(RequestError::NotAnObject {
                kind: "transition",
                found: "array",
            })
        ));
    }

    #[test]
    fn test_from_map_preserves_contents() {
        let mut map = JsonMap::new();
        map.insert("name".to_string(), json!("COUNTER"));
        map.insert("initial_value".to_string(), json!(0));

        let variable = Variable::from_map(map.clone());
        assert_eq!(variable.as_map(), &map);
        assert_eq!(variable.into_value(), Value::Object(map));
    }

    #[test]
    fn test_transparent_serialization() {
        let activity = Activity::from_serializable(&json!({"id": "a1"})).unwrap();
        let serialized = serde_json::to_value(&activity).unwrap();

        // No wrapper layer in the wire format
        assert_eq!(serialized, json!({"id": "a1"}));
    }

    #[test]
    fn test_transparent_deserialization() {
        let transition: Transition =
            serde_json::from_value(json!({"from": "a1", "to": "a2"})).unwrap();
        assert_eq!(transition.as_map()["from"], "a1");
        assert_eq!(transition.as_map()["to"], "a2");
    }
}
