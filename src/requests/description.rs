//! Workflow Description
//!
//! The request body for submitting a workflow to the orchestration service.
//!
//! # Example Request Body
//!
//! ```json
//! {
//!   "activities":   [ { "id": "stage-in", ... } ],
//!   "subworkflows": null,
//!   "transitions":  [ { "from": "stage-in", "to": "run" } ],
//!   "variables":    [ { "name": "COUNTER", "initial_value": 0 } ],
//!   "notification": "https://example.org/callback",
//!   "tags":         [ "prod" ]
//! }
//! ```
//!
//! All six keys are always present. Optional fields that were not supplied
//! are sent as explicit `null`, which is what the service expects; the three
//! required sequences are sent as-is, even when empty.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::RequestError;
use super::payload::{Activity, JsonMap, Transition, Variable};

/// A complete workflow submission.
///
/// Holds the execution graph (activities plus transitions), the workflow
/// variables, and the optional extras the service accepts: nested
/// sub-workflows, a completion-notification URL, and tags for later
/// filtering. Consistency between transitions and activities is not checked
/// here; the service validates the graph on submission.
///
/// The field order matches the service's documented body layout.
///
/// # Example
///
/// ```
/// use flowsubmit::{Activity, Transition, WorkflowDescription};
/// use serde_json::json;
///
/// let stage_in = Activity::from_serializable(&json!({"id": "stage-in"})).unwrap();
/// let run = Activity::from_serializable(&json!({"id": "run"})).unwrap();
/// let edge = Transition::from_serializable(&json!({"from": "stage-in", "to": "run"})).unwrap();
///
/// let description = WorkflowDescription::new(vec![stage_in, run], vec![edge], vec![])
///     .with_notification("https://example.org/callback")
///     .with_tags(vec!["prod".to_string()]);
///
/// let body = description.to_mapping();
/// assert_eq!(body.len(), 6);
/// assert_eq!(body["notification"], json!("https://example.org/callback"));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowDescription {
    /// Task nodes of the workflow graph, in declaration order.
    pub activities: Vec<Activity>,

    /// Workflows nested inside this one, if any.
    pub subworkflows: Option<Vec<WorkflowDescription>>,

    /// Directed edges between activities, in declaration order.
    pub transitions: Vec<Transition>,

    /// Named values scoped to the workflow instance.
    pub variables: Vec<Variable>,

    /// URL the service POSTs a status update to once the workflow
    /// has finished processing.
    pub notification: Option<String>,

    /// Tags for filtering the workflow listing.
    pub tags: Option<Vec<String>>,
}

impl WorkflowDescription {
    /// Creates a description from the three required sequences.
    ///
    /// The optional fields start out unset and can be added with the
    /// `with_*` methods.
    pub fn new(
        activities: Vec<Activity>,
        transitions: Vec<Transition>,
        variables: Vec<Variable>,
    ) -> Self {
        Self {
            activities,
            subworkflows: None,
            transitions,
            variables,
            notification: None,
            tags: None,
        }
    }

    /// Returns an empty incremental builder.
    pub fn builder() -> WorkflowDescriptionBuilder {
        WorkflowDescriptionBuilder::new()
    }

    /// Sets the nested sub-workflows.
    pub fn with_subworkflows(mut self, subworkflows: Vec<WorkflowDescription>) -> Self {
        self.subworkflows = Some(subworkflows);
        self
    }

    /// Sets the completion-notification URL.
    pub fn with_notification(mut self, url: impl Into<String>) -> Self {
        self.notification = Some(url.into());
        self
    }

    /// Sets the filter tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Converts the description into the request-body mapping.
    ///
    /// The result always carries exactly six keys: `activities`,
    /// `subworkflows`, `transitions`, `variables`, `notification`, and
    /// `tags`. Unset optionals are emitted as explicit `null`, and nested
    /// sub-workflows are converted recursively with the same rules.
    ///
    /// The conversion is pure: identical field values always produce an
    /// identical mapping, and calling it twice yields equal results.
    pub fn to_mapping(&self) -> JsonMap {
        let mut body = JsonMap::new();

        body.insert(
            "activities".to_string(),
            Value::Array(self.activities.iter().map(Activity::to_value).collect()),
        );
        body.insert(
            "subworkflows".to_string(),
            match &self.subworkflows {
                Some(subs) => Value::Array(
                    subs.iter()
                        .map(|sub| Value::Object(sub.to_mapping()))
                        .collect(),
                ),
                None => Value::Null,
            },
        );
        body.insert(
            "transitions".to_string(),
            Value::Array(self.transitions.iter().map(Transition::to_value).collect()),
        );
        body.insert(
            "variables".to_string(),
            Value::Array(self.variables.iter().map(Variable::to_value).collect()),
        );
        body.insert(
            "notification".to_string(),
            match &self.notification {
                Some(url) => Value::String(url.clone()),
                None => Value::Null,
            },
        );
        body.insert(
            "tags".to_string(),
            match &self.tags {
                Some(tags) => Value::Array(tags.iter().cloned().map(Value::String).collect()),
                None => Value::Null,
            },
        );

        body
    }
}

/// Incremental builder for [`WorkflowDescription`].
///
/// Useful when a submission is assembled piece by piece, e.g. while walking
/// a user-supplied graph definition. The three required sequences must each
/// be supplied at least once (an explicitly empty sequence is fine);
/// [`build`](Self::build) fails fast otherwise.
///
/// # Example
///
/// ```
/// use flowsubmit::{Activity, WorkflowDescription};
/// use serde_json::json;
///
/// let description = WorkflowDescription::builder()
///     .activity(Activity::from_serializable(&json!({"id": "run"})).unwrap())
///     .transitions(vec![])
///     .variables(vec![])
///     .tag("nightly")
///     .build()
///     .unwrap();
///
/// assert_eq!(description.activities.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkflowDescriptionBuilder {
    activities: Option<Vec<Activity>>,
    transitions: Option<Vec<Transition>>,
    variables: Option<Vec<Variable>>,
    subworkflows: Option<Vec<WorkflowDescription>>,
    notification: Option<String>,
    tags: Option<Vec<String>>,
}

impl WorkflowDescriptionBuilder {
    /// Creates a builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full activity sequence.
    pub fn activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = Some(activities);
        self
    }

    /// Appends a single activity.
    pub fn activity(mut self, activity: Activity) -> Self {
        self.activities.get_or_insert_with(Vec::new).push(activity);
        self
    }

    /// Sets the full transition sequence.
    pub fn transitions(mut self, transitions: Vec<Transition>) -> Self {
        self.transitions = Some(transitions);
        self
    }

    /// Appends a single transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.get_or_insert_with(Vec::new).push(transition);
        self
    }

    /// Sets the full variable sequence.
    pub fn variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Appends a single variable.
    pub fn variable(mut self, variable: Variable) -> Self {
        self.variables.get_or_insert_with(Vec::new).push(variable);
        self
    }

    /// Appends a nested sub-workflow.
    pub fn subworkflow(mut self, subworkflow: WorkflowDescription) -> Self {
        self.subworkflows
            .get_or_insert_with(Vec::new)
            .push(subworkflow);
        self
    }

    /// Sets the completion-notification URL.
    pub fn notification(mut self, url: impl Into<String>) -> Self {
        self.notification = Some(url.into());
        self
    }

    /// Sets the full tag sequence.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Appends a single tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    /// Finishes the builder.
    ///
    /// # Returns
    ///
    /// * `Ok(WorkflowDescription)` - all required sequences were supplied
    /// * `Err(RequestError::MissingField)` - `activities`, `transitions`,
    ///   or `variables` was never set
    pub fn build(self) -> Result<WorkflowDescription, RequestError> {
        let activities = self
            .activities
            .ok_or(RequestError::MissingField("activities"))?;
        let transitions = self
            .transitions
            .ok_or(RequestError::MissingField("transitions"))?;
        let variables = self
            .variables
            .ok_or(RequestError::MissingField("variables"))?;

        debug!(
            "Built workflow description: {} activities, {} transitions, {} variables",
            activities.len(),
            transitions.len(),
            variables.len()
        );

        Ok(WorkflowDescription {
            activities,
            subworkflows: self.subworkflows,
            transitions,
            variables,
            notification: self.notification,
            tags: self.tags,
        })
    }
}
