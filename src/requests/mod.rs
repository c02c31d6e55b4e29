//! Workflow Submission Requests
//!
//! Data structures for the request body of a workflow submission. The types
//! here are pure values: they are built in memory, converted once into a
//! JSON-ready mapping, and handed to whatever HTTP transport the application
//! uses. Sending the request, authentication, and retries all live outside
//! this crate.
//!
//! # Structure
//!
//! - [`description`]: the workflow description and its incremental builder
//! - [`payload`]: opaque activity/transition/variable payload wrappers
//! - [`error`]: errors raised while assembling a submission

pub mod description;
pub mod error;
pub mod payload;

pub use description::{WorkflowDescription, WorkflowDescriptionBuilder};
pub use error::RequestError;
pub use payload::{Activity, JsonMap, Transition, Variable};
