//! Lenscraft domain core.
//!
//! Entities and pure business logic for the agency management platform:
//! the client directory, project pipeline, service catalog, resource
//! records, quotations and billing, plus the authentication gate. This
//! crate has no I/O; persistence and the assistant integration live in
//! their own crates and build on the types defined here.

pub mod auth;
pub mod billing;
pub mod catalog;
pub mod client;
pub mod error;
pub mod ids;
pub mod log;
pub mod pipeline;
pub mod project;
pub mod quotation;
pub mod resources;
pub mod types;
