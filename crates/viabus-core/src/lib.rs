//! Shared HTTP plumbing for Viabus services.
//!
//! Probes, request ids, log setup and serde helpers.
//! Nothing in here knows about users, addresses or routes.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
