//! HTTP layer for the relay.
//!
//! Four routes, all stateless: the webhook forwarder plus three
//! read-only auxiliary endpoints.

pub mod error;
pub mod handlers;
pub mod router;
