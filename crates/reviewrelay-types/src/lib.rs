//! Shared domain types for the GitLab webhook relay.
//!
//! This crate contains the types used across the relay: the startup
//! configuration snapshot, the wire types exchanged with the Mastra API,
//! probe outcomes for the auxiliary endpoints, and error types.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod config;
pub mod error;
pub mod probe;
pub mod review;
pub mod webhook;
