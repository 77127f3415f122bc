//! Outbound HTTP client for the remote Mastra API.
//!
//! The relay makes exactly one kind of state-changing call (executing the
//! code-review workflow) and a handful of best-effort read-only probes.
//! All of them go through [`MastraClient`].

pub mod client;

pub use client::{MastraClient, MastraDiagnostics};
