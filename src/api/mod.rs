//! Blog API client.
//!
//! [`BlogApi`] maps each REST endpoint to one async method and injects the
//! session token into every request.

pub mod client;

pub use client::{BlogApi, AUTHORIZATION};
