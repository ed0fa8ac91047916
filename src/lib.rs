//! Foglio: view-state core and HTTP adapter for a blog-post API client.
//!
//! The application layer owns a transport-free state machine over an ordered
//! post store; the infra layer supplies the `reqwest`-backed adapter the
//! binary wires in.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
