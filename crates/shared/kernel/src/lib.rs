//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it provides config loading and the server
//! plumbing every slice relies on (health endpoint, locale extraction).

pub mod config;
pub mod server;

pub use vitrine_domain as domain;
