//! Networking for the portal forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the backend contract and its browser implementation, and
//! `types` defines the wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod api_fake;
