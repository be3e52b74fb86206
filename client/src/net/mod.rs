//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` picks the API base, `gateway` attaches the bearer token and
//! reacts to authorization failures, `endpoints` names every backend route,
//! and `types` defines the shared wire schema.

pub mod config;
pub mod endpoints;
pub mod gateway;
pub mod types;
