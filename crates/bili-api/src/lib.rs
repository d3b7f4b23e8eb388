//! Web and app backends for the bili user access layer.
//!
//! `DefaultBiliClient` implements [`bili_core::UserPort`] on top of three
//! transports: the cookie-authenticated web HTTP API, the token-authenticated
//! app HTTP API, and the app gRPC surface used for the dynamic feed. Callers
//! pick a [`bili_core::TransportMode`] per call and always get the same
//! normalized types back.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultBiliClient is meant to be used
// through the UserPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod endpoints;
mod error;
mod http;
mod models;
mod pagination;
mod parsing;
mod port;
mod rpc;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultBiliClient;

// Configuration
pub use config::ApiClientConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;
