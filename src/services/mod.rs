//! Capability services behind the session controller.
//!
//! ARCHITECTURE
//! ============
//! The controller only sees the `Authenticator` and `DataResolver` traits.
//! The implementations here are the portal's mock transports: a small
//! credential directory standing in for the real commerce backend, and a
//! static per-segment catalog standing in for the dashboard content API.
//! Swapping in real transports does not touch the controller.

pub mod auth;
pub(crate) mod catalog;
pub mod resolver;
