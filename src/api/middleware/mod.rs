//! HTTP middleware for request processing.
//!
//! Provides cookie session authentication and observability middleware.

pub mod session;
pub mod tracing;
