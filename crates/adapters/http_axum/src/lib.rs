//! # venuehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the location operations (`/api/locations`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map tagged replies into HTTP responses, choosing the status code from
//!   the reply's failure kind
//!
//! ## Dependency rule
//! Depends on `venuehub-app` (for port traits and services) and `venuehub-domain`
//! (for the request/reply contract). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
