//! # venuehub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `LocationRepository`: persistence of locations and their seats
//!   - `CacheHandler`: keyed slots with a time-to-live
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `LocationService`: create, get by id, list, update, delete
//! - Provide **in-process infrastructure** (the TTL cache) that doesn't need IO
//! - Keep the cached location list in step with the store after every write
//!
//! ## Dependency rule
//! Depends on `venuehub-domain` only (plus `tokio::sync`/`tokio::time` for the cache).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod cache;
pub mod ports;
pub mod services;
