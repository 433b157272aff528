//! # venuehub-domain
//!
//! Pure domain model for the venuehub location service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Locations** (venues with an address) and the **Seats** they own
//! - Define the request/reply **contract** of the five location operations
//! - Generate **seat layouts** from seat, row and gate counts
//! - Run the **validation pipeline** that guards every mutating operation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod contract;
pub mod location;
pub mod seat_layout;
pub mod validation;
