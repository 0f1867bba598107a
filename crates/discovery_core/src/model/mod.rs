//! Normalized record schema for both catalogs.
//!
//! # Responsibility
//! - Define the canonical element and celestial-body shapes.
//! - Keep derived attributes as methods, never as stored fields.
//!
//! # Invariants
//! - Every record is identified by one declared key (`atomic_number`, `id`).
//! - Non-identity fields are optional and decode to declared defaults.

pub mod body;
pub mod body_narrative;
pub mod body_physical;
pub mod body_planetary;
pub mod body_stellar;
pub mod element;
pub mod flexible;
