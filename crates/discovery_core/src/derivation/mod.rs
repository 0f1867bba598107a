//! Pure, presentation-neutral derivations.
//!
//! # Responsibility
//! - Compute grid placement, state of matter, body type and ordering.
//!
//! # Invariants
//! - No I/O and no shared state; every function is total.

pub mod layout;
pub mod matter;
pub mod orbit;
