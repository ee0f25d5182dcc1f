//! Domain model for tasks and their genres.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep enum field sets closed (three-way status, three-way priority).
//!
//! # Invariants
//! - Every record is identified by a store-assigned integer id.
//! - `status`/`priority` are always one of their named variants; raw
//!   integers never leak outward.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod genre;
pub mod task;
