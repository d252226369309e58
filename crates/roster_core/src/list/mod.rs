//! Identity-unique record collections.
//!
//! # Responsibility
//! - Keep an ordered, duplicate-free sequence of records.
//! - Expose a borrowed read-only view and change notifications to observers.
//!
//! # Invariants
//! - Single-threaded: listeners run synchronously inside the mutating call.
//! - Every operation is all-or-nothing.

pub mod change;
pub mod unique_list;
pub mod view;
