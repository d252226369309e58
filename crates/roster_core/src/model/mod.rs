//! Domain model for the employee roster.
//!
//! # Responsibility
//! - Define the employee record and its field validation rules.
//! - Define the record contract (identity vs full equality) that unique
//!   lists rely on.
//! - Define the closed set of sortable fields.
//!
//! # Invariants
//! - A record's identity never depends on salary or dates.
//! - Full equality is structural over every field.

pub mod employee;
pub mod record;
pub mod sort_field;
