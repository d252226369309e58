//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate unique-list calls into employee-level APIs.
//! - Keep UI and command layers decoupled from list internals.

pub mod roster_service;
