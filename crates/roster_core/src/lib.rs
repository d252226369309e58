//! Core domain logic for the employee roster.
//! This crate is the single source of truth for roster invariants.

pub mod list;
pub mod logging;
pub mod model;
pub mod service;

pub use list::change::{ListChange, Listener, ListenerId};
pub use list::unique_list::{ListError, ListResult, UniqueRecordList};
pub use list::view::ReadOnlyView;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::employee::{Employee, EmployeeFields, EmployeeValidationError};
pub use model::record::Record;
pub use model::sort_field::{supported_sort_keys, SortField, SortFieldError};
pub use service::roster_service::RosterService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
