//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use log::info;
use roster_core::{init_logging, Employee, LoggingConfig, RosterService};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("roster_cli_logs");
    let config = LoggingConfig::with_default_level(&log_dir.to_string_lossy())?;
    init_logging(&config)?;
    info!("event=cli_start module=cli status=ok");

    println!("roster_core version={}", roster_core::core_version());

    let mut roster = RosterService::new();
    roster.set_employees(vec![
        Employee::new(
            "Bob Choo",
            "22222222",
            "bob@example.com",
            "3500",
            "10/1/2020",
            "2/5/1991",
        )?,
        Employee::new(
            "alice Pauline",
            "94351253",
            "alice@example.com",
            "4000",
            "2/1/2020",
            "12/3/1990",
        )?,
    ])?;

    for key in ["n", "d"] {
        let field = roster.sort_employees(key)?;
        let names: Vec<&str> = roster.employees().iter().map(Employee::name).collect();
        println!("sorted_by={} order={}", field.as_key(), names.join(","));
    }

    Ok(())
}
