//! Roster use-case service.
//!
//! # Responsibility
//! - Provide the employee-level entry points application layers call.
//! - Emit metadata-only diagnostic events for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass `UniqueRecordList` uniqueness checks.
//! - Log events never include employee field values.

use crate::list::change::{Listener, ListenerId};
use crate::list::unique_list::{ListResult, UniqueRecordList};
use crate::list::view::ReadOnlyView;
use crate::model::employee::Employee;
use crate::model::sort_field::SortField;
use log::{debug, warn};

/// Use-case facade over the employee roster.
#[derive(Debug, Default)]
pub struct RosterService {
    employees: UniqueRecordList<Employee>,
}

impl RosterService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether an employee with the same identity is on the roster.
    pub fn has_employee(&self, employee: &Employee) -> bool {
        self.employees.contains(employee)
    }

    /// Adds one employee to the end of the roster.
    pub fn add_employee(&mut self, employee: Employee) -> ListResult<()> {
        let result = self.employees.add(employee);
        self.log_outcome("employee_add", &result);
        result
    }

    /// Replaces `target` with its edited version, keeping roster position.
    pub fn set_employee(&mut self, target: &Employee, edited: Employee) -> ListResult<()> {
        let result = self.employees.replace(target, edited);
        self.log_outcome("employee_set", &result);
        result
    }

    /// Removes the employee whose fields all match `employee`.
    pub fn remove_employee(&mut self, employee: &Employee) -> ListResult<Employee> {
        let result = self.employees.remove(employee);
        self.log_outcome("employee_remove", &result);
        result
    }

    /// Replaces the whole roster.
    pub fn set_employees(&mut self, employees: Vec<Employee>) -> ListResult<()> {
        let result = self.employees.replace_all(employees);
        self.log_outcome("employee_set_all", &result);
        result
    }

    /// Replaces the whole roster with another roster's employees.
    pub fn reset_from(&mut self, other: &RosterService) {
        self.employees.replace_all_from(&other.employees);
        self.log_outcome("employee_reset", &Ok(()));
    }

    /// Sorts the roster by a single-letter field key (`n|s|d|b`).
    pub fn sort_employees(&mut self, key: &str) -> ListResult<SortField> {
        let result = self.employees.sort_by_field_key(key);
        match &result {
            Ok(field) => debug!(
                "event=employee_sort module=roster status=ok field={} count={}",
                field.as_key(),
                self.employees.len()
            ),
            Err(err) => warn!(
                "event=employee_sort module=roster status=error error_code={}",
                err.code()
            ),
        }
        result
    }

    /// Returns a read-only view of the roster in its current order.
    pub fn employees(&self) -> ReadOnlyView<'_, Employee> {
        self.employees.view()
    }

    /// Returns employees matching `predicate`, in roster order.
    pub fn filtered<P>(&self, predicate: P) -> Vec<&Employee>
    where
        P: Fn(&Employee) -> bool,
    {
        self.employees
            .iter()
            .filter(|&employee| predicate(employee))
            .collect()
    }

    /// Registers a roster change listener.
    pub fn subscribe(&mut self, listener: Listener<Employee>) -> ListenerId {
        self.employees.subscribe(listener)
    }

    /// Drops a roster change listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.employees.unsubscribe(id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn log_outcome<T>(&self, event: &str, result: &ListResult<T>) {
        match result {
            Ok(_) => debug!(
                "event={event} module=roster status=ok count={}",
                self.employees.len()
            ),
            Err(err) => warn!(
                "event={event} module=roster status=error error_code={}",
                err.code()
            ),
        }
    }
}
