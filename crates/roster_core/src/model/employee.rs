//! Employee domain model.
//!
//! # Responsibility
//! - Define the employee record stored in the roster.
//! - Validate field text before a record can be constructed or decoded.
//!
//! # Invariants
//! - Every constructed `Employee` passes `Employee::validate()`.
//! - Identity is `name` plus either `phone` or `email`; all other fields are
//!   editable without changing who the employee is.
//! - Field text is stored as entered (trimmed); dates are not normalized.

use crate::model::record::Record;
use crate::model::sort_field::SortField;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$")
        .expect("valid email regex")
});
static SALARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid salary regex"));
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<day>\d{1,2})/(?P<month>\d{1,2})/(?P<year>\d{4})$").expect("valid date regex")
});

/// Field-level validation failure for employee records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidSalary(String),
    InvalidDate { field: &'static str, value: String },
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "name `{value}` must be alphanumeric words separated by spaces"
            ),
            Self::InvalidPhone(value) => {
                write!(f, "phone `{value}` must contain at least 3 digits only")
            }
            Self::InvalidEmail(value) => {
                write!(f, "email `{value}` must have the form local-part@domain")
            }
            Self::InvalidSalary(value) => write!(f, "salary `{value}` must contain digits only"),
            Self::InvalidDate { field, value } => {
                write!(f, "{field} `{value}` must be a valid d/m/yyyy date")
            }
        }
    }
}

impl Error for EmployeeValidationError {}

/// Employee record tracked by the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EmployeeFields")]
pub struct Employee {
    name: String,
    phone: String,
    email: String,
    salary: String,
    date_of_joining: String,
    date_of_birth: String,
}

/// Unvalidated employee fields, as received from callers or decoders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub salary: String,
    pub date_of_joining: String,
    pub date_of_birth: String,
}

impl TryFrom<EmployeeFields> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(fields: EmployeeFields) -> Result<Self, Self::Error> {
        let employee = Self {
            name: fields.name.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            email: fields.email.trim().to_string(),
            salary: fields.salary.trim().to_string(),
            date_of_joining: fields.date_of_joining.trim().to_string(),
            date_of_birth: fields.date_of_birth.trim().to_string(),
        };
        employee.validate()?;
        Ok(employee)
    }
}

impl Employee {
    /// Creates a validated employee.
    ///
    /// # Errors
    /// - Returns the first field that fails validation, checked in
    ///   declaration order.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        salary: impl Into<String>,
        date_of_joining: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Result<Self, EmployeeValidationError> {
        Self::try_from(EmployeeFields {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            salary: salary.into(),
            date_of_joining: date_of_joining.into(),
            date_of_birth: date_of_birth.into(),
        })
    }

    /// Checks every field against its format rule.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if !NAME_RE.is_match(&self.name) {
            return Err(EmployeeValidationError::InvalidName(self.name.clone()));
        }
        if !PHONE_RE.is_match(&self.phone) {
            return Err(EmployeeValidationError::InvalidPhone(self.phone.clone()));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(EmployeeValidationError::InvalidEmail(self.email.clone()));
        }
        if !SALARY_RE.is_match(&self.salary) {
            return Err(EmployeeValidationError::InvalidSalary(self.salary.clone()));
        }
        validate_date("date_of_joining", &self.date_of_joining)?;
        validate_date("date_of_birth", &self.date_of_birth)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn date_of_joining(&self) -> &str {
        &self.date_of_joining
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// Returns the editable fields of this record.
    ///
    /// Pair with `Employee::try_from` to build an edited copy.
    pub fn to_fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            salary: self.salary.clone(),
            date_of_joining: self.date_of_joining.clone(),
            date_of_birth: self.date_of_birth.clone(),
        }
    }

    /// Returns whether both records describe the same person.
    ///
    /// Same name, plus a shared phone or a shared email.
    pub fn is_same_employee(&self, other: &Employee) -> bool {
        self.name == other.name && (self.phone == other.phone || self.email == other.email)
    }
}

impl Record for Employee {
    fn is_same_record(&self, other: &Self) -> bool {
        self.is_same_employee(other)
    }

    fn sort_value(&self, field: SortField) -> &str {
        match field {
            SortField::Name => &self.name,
            SortField::Salary => &self.salary,
            SortField::DateOfJoining => &self.date_of_joining,
            SortField::DateOfBirth => &self.date_of_birth,
        }
    }
}

fn validate_date(field: &'static str, value: &str) -> Result<(), EmployeeValidationError> {
    let invalid = || EmployeeValidationError::InvalidDate {
        field,
        value: value.to_string(),
    };

    let captures = DATE_RE.captures(value).ok_or_else(invalid)?;
    let day: u32 = captures["day"].parse().map_err(|_| invalid())?;
    let month: u32 = captures["month"].parse().map_err(|_| invalid())?;
    let year: u32 = captures["year"].parse().map_err(|_| invalid())?;

    if day == 0 || day > days_in_month(month, year) {
        return Err(invalid());
    }
    Ok(())
}

fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::{validate_date, Employee, EmployeeValidationError};

    fn alice() -> Employee {
        Employee::new(
            "Alice Pauline",
            "94351253",
            "alice@example.com",
            "4000",
            "1/1/2020",
            "12/3/1990",
        )
        .expect("alice should be valid")
    }

    #[test]
    fn new_trims_field_text() {
        let employee = Employee::new(
            "  Bob Choo ",
            " 98765432",
            "bob@example.com ",
            "3500",
            " 2/2/2021",
            "5/6/1985 ",
        )
        .expect("padded input should be accepted");
        assert_eq!(employee.name(), "Bob Choo");
        assert_eq!(employee.phone(), "98765432");
        assert_eq!(employee.date_of_birth(), "5/6/1985");
    }

    #[test]
    fn rejects_invalid_fields_in_declaration_order() {
        let err = Employee::new("", "1", "bad", "x", "0/0/0", "0/0/0").unwrap_err();
        assert_eq!(err, EmployeeValidationError::InvalidName(String::new()));

        let err = Employee::new("Amy", "12", "bad", "x", "0/0/0", "0/0/0").unwrap_err();
        assert_eq!(err, EmployeeValidationError::InvalidPhone("12".to_string()));

        let err = Employee::new("Amy", "123", "bad", "x", "0/0/0", "0/0/0").unwrap_err();
        assert_eq!(err, EmployeeValidationError::InvalidEmail("bad".to_string()));

        let err =
            Employee::new("Amy", "123", "amy@x.io", "12k", "0/0/0", "0/0/0").unwrap_err();
        assert_eq!(err, EmployeeValidationError::InvalidSalary("12k".to_string()));

        let err =
            Employee::new("Amy", "123", "amy@x.io", "12", "31/4/2020", "1/1/1990").unwrap_err();
        assert_eq!(
            err,
            EmployeeValidationError::InvalidDate {
                field: "date_of_joining",
                value: "31/4/2020".to_string(),
            }
        );
    }

    #[test]
    fn date_validation_handles_leap_years() {
        assert!(validate_date("date_of_birth", "29/2/2024").is_ok());
        assert!(validate_date("date_of_birth", "29/2/2000").is_ok());
        assert!(validate_date("date_of_birth", "29/2/1900").is_err());
        assert!(validate_date("date_of_birth", "1/13/2020").is_err());
        assert!(validate_date("date_of_birth", "01/02/2020").is_ok());
        assert!(validate_date("date_of_birth", "2020-01-02").is_err());
    }

    #[test]
    fn same_employee_requires_name_and_one_contact() {
        let original = alice();

        let mut fields = original.to_fields();
        fields.phone = "11111111".to_string();
        fields.salary = "9000".to_string();
        let new_phone = Employee::try_from(fields).expect("edited record should be valid");
        assert!(original.is_same_employee(&new_phone));
        assert_ne!(original, new_phone);

        let mut fields = original.to_fields();
        fields.phone = "11111111".to_string();
        fields.email = "other@example.com".to_string();
        let new_contacts = Employee::try_from(fields).expect("edited record should be valid");
        assert!(!original.is_same_employee(&new_contacts));

        let mut fields = original.to_fields();
        fields.name = "Alice Tan".to_string();
        let renamed = Employee::try_from(fields).expect("edited record should be valid");
        assert!(!original.is_same_employee(&renamed));
    }

    #[test]
    fn same_employee_is_case_sensitive_on_name() {
        let original = alice();
        let mut fields = original.to_fields();
        fields.name = "alice pauline".to_string();
        let lower = Employee::try_from(fields).expect("lowercase name should be valid");
        assert!(!original.is_same_employee(&lower));
    }
}
