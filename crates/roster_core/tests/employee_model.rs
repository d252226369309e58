use roster_core::{Employee, EmployeeValidationError, Record, SortField};

fn fiona() -> Employee {
    Employee::new(
        "Fiona Kunz",
        "9482427",
        "lydia@example.com",
        "6100",
        "14/2/2019",
        "3/11/1988",
    )
    .unwrap()
}

#[test]
fn sort_value_maps_each_field() {
    let employee = fiona();

    assert_eq!(employee.sort_value(SortField::Name), "Fiona Kunz");
    assert_eq!(employee.sort_value(SortField::Salary), "6100");
    assert_eq!(employee.sort_value(SortField::DateOfJoining), "14/2/2019");
    assert_eq!(employee.sort_value(SortField::DateOfBirth), "3/11/1988");
}

#[test]
fn record_identity_matches_is_same_employee() {
    let employee = fiona();
    let mut fields = employee.to_fields();
    fields.email = "fiona@example.com".to_string();
    let new_email = Employee::try_from(fields).unwrap();

    assert!(employee.is_same_record(&employee));
    assert!(employee.is_same_record(&new_email));
    assert!(new_email.is_same_record(&employee));
    assert_ne!(employee, new_email);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let employee = fiona();

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["name"], "Fiona Kunz");
    assert_eq!(json["phone"], "9482427");
    assert_eq!(json["email"], "lydia@example.com");
    assert_eq!(json["salary"], "6100");
    assert_eq!(json["date_of_joining"], "14/2/2019");
    assert_eq!(json["date_of_birth"], "3/11/1988");

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn deserialize_rejects_invalid_fields() {
    let value = serde_json::json!({
        "name": "Fiona Kunz",
        "phone": "9482427",
        "email": "lydia@example.com",
        "salary": "6,100",
        "date_of_joining": "14/2/2019",
        "date_of_birth": "3/11/1988"
    });

    let err = serde_json::from_value::<Employee>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("salary `6,100` must contain digits only"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_missing_fields() {
    let value = serde_json::json!({ "name": "Fiona Kunz" });
    assert!(serde_json::from_value::<Employee>(value).is_err());
}

#[test]
fn validation_error_messages_name_the_field() {
    let err = Employee::new(
        "Fiona Kunz",
        "9482427",
        "lydia@example.com",
        "6100",
        "14/2/2019",
        "30/2/1988",
    )
    .unwrap_err();
    assert_eq!(
        err,
        EmployeeValidationError::InvalidDate {
            field: "date_of_birth",
            value: "30/2/1988".to_string(),
        }
    );
    assert!(err.to_string().starts_with("date_of_birth `30/2/1988`"));
}
