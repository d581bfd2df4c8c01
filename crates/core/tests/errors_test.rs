use std::error::Error;

use carealert_core::errors::{CareError, CareResult};

#[test]
fn test_care_error_display() {
    let invalid_schedule = CareError::InvalidSchedule("times must not be empty".to_string());
    let invalid_vital = CareError::InvalidVital("bad blood pressure".to_string());
    let invalid_contact = CareError::InvalidContact("missing phone".to_string());
    let not_found = CareError::NotFound("alert not found".to_string());
    let store = CareError::Store(eyre::eyre!("store unavailable"));
    let internal = CareError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "internal error",
    )));

    assert_eq!(
        invalid_schedule.to_string(),
        "Invalid schedule: times must not be empty"
    );
    assert_eq!(
        invalid_vital.to_string(),
        "Invalid vital reading: bad blood pressure"
    );
    assert_eq!(invalid_contact.to_string(), "Invalid contact: missing phone");
    assert_eq!(not_found.to_string(), "Not found: alert not found");
    assert!(store.to_string().contains("Store error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let care_error = CareError::Internal(Box::new(io_error));

    assert!(care_error.source().is_some());
}

#[test]
fn test_care_result() {
    let result: CareResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: CareResult<i32> = Err(CareError::NotFound("missing".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("store unavailable");
    let care_error: CareError = report.into();

    assert!(matches!(care_error, CareError::Store(_)));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let care_error = CareError::Internal(boxed_error);

    assert!(care_error.to_string().contains("IO error"));
}
