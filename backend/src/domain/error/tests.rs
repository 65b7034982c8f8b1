//! Tests for domain error construction and serialisation.

use super::*;
use serde_json::json;

#[test]
fn try_new_rejects_blank_messages() {
    let result = DomainError::try_new(ErrorCode::NotFound, "   ");
    assert_eq!(result, Err(DomainErrorValidationError::EmptyMessage));
}

#[test]
fn convenience_constructors_set_the_expected_code() {
    assert_eq!(
        DomainError::invalid_zip_format("bad zip").code(),
        ErrorCode::InvalidZipFormat
    );
    assert_eq!(
        DomainError::duplicate_restaurant("already there").code(),
        ErrorCode::DuplicateRestaurant
    );
    assert_eq!(DomainError::not_found("missing").code(), ErrorCode::NotFound);
    assert_eq!(DomainError::internal("boom").code(), ErrorCode::InternalError);
    assert_eq!(
        DomainError::service_unavailable("db down").code(),
        ErrorCode::ServiceUnavailable
    );
}

#[test]
fn with_details_round_trips_through_json() {
    let err = DomainError::duplicate_restaurant("duplicate")
        .with_details(json!({ "name": "Trattoria", "zipCode": "90210" }));

    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(value["code"], "duplicate_restaurant");
    assert_eq!(value["message"], "duplicate");
    assert_eq!(value["details"]["zipCode"], "90210");
}

#[test]
fn details_are_omitted_when_absent() {
    let err = DomainError::not_found("missing");
    let value = serde_json::to_value(&err).expect("serialise error");
    assert!(value.get("details").is_none());
}

#[test]
fn error_codes_serialise_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::InvalidZipFormat).expect("serialise code");
    assert_eq!(value, "invalid_zip_format");
}
