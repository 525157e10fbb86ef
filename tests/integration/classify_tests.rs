//! End-to-end classification scenarios.

use marketguard::testing::failures;
use marketguard::{
    Classifier, ClassifierConfig, Classify, ErrorCategory, RawFailure, catch_classified, classify,
    is_auth_error, is_network_error,
};
use serde_json::json;

use crate::common::init_tracing;

#[test]
fn test_server_error_with_detail() {
    init_tracing();

    let raw = RawFailure::from_status_body(500, r#"{"detail":"db down"}"#);
    let err = classify(&raw);

    assert_eq!(err.category(), ErrorCategory::Server);
    assert_eq!(
        err.message(),
        "The server encountered an error. Please try again shortly."
    );
    assert_eq!(err.technical(), "db down");
    assert!(err.is_retryable());
    assert_eq!(err.status_code(), Some(500));
}

#[test]
fn test_forbidden_detail_and_fallback() {
    init_tracing();

    let err = classify(&failures::with_detail(403, "quota exceeded"));
    assert_eq!(err.category(), ErrorCategory::Auth);
    assert_eq!(err.technical(), "quota exceeded");
    assert!(!err.is_retryable());

    let err = classify(&RawFailure::from_status_body(403, "{}"));
    assert_eq!(err.technical(), "Forbidden");
    assert_eq!(err.status_code(), Some(403));
}

#[test]
fn test_ui_decisions() {
    // What a caller does with each fixture: prompt login, show not found,
    // or offer a retry.
    let mut login_prompts = 0;
    let mut not_found = 0;
    let mut retry_banners = 0;

    for raw in failures::all() {
        let err = classify(&raw);
        match err.category() {
            ErrorCategory::Auth => login_prompts += 1,
            ErrorCategory::NotFound => not_found += 1,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::Unknown => {
                assert!(err.is_retryable());
                retry_banners += 1;
            }
        }
    }

    assert_eq!(login_prompts, 2);
    assert_eq!(not_found, 1);
    assert_eq!(retry_banners, 6);
}

#[test]
fn test_timeout_vs_offline() {
    let timeout = classify(&failures::timeout());
    let offline = classify(&failures::offline());

    assert_eq!(timeout.category(), ErrorCategory::Network);
    assert_eq!(offline.category(), ErrorCategory::Network);
    assert!(timeout.technical().starts_with("Timeout:"));
    assert_eq!(offline.technical(), "connect ECONNREFUSED 127.0.0.1:8000");
    assert_ne!(timeout.message(), offline.message());
}

#[test]
fn test_predicates() {
    assert!(is_network_error(&failures::timeout()));
    assert!(is_network_error(&failures::offline()));
    assert!(!is_network_error(&failures::server_error()));

    assert!(is_auth_error(&failures::unauthorized()));
    assert!(is_auth_error(&failures::forbidden()));
    assert!(!is_auth_error(&failures::not_found()));

    assert!(failures::unauthorized().is_auth_error());
}

#[test]
fn test_io_errors() {
    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "operation timed out");
    let classified = err.classify();
    assert_eq!(classified.category(), ErrorCategory::Network);
    assert_eq!(classified.technical(), "Timeout: operation timed out");
}

#[test]
fn test_foreign_error_value() {
    let parse_err = "12x".parse::<u32>().unwrap_err();
    let err = classify(&RawFailure::from_error(&parse_err));
    assert_eq!(err.category(), ErrorCategory::Unknown);
    assert_eq!(err.technical(), "invalid digit found in string");
    assert!(err.is_retryable());
}

#[test]
fn test_panic_boundary() {
    let err = catch_classified(|| -> Vec<u8> { std::panic::panic_any("pagination cursor overflow") })
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Unknown);
    assert_eq!(err.technical(), "pagination cursor overflow");
    assert_eq!(err.message(), "An unexpected error occurred.");
}

#[test]
fn test_compact_classifier_caps_technical_only() {
    let classifier = Classifier::new(ClassifierConfig::compact()).unwrap();
    let long_detail = "x".repeat(1_000);
    let raw = RawFailure::response(502, Some(json!({ "detail": long_detail })));

    let full = classify(&raw);
    let compact = classifier.classify(&raw);

    assert_eq!(full.technical().len(), 1_000);
    assert_eq!(
        compact.technical().chars().count(),
        ClassifierConfig::COMPACT_TECHNICAL_LEN
    );
    assert_eq!(compact.category(), full.category());
    assert_eq!(compact.message(), full.message());
    assert_eq!(compact.is_retryable(), full.is_retryable());
    assert_eq!(compact.status_code(), full.status_code());
}

#[test]
fn test_serialized_contract() {
    let value = serde_json::to_value(classify(&failures::timeout())).unwrap();
    assert_eq!(value["category"], "NETWORK");
    assert_eq!(value["retryable"], true);
    assert!(value.get("statusCode").is_none());

    let value = serde_json::to_value(classify(&failures::not_found())).unwrap();
    assert_eq!(value["category"], "NOT_FOUND");
    assert_eq!(value["statusCode"], 404);
}
