//! Property tests for classification totality and gate monotonicity.

use marketguard::{
    ClassifiedError, Classifier, ClassifierConfig, ErrorCategory, OpaqueFailure, RawFailure,
    TransportFailure, TrustLevel, can_access, classify, is_auth_error, is_network_error,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(prop_oneof![Just(String::from("detail")), "[a-z]{1,6}"], inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_raw_failure() -> impl Strategy<Value = RawFailure> {
    prop_oneof![
        (any::<bool>(), proptest::option::of(".*")).prop_map(|(timed_out, message)| {
            RawFailure::Transport(TransportFailure { timed_out, message })
        }),
        (any::<u16>(), proptest::option::of(arb_json()))
            .prop_map(|(status, payload)| RawFailure::response(status, payload)),
        (any::<u16>(), ".*").prop_map(|(status, body)| RawFailure::from_status_body(status, &body)),
        (proptest::option::of(".*"), ".*").prop_map(|(message, rendering)| {
            RawFailure::Opaque(OpaqueFailure { message, rendering })
        }),
    ]
}

fn arb_trust_level() -> impl Strategy<Value = TrustLevel> {
    prop::sample::select(TrustLevel::ALL.to_vec())
}

fn expected_category(status: u16) -> ErrorCategory {
    match status {
        401 | 403 => ErrorCategory::Auth,
        404 => ErrorCategory::NotFound,
        s if s >= 500 => ErrorCategory::Server,
        _ => ErrorCategory::Unknown,
    }
}

proptest! {
    #[test]
    fn classify_is_total_and_consistent(raw in arb_raw_failure()) {
        let err: ClassifiedError = classify(&raw);

        // Retry flag follows category exactly.
        let non_retryable = matches!(err.category(), ErrorCategory::Auth | ErrorCategory::NotFound);
        prop_assert_eq!(non_retryable, !err.is_retryable());

        // Status only when a response was received.
        prop_assert_eq!(err.status_code(), raw.status());

        // Technical text is never empty.
        prop_assert!(!err.technical().is_empty());

        // Predicates agree with classify.
        prop_assert_eq!(is_network_error(&raw), err.category() == ErrorCategory::Network);
        prop_assert_eq!(is_auth_error(&raw), err.category() == ErrorCategory::Auth);
    }

    #[test]
    fn status_fidelity(status in any::<u16>(), payload in proptest::option::of(arb_json())) {
        let err = classify(&RawFailure::response(status, payload));
        prop_assert_eq!(err.status_code(), Some(status));
        prop_assert_eq!(err.category(), expected_category(status));
    }

    #[test]
    fn transport_is_always_network(timed_out in any::<bool>(), message in proptest::option::of(".*")) {
        let raw = RawFailure::Transport(TransportFailure { timed_out, message: message.clone() });
        let err = classify(&raw);
        prop_assert_eq!(err.category(), ErrorCategory::Network);
        prop_assert_eq!(err.status_code(), None);

        if timed_out {
            prop_assert!(err.technical().starts_with("Timeout: "));
        } else {
            let expected = message.filter(|m| !m.is_empty()).unwrap_or_else(|| String::from("Network error"));
            prop_assert_eq!(err.technical(), expected.as_str());
        }
    }

    #[test]
    fn truncation_never_exceeds_limit(raw in arb_raw_failure(), limit in 1usize..64) {
        let classifier = Classifier::new(ClassifierConfig::builder().max_technical_len(limit).build()).unwrap();
        let err = classifier.classify(&raw);
        prop_assert!(err.technical().chars().count() <= limit);
        prop_assert_eq!(err.category(), classify(&raw).category());
    }

    #[test]
    fn gate_is_monotonic(subject in arb_trust_level(), required in arb_trust_level()) {
        let decision = can_access(subject, required);
        prop_assert_eq!(decision.is_allowed(), subject.rank() >= required.rank());
        prop_assert_eq!(decision.is_allowed(), subject >= required);

        if decision.is_allowed() {
            // Any higher level is also allowed.
            for higher in TrustLevel::ALL.into_iter().filter(|l| *l >= subject) {
                prop_assert!(can_access(higher, required).is_allowed());
            }
        } else {
            prop_assert_eq!(decision.unmet_level(), Some(required));
        }
    }
}
