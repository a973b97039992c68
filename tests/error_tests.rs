//! Tests for the error system.

use easel::error::*;

#[test]
fn error_api_creation() {
    let err = EaselError::api(404, "Model not found");
    assert!(matches!(&err, EaselError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "API error (status 404): Model not found");
}

#[test]
fn error_helper_mappings_are_stable_for_major_variants() {
    struct Case {
        error: EaselError,
        expected_category: ErrorCategory,
        expected_retryable: bool,
        expected_recovery: RecoverySuggestion,
    }

    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk");
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        Case {
            error: EaselError::Authentication("bad token".to_string()),
            expected_category: ErrorCategory::Authentication,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: EaselError::RateLimited,
            expected_category: ErrorCategory::RateLimit,
            expected_retryable: true,
            expected_recovery: RecoverySuggestion::WaitAndRetry,
        },
        Case {
            error: EaselError::ModelLoading { estimated_secs: 20.0 },
            expected_category: ErrorCategory::ModelLoading,
            expected_retryable: true,
            expected_recovery: RecoverySuggestion::WaitAndRetry,
        },
        Case {
            error: EaselError::Timeout(120_000),
            expected_category: ErrorCategory::Timeout,
            expected_retryable: true,
            expected_recovery: RecoverySuggestion::IncreaseTimeout,
        },
        Case {
            error: EaselError::api(503, "overloaded"),
            expected_category: ErrorCategory::Server,
            expected_retryable: true,
            expected_recovery: RecoverySuggestion::WaitAndRetry,
        },
        Case {
            error: EaselError::api(403, "gated model"),
            expected_category: ErrorCategory::Authentication,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: EaselError::api(400, "bad request"),
            expected_category: ErrorCategory::Api,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: EaselError::Configuration("missing".to_string()),
            expected_category: ErrorCategory::Configuration,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CheckConfiguration,
        },
        Case {
            error: EaselError::UnknownStyle("Cubism".to_string()),
            expected_category: ErrorCategory::Input,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::FixInput,
        },
        Case {
            error: EaselError::Serialization(serde_error),
            expected_category: ErrorCategory::Serialization,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: EaselError::Io(io_error),
            expected_category: ErrorCategory::Unknown,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
    ];

    for case in cases {
        assert_eq!(case.error.category(), case.expected_category, "{}", case.error);
        assert_eq!(case.error.is_retryable(), case.expected_retryable, "{}", case.error);
        assert_eq!(
            case.error.recovery_suggestion(),
            case.expected_recovery,
            "{}",
            case.error
        );
    }
}

#[test]
fn artwork_error_wraps_its_cause() {
    let err = EaselError::Artwork {
        index: 3,
        source: Box::new(EaselError::RateLimited),
    };
    assert_eq!(err.to_string(), "Error generating artwork 3: Rate limited");
    assert_eq!(err.category(), ErrorCategory::RateLimit);
    assert!(err.is_retryable());

    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("Rate limited"));
}

#[test]
fn every_suggestion_has_a_hint() {
    for suggestion in [
        RecoverySuggestion::WaitAndRetry,
        RecoverySuggestion::CheckCredentials,
        RecoverySuggestion::CheckConfiguration,
        RecoverySuggestion::IncreaseTimeout,
        RecoverySuggestion::FixInput,
        RecoverySuggestion::ContactSupport,
    ] {
        assert!(!suggestion.hint().is_empty());
    }
}
