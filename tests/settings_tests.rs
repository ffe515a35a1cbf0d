//! Settings resolution tests
//!
//! Resolution is driven through an explicit variable set so that the test
//! process environment never leaks in.

use my_python_project::config::{LogLevel, Settings, ENV_PREFIX};

fn var(field: &str) -> String {
    format!("{ENV_PREFIX}_{field}")
}

#[test]
fn test_all_log_levels_any_case() {
    let cases = [
        ("debug", LogLevel::Debug),
        ("Info", LogLevel::Info),
        ("WARNING", LogLevel::Warning),
        ("eRRoR", LogLevel::Error),
        ("critical", LogLevel::Critical),
    ];

    for (raw, expected) in cases {
        let settings = Settings::resolve_from([(var("LOG_LEVEL"), raw.to_string())]).unwrap();
        assert_eq!(settings.log_level, expected, "value '{raw}'");
        assert_eq!(settings.log_level.to_string(), expected.as_str());
    }
}

#[test]
fn test_unknown_log_levels_rejected() {
    for raw in ["", "warn", "trace", "fatal", "INFO "] {
        let err = Settings::resolve_from([(var("LOG_LEVEL"), raw.to_string())]).unwrap_err();
        assert!(err.is_configuration(), "value '{raw}' should be rejected");
        assert_eq!(err.exit_code(), 1);
    }
}

#[test]
fn test_boolean_values() {
    let truthy = ["true", "TRUE", "1", "yes", "on", "t", "T", "y", "Y"];
    let falsy = ["false", "False", "0", "no", "off", "f", "F", "n", "N"];

    for raw in truthy {
        let settings = Settings::resolve_from([(var("JSON_LOGS"), raw)]).unwrap();
        assert!(settings.json_logs, "'{raw}' should be true");
    }

    for raw in falsy {
        let settings = Settings::resolve_from([(var("INCLUDE_TIMESTAMP"), raw)]).unwrap();
        assert!(!settings.include_timestamp, "'{raw}' should be false");
    }
}

#[test]
fn test_unparseable_booleans_rejected() {
    for field in ["JSON_LOGS", "INCLUDE_TIMESTAMP"] {
        let err = Settings::resolve_from([(var(field), "maybe")]).unwrap_err();
        assert!(err.is_configuration(), "{field} should reject 'maybe'");
        assert_eq!(
            err.to_string(),
            format!("Configuration error: invalid boolean 'maybe' for {}", var(field))
        );
    }
}

#[test]
fn test_unknown_prefixed_fields_ignored() {
    let settings = Settings::resolve_from([
        (var("SOMETHING_ELSE"), "whatever"),
        (var("LOG_LEVEL"), "ERROR"),
        ("PATH".to_string(), "/usr/bin"),
    ])
    .unwrap();

    assert_eq!(settings.log_level, LogLevel::Error);
    assert!(!settings.json_logs);
    assert!(settings.include_timestamp);
}

#[test]
fn test_resolution_is_repeatable() {
    let vars = [(var("JSON_LOGS"), "true"), (var("LOG_LEVEL"), "debug")];
    let first = Settings::resolve_from(vars.clone()).unwrap();
    let second = Settings::resolve_from(vars).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_spellings_resolve_deterministically() {
    let lower = format!("{}_log_level", ENV_PREFIX.to_lowercase());

    for _ in 0..16 {
        let settings = Settings::resolve_from([
            (lower.clone(), "debug".to_string()),
            (var("LOG_LEVEL"), "critical".to_string()),
        ])
        .unwrap();
        assert_eq!(settings.log_level, LogLevel::Critical);
    }
}
