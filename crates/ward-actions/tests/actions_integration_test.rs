//! Integration tests for ward-actions
//!
//! These tests exercise actions together with the global message stores, so
//! the ones that touch global state serialize on `LOCK`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use ward_actions::{
    BoxedAction, PipeStep, ValidationAction, legacy, max_length, regex, run_all, ulid,
};
use ward_config::{
    Config, IssueContext, delete_global_message, delete_specific_message, set_global_message,
    set_specific_message,
};
use ward_ir::{Dataset, ErrorMessage, Issue, IssueKind, PipeResult, Value};

static LOCK: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn ulid_issues(value: &str, config: &Config) -> Vec<Issue> {
    ulid(None)
        .run(Dataset::typed(value.to_string()), config)
        .issues
}

#[test]
fn test_not_a_ulid_scenario() {
    let _guard = serial();
    let issues = ulid_issues("not-a-ulid", &Config::new());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].issue_type, "ulid");
    assert_eq!(issues[0].message, "Invalid ULID: Received \"not-a-ulid\"");
    assert_eq!(issues[0].received, "\"not-a-ulid\"");
}

#[test]
fn test_pattern_check_is_deterministic() {
    let _guard = serial();
    let inputs = [
        "01ARZ3NDEKTSV4RRFFQ69G5FAV",
        "01BX5ZZKBKACTAV9WEVGEMMVRZ",
        "01bx5zzkbkactav9wevgemmvry",
        "01BX5ZZKBKACTAV9WEVGEMMVR",
        "01BX5ZZKBKACTAV9WEVGEMMVRU",
        "ulid",
    ];
    for input in inputs {
        let first = ulid_issues(input, &Config::new());
        let second = ulid_issues(input, &Config::new());
        assert_eq!(first, second);

        let expected_invalid = !ward_actions::ULID_REGEX.is_match(input);
        assert_eq!(!first.is_empty(), expected_invalid, "input {input}");
    }
}

#[test]
fn test_explicit_message_beats_global_messages() {
    let _guard = serial();
    set_global_message("global message", None);
    set_specific_message(ulid(None).reference(), "specific message", None);

    let config = Config::new().message("config message");
    let action = ulid(Some(ErrorMessage::from("explicit message")));
    let dataset = action.run(Dataset::typed("nope"), &config);
    assert_eq!(dataset.issues[0].message, "explicit message");

    // Without an explicit message the specific message wins over config.
    let dataset = ulid(None).run(Dataset::typed("nope"), &config);
    assert_eq!(dataset.issues[0].message, "specific message");

    delete_specific_message(ulid(None).reference(), None);
    let dataset = ulid(None).run(Dataset::typed("nope"), &config);
    assert_eq!(dataset.issues[0].message, "config message");

    let dataset = ulid(None).run(Dataset::typed("nope"), &Config::new());
    assert_eq!(dataset.issues[0].message, "global message");

    delete_global_message(None);
}

#[test]
fn test_localized_specific_message() {
    let _guard = serial();
    let reference = ulid(None).reference();
    set_specific_message(reference, "Ungültige ULID", Some("de"));

    let german = ulid_issues("nope", &Config::new().lang("de"));
    let english = ulid_issues("nope", &Config::new().lang("en"));

    assert_eq!(german[0].message, "Ungültige ULID");
    assert_eq!(german[0].lang.as_deref(), Some("de"));
    assert_eq!(english[0].message, "Invalid ULID: Received \"nope\"");

    delete_specific_message(reference, Some("de"));
}

#[test]
fn test_length_bound_inclusivity() {
    for n in 0..6_usize {
        let step = max_length(n, None);
        let at = "x".repeat(n);
        let over = "x".repeat(n + 1);

        assert!(step.check(at.as_str()).is_output(), "len {n} with bound {n}");
        assert!(!step.check(over.as_str()).is_output(), "len {} with bound {n}", n + 1);
        if n > 0 {
            let under = "x".repeat(n - 1);
            assert!(step.check(under.as_str()).is_output());
        }
    }
}

#[test]
fn test_max_length_scenario() {
    let step = max_length(2, None);

    match step.apply("abc") {
        PipeResult::Issues(issues) => {
            assert_eq!(issues[0].issue_type, "max_length");
            assert_eq!(issues[0].kind, IssueKind::Validation);
        }
        PipeResult::Output(_) => panic!("abc is longer than 2"),
    }
    assert_eq!(step.apply("ab"), PipeResult::Output("ab"));
}

#[test]
fn test_mixed_pipeline_shapes() {
    let _guard = serial();
    let starts_with_zero = legacy(|input: Value| {
        if input.as_str().is_some_and(|text| text.starts_with('0')) {
            PipeResult::Output(input)
        } else {
            let received = input.received();
            PipeResult::Issues(vec![
                Issue::new(IssueKind::Validation, "leading_zero", input, received)
                    .with_message("must start with 0"),
            ])
        }
    });

    let actions: Vec<BoxedAction<Value>> = vec![
        Box::new(max_length(26, Some("too long")).into_action()),
        Box::new(starts_with_zero),
        Box::new(ulid(None)),
        Box::new(regex("^01", None).expect("valid pattern")),
    ];

    let ok = run_all(
        &actions,
        Dataset::typed(Value::from("01ARZ3NDEKTSV4RRFFQ69G5FAV")),
        &Config::new(),
    );
    assert!(ok.is_success());

    let bad = run_all(
        &actions,
        Dataset::typed(Value::from("91ARZ3NDEKTSV4RRFFQ69G5FAV-extra")),
        &Config::new(),
    );
    let messages: Vec<&str> = bad.issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(messages[0], "too long");
    assert_eq!(messages[1], "must start with 0");
    assert_eq!(bad.issues[2].issue_type, "ulid");
    assert_eq!(bad.issues[3].issue_type, "regex");
    assert_eq!(bad.issues.len(), 4);
}

#[test]
fn test_issue_serializes_for_reporting() -> anyhow::Result<()> {
    let _guard = serial();
    let issues = ulid_issues("nope", &Config::new());
    let json = serde_json::to_value(&issues[0])?;

    assert_eq!(json["kind"], "validation");
    assert_eq!(json["type"], "ulid");
    assert_eq!(json["input"], "nope");
    assert_eq!(json["received"], "\"nope\"");
    assert_eq!(json["requirement"], ward_actions::ULID_REGEX.as_str());
    Ok(())
}

#[test]
fn test_specific_message_reaches_max_length_action() {
    let _guard = serial();
    let action = max_length(2, None).into_action();
    set_specific_message(action.reference(), "Zu lang", Some("de"));

    let german = action.run(Dataset::typed(Value::from("abc")), &Config::new().lang("de"));
    let english = action.run(Dataset::typed(Value::from("abc")), &Config::new().lang("en"));
    assert_eq!(german.issues[0].message, "Zu lang");
    assert_eq!(english.issues[0].message, "Invalid length");

    // An explicit message still beats the registered one.
    let explicit = max_length(2, Some("short please")).into_action();
    let dataset = explicit.run(Dataset::typed(Value::from("abc")), &Config::new().lang("de"));
    assert_eq!(dataset.issues[0].message, "short please");

    delete_specific_message(action.reference(), Some("de"));
}
