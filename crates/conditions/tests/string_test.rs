//! Integration tests for string conditions.

use conditions::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const TURKIC: StringComparison = StringComparison::IgnoreCase(CaseLocale::Turkic);
const INVARIANT: StringComparison = StringComparison::IgnoreCase(CaseLocale::Invariant);

#[test]
fn ends_with_failure_message() {
    let err = requires("test", "a")
        .ends_with("test me", StringComparison::Ordinal)
        .unwrap_err();
    assert!(matches!(err, ConditionError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "a should end with 'test me'. (parameter 'a')");
}

#[test]
fn turkish_i_depends_on_locale() {
    assert!(requires("hello and hi", "a").ends_with("Hİ", TURKIC).is_ok());
    assert!(requires("hello and hi", "a").ends_with("Hİ", INVARIANT).is_err());
    assert!(requires("hello and hi", "a").ends_with("HI", INVARIANT).is_ok());
    assert!(requires("hello and hi", "a").ends_with("HI", TURKIC).is_err());
}

#[rstest]
#[case::ordinal(StringComparison::Ordinal, false)]
#[case::ascii(StringComparison::AsciiIgnoreCase, true)]
#[case::invariant(INVARIANT, true)]
fn contains_respects_policy(#[case] cmp: StringComparison, #[case] passes: bool) {
    assert_eq!(requires("Release Notes", "a").contains("notes", cmp).is_ok(), passes);
    assert_eq!(requires("Release Notes", "a").does_not_contain("notes", cmp).is_ok(), !passes);
}

#[rstest]
#[case(None, false)]
#[case(Some(""), false)]
#[case(Some("  "), true)]
#[case(Some("x"), true)]
fn not_null_or_empty(#[case] value: Option<&str>, #[case] passes: bool) {
    assert_eq!(requires(value, "a").is_not_null_or_empty().is_ok(), passes);
    assert_eq!(requires(value, "a").is_null_or_empty().is_ok(), !passes);
}

#[test]
fn null_string_failures_are_argument_null() {
    let err = requires(None::<String>, "name")
        .starts_with("a", StringComparison::Ordinal)
        .unwrap_err();
    assert!(matches!(err, ConditionError::ArgumentNull(_)));

    let err = requires(None::<String>, "name").is_longer_than(0).unwrap_err();
    assert!(matches!(err, ConditionError::ArgumentNull(_)));
    assert_eq!(
        err.message(),
        "name should be longer than 0 characters. The actual length is 0."
    );
}

#[test]
fn chain_over_owned_string() {
    let name = requires(String::from("ada lovelace"), "name")
        .is_not_null_or_whitespace()
        .and_then(|v| v.is_shorter_or_equal(64))
        .and_then(|v| v.starts_with("ADA", StringComparison::AsciiIgnoreCase))
        .map(Validator::into_value);
    assert_eq!(name.as_deref(), Ok("ada lovelace"));
}

#[test]
fn postcondition_string_check() {
    let err = ensures("", "greeting").is_not_empty().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Postcondition 'greeting should not be empty.' failed."
    );
}
