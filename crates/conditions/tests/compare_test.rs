//! Integration tests for comparison conditions.

use conditions::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// RANGE
// ============================================================================

#[rstest]
#[case(2, true)]
#[case(3, true)]
#[case(4, true)]
#[case(1, false)]
#[case(5, false)]
fn in_range_inclusive_bounds(#[case] value: i32, #[case] passes: bool) {
    assert_eq!(requires(value, "a").is_in_range(2, 4).is_ok(), passes);
    assert_eq!(requires(value, "a").is_not_in_range(2, 4).is_ok(), !passes);
}

#[test]
fn in_range_returns_value_unchanged() {
    let value = requires(3_i64, "a")
        .is_in_range(2, 4)
        .map(Validator::into_value);
    assert_eq!(value, Ok(3));
}

#[test]
fn in_range_on_dates_like_tuples() {
    let date = (2024, 2, 29);
    assert!(requires(date, "date").is_in_range((2024, 1, 1), (2024, 12, 31)).is_ok());
    assert!(requires(date, "date").is_greater_than((2024, 3, 1)).is_err());
}

// ============================================================================
// ERROR KINDS
// ============================================================================

#[rstest]
#[case::greater(requires(1, "a").is_greater_than(1))]
#[case::greater_or_equal(requires(0, "a").is_greater_or_equal(1))]
#[case::less(requires(1, "a").is_less_than(1))]
#[case::less_or_equal(requires(2, "a").is_less_or_equal(1))]
#[case::not_greater(requires(2, "a").is_not_greater_than(1))]
#[case::not_less(requires(0, "a").is_not_less_than(1))]
#[case::range(requires(9, "a").is_in_range(1, 3))]
fn ordering_failures_are_out_of_range(#[case] result: Result<Validator<i32>, ConditionError>) {
    let err = result.unwrap_err();
    assert!(matches!(err, ConditionError::ArgumentOutOfRange(_)));
    assert_eq!(err.argument_name(), "a");
}

#[test]
fn equality_failures_are_invalid_argument() {
    let err = requires(1, "a").is_equal_to(2).unwrap_err();
    assert!(matches!(err, ConditionError::InvalidArgument(_)));
    let err = requires(1, "a").is_not_in_range(0, 2).unwrap_err();
    assert!(matches!(err, ConditionError::InvalidArgument(_)));
}

#[test]
fn postconditions_report_postcondition_failed() {
    let err = ensures(1, "result").is_greater_than(1).unwrap_err();
    assert!(matches!(err, ConditionError::PostconditionFailed(_)));
    assert!(err.is_postcondition());
    assert_eq!(err.argument_name(), "result");
}

// ============================================================================
// NULLABLE VALUES
// ============================================================================

#[test]
fn none_sorts_below_every_some() {
    assert!(requires(None::<i32>, "a").is_less_than(Some(i32::MIN)).is_ok());
    assert!(requires(None::<i32>, "a").is_in_range(None, Some(0)).is_ok());
    let err = requires(None::<i32>, "a").is_greater_or_equal(Some(0)).unwrap_err();
    assert!(matches!(err, ConditionError::ArgumentOutOfRange(_)));
}

#[rstest]
#[case::equal(requires(None::<i32>, "a").is_equal_to(Some(3)))]
#[case::not_equal(requires(None::<i32>, "a").is_not_equal_to(None))]
#[case::not_in_range(requires(None::<i32>, "a").is_not_in_range(None, Some(5)))]
#[case::evaluate(requires(None::<i32>, "a").evaluate(Option::is_some))]
fn none_fails_generic_checks_as_argument_null(
    #[case] result: Result<Validator<Option<i32>>, ConditionError>,
) {
    let err = result.unwrap_err();
    assert!(matches!(err, ConditionError::ArgumentNull(_)));
    assert_eq!(err.argument_name(), "a");
}

#[test]
fn none_in_postcondition_is_postcondition_failed() {
    let err = ensures(None::<i32>, "result").is_equal_to(Some(3)).unwrap_err();
    assert!(matches!(err, ConditionError::PostconditionFailed(_)));
}

#[test]
fn null_check_then_compare() {
    let result = requires(Some(10_u16), "port")
        .is_not_null()
        .and_then(|v| v.is_in_range(Some(1), Some(1024)));
    assert!(result.is_ok());
}

// ============================================================================
// FREE-STANDING CONTRACTS
// ============================================================================

#[test]
fn requires_that_uses_description_as_condition() {
    let items: Vec<u8> = Vec::new();
    let err = requires_that(!items.is_empty(), "at least one item is required").unwrap_err();
    assert_eq!(
        err.to_string(),
        "at least one item is required. (parameter 'value')"
    );
}

#[test]
fn evaluate_custom_predicate() {
    let err = requires(7, "n").evaluate(|n| n % 2 == 0).unwrap_err();
    assert_eq!(err.condition(), "n should pass the specified condition");
    let err = requires(7, "n")
        .described_as("{0} should be even")
        .evaluate(|n| n % 2 == 0)
        .unwrap_err();
    assert_eq!(err.condition(), "n should be even");
}
