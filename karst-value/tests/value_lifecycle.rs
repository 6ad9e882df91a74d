use karst_heap::HeapStats;
use karst_value::{FunctionId, Value, ValueKind};
use rstest::rstest;

/// The eight type tests, in declaration order.
fn type_tests(value: &Value) -> [bool; 8] {
    [
        value.is_null(),
        value.is_boolean(),
        value.is_integer(),
        value.is_floating_point(),
        value.is_string(),
        value.is_array(),
        value.is_dictionary(),
        value.is_closure(),
    ]
}

fn only(idx: usize) -> [bool; 8] {
    let mut expected = [false; 8];
    expected[idx] = true;
    expected
}

#[rstest]
#[case::default(Value::default(), 0, ValueKind::Null)]
#[case::null(Value::NULL, 0, ValueKind::Null)]
#[case::unit(Value::from(()), 0, ValueKind::Null)]
#[case::boolean_true(Value::from(true), 1, ValueKind::Boolean)]
#[case::boolean_false(Value::from(false), 1, ValueKind::Boolean)]
#[case::integer_zero(Value::from(0u64), 2, ValueKind::Integer)]
#[case::integer_max(Value::from(u64::MAX), 2, ValueKind::Integer)]
#[case::float(Value::from(-2.75), 3, ValueKind::FloatingPoint)]
#[case::float_nan(Value::from(f64::NAN), 3, ValueKind::FloatingPoint)]
fn scalar_type_tests(#[case] value: Value, #[case] idx: usize, #[case] kind: ValueKind) {
    assert_eq!(type_tests(&value), only(idx));
    assert_eq!(value.kind(), kind);
    assert_eq!(value.holders(), None);
}

#[rstest]
#[case::string(Value::make_string("abc"), 4, ValueKind::String)]
#[case::array(Value::make_array([Value::from(1u64)]), 5, ValueKind::Array)]
#[case::dictionary(Value::make_dictionary([("k", Value::NULL)]), 6, ValueKind::Dictionary)]
#[case::closure(Value::make_closure(FunctionId(0), []), 7, ValueKind::Closure)]
fn factories_allocate_their_own_kind(#[case] value: Value, #[case] idx: usize, #[case] kind: ValueKind) {
    assert_eq!(type_tests(&value), only(idx));
    assert_eq!(value.kind(), kind);
    assert_eq!(value.holders(), Some(1));
}

#[test]
fn make_string_is_only_a_string() {
    let value = Value::make_string("not an array");

    assert!(value.is_string());
    assert!(!value.is_array());
    assert!(!value.is_dictionary());
    assert!(!value.is_closure());
    assert_eq!(&*value.get_string().text(), "not an array");
}

#[test]
fn scalar_payloads_are_mutable_in_place() {
    let mut flag = Value::from(false);
    *flag.get_boolean() = true;
    assert_eq!(flag.as_boolean(), Some(true));

    let mut counter = Value::from(41u64);
    *counter.get_integer() += 1;
    assert_eq!(counter.as_integer(), Some(42));

    let mut ratio = Value::from(1.5);
    *ratio.get_floating_point() *= 2.0;
    assert_eq!(ratio.as_floating_point(), Some(3.0));
}

#[test]
fn copying_a_scalar_copies_the_bits() {
    let mut original = Value::from(7u64);
    let copy = original.clone();

    *original.get_integer() = 8;
    assert_eq!(copy.as_integer(), Some(7));
}

#[test]
#[should_panic(expected = "Attempting to read an integer out of boolean")]
fn mismatched_scalar_accessor_panics() {
    let mut value = Value::from(true);
    value.get_integer();
}

#[test]
#[should_panic(expected = "Attempting to read array out of string")]
fn mismatched_aggregate_accessor_panics() {
    let value = Value::make_string("abc");
    value.get_array();
}

#[test]
fn as_accessors_return_none_on_mismatch() {
    let value = Value::make_array([]);

    assert!(value.as_array().is_some());
    assert!(value.as_string().is_none());
    assert!(value.as_dictionary().is_none());
    assert!(value.as_closure().is_none());
    assert_eq!(value.as_integer(), None);
    assert_eq!(value.as_boolean(), None);
    assert_eq!(value.as_floating_point(), None);
}

#[test]
fn take_leaves_null_behind() {
    let before = HeapStats::current();

    let mut source = Value::make_array([Value::from(1u64), Value::from(2u64)]);
    let destination = source.take();

    assert!(source.is_null());
    assert!(destination.is_array());
    assert_eq!(destination.holders(), Some(1));
    assert_eq!(destination.get_array().to_vec(), vec![Value::from(1u64), Value::from(2u64)]);

    drop(source);
    assert_eq!(HeapStats::current().since(before).freed, 0);

    drop(destination);
    assert_eq!(HeapStats::current().since(before), HeapStats { allocated: 1, freed: 1 });
}

#[test]
fn take_on_a_scalar_copies_and_resets() {
    let mut source = Value::from(3.5);
    let destination = source.take();

    assert!(source.is_null());
    assert_eq!(destination.as_floating_point(), Some(3.5));
}

#[test]
fn assign_releases_the_previous_object() {
    let before = HeapStats::current();

    let mut value = Value::make_string("old");
    value.assign(Value::make_string("new"));

    let delta = HeapStats::current().since(before);
    assert_eq!(delta, HeapStats { allocated: 2, freed: 1 });
    assert_eq!(&*value.get_string().text(), "new");
}

#[test]
fn assign_from_shares_instead_of_copying() {
    let before = HeapStats::current();

    let source = Value::make_dictionary([("a", Value::from(1u64))]);
    let mut target = Value::from(true);
    target.assign_from(&source);

    assert!(target.same_object(&source));
    assert_eq!(source.holders(), Some(2));
    assert_eq!(HeapStats::current().since(before).allocated, 1);
}

#[test]
fn assign_from_the_same_object_changes_nothing() {
    let source = Value::make_array([]);
    let mut target = source.clone();
    assert_eq!(source.holders(), Some(2));

    target.assign_from(&source);
    assert_eq!(source.holders(), Some(2));

    let copy = target.clone();
    target.assign_from(&copy);
    assert_eq!(source.holders(), Some(3));
}

#[test]
fn equality_is_by_identity_for_aggregates() {
    let a = Value::make_string("same");
    let b = Value::make_string("same");

    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert!(!a.same_object(&b));
    assert_eq!(**a.get_string(), **b.get_string());
    assert_eq!(Value::from(3u64), Value::from(3u64));
    assert_ne!(Value::from(3u64), Value::from(3.0));
}
