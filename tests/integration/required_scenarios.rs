use std::sync::atomic::Ordering;

use emptiness::{is_empty, Category, Symbol, Value};

use crate::common::{counting_callable, init_test_tracing, labelled_samples};

#[test]
fn absent_values_are_empty() {
    init_test_tracing();
    assert!(is_empty(&Value::Undefined));
    assert!(is_empty(&Value::Null));
    assert!(is_empty(&None::<&str>));
}

#[test]
fn text_rules() {
    assert!(is_empty(&Value::from("")));
    assert!(is_empty(&Value::from("   ")));
    assert!(!is_empty(&Value::from("a")));
    assert!(is_empty(""));
    assert!(is_empty("   "));
    assert!(!is_empty("a"));
}

#[test]
fn numeric_rules() {
    assert!(is_empty(&Value::from(0)));
    assert!(is_empty(&Value::from(-0.0)));
    assert!(!is_empty(&Value::from(1)));
    assert!(!is_empty(&Value::from(f64::NAN)));
    assert!(is_empty(&0));
    assert!(is_empty(&-0.0));
    assert!(!is_empty(&1));
    assert!(!is_empty(&f64::NAN));
}

#[test]
fn boolean_rules() {
    assert!(is_empty(&Value::from(false)));
    assert!(!is_empty(&Value::from(true)));
    assert!(is_empty(&false));
    assert!(!is_empty(&true));
}

#[test]
fn sequence_length_decides_not_contents() {
    assert!(is_empty(&Value::Sequence(vec![])));
    assert!(!is_empty(&Value::sequence([0])));
    assert!(is_empty(&Vec::<i32>::new()));
    assert!(!is_empty(&vec![0]));
}

#[test]
fn mapping_key_presence_decides_not_values() {
    assert!(is_empty(&Value::mapping(Vec::<(String, Value)>::new())));
    assert!(!is_empty(&Value::mapping([("a", Value::Undefined)])));
}

#[test]
fn symbols_are_never_empty() {
    assert!(!is_empty(&Value::from(Symbol::anonymous())));
    assert!(!is_empty(&Symbol::new("")));
}

#[test]
fn callables_are_never_empty_and_never_invoked() {
    let (callable, calls) = counting_callable();

    assert!(!is_empty(&Value::from(callable.clone())));
    assert!(!is_empty(&callable));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // The body returns an empty value; that must not leak into the verdict.
    assert!(is_empty(&callable.call(&[])));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn every_category_is_covered_by_the_samples() {
    let covered: Vec<Category> = labelled_samples()
        .iter()
        .map(|(_, value, _)| value.category())
        .collect();

    for category in Category::ALL {
        assert!(
            covered.contains(&category),
            "samples should include a {category} value"
        );
    }
}

#[test]
fn samples_classify_as_labelled() {
    for (label, value, expected) in labelled_samples() {
        assert_eq!(is_empty(&value), expected, "{label} misclassified");
    }
}

#[test]
fn classification_is_idempotent() {
    for (label, value, _) in labelled_samples() {
        let first = is_empty(&value);
        for _ in 0..3 {
            assert_eq!(is_empty(&value), first, "{label} changed between calls");
        }
        assert_eq!(value.is_empty(), first);
    }
}
