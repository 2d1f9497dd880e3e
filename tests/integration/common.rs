use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use emptiness::{lib::telemetry, Callable, Opaque, Symbol, Value};

/// Route classification traces to stderr while tests run.
pub fn init_test_tracing() {
    telemetry::init_tracing_with_default("emptiness=trace").expect("tracing should initialize");
}

/// A callable that records how often it runs and returns an empty-looking value.
pub fn counting_callable() -> (Callable, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let callable = Callable::named("counting", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::Null
    });
    (callable, calls)
}

/// One sample per category with its expected classification.
pub fn labelled_samples() -> Vec<(&'static str, Value, bool)> {
    vec![
        ("undefined", Value::Undefined, true),
        ("null", Value::Null, true),
        ("blank text", Value::from(" \t "), true),
        ("text", Value::from("a"), false),
        ("zero", Value::from(0), true),
        ("negative zero", Value::from(-0.0), true),
        ("one", Value::from(1), false),
        ("nan", Value::from(f64::NAN), false),
        ("big zero", Value::BigInt(0.into()), true),
        ("big", Value::from(u128::MAX), false),
        ("false", Value::from(false), true),
        ("true", Value::from(true), false),
        ("empty sequence", Value::Sequence(vec![]), true),
        ("sequence of zero", Value::sequence([0]), false),
        ("empty mapping", Value::mapping(Vec::<(String, Value)>::new()), true),
        ("mapping with undefined", Value::mapping([("a", Value::Undefined)]), false),
        ("symbol", Value::from(Symbol::new("id")), false),
        ("callable", Value::from(Callable::new(|_| Value::Undefined)), false),
        ("opaque", Value::from(Opaque::new(std::time::Instant::now())), false),
    ]
}
