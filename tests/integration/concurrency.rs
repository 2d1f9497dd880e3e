use std::{sync::Arc, thread};

use emptiness::{is_empty, Value};

use crate::common::labelled_samples;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn values_are_shareable_across_threads() {
    assert_send_sync::<Value>();
}

#[test]
fn concurrent_classification_matches_sequential() {
    let samples: Arc<Vec<Value>> = Arc::new(
        labelled_samples()
            .into_iter()
            .map(|(_, value, _)| value)
            .collect(),
    );
    let expected: Vec<bool> = samples.iter().map(is_empty).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let samples = Arc::clone(&samples);
            thread::spawn(move || samples.iter().map(is_empty).collect::<Vec<bool>>())
        })
        .collect();

    for handle in handles {
        let observed = handle.join().expect("classifier thread should not panic");
        assert_eq!(observed, expected);
    }
}
