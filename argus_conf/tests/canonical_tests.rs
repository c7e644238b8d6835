//! Canonicalization of configurations under concurrent decoration.

use argus_conf::{
    CheckConfig, CheckStrategy, ConfigCache, ConfigFields, OptionValue, config_cache,
    default_config,
};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;

#[test]
fn test_concurrent_requests_share_one_instance() {
    let cache = ConfigCache::new();
    let barrier = Barrier::new(THREADS);
    let fields = ConfigFields {
        debug: true,
        strategy: CheckStrategy::NoTime,
    };

    let configs: Vec<Arc<CheckConfig>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let cache = &cache;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    cache.get_or_create(fields)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(cache.len(), 1);
    for config in &configs[1..] {
        assert!(Arc::ptr_eq(&configs[0], config));
    }
}

#[test]
fn test_concurrent_mixed_fields() {
    let cache = ConfigCache::new();
    let barrier = Barrier::new(THREADS);

    let configs: Vec<Arc<CheckConfig>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let cache = &cache;
                let barrier = &barrier;
                s.spawn(move || {
                    let fields = ConfigFields {
                        debug: i % 2 == 0,
                        strategy: CheckStrategy::ALL[i % CheckStrategy::ALL.len()],
                    };
                    barrier.wait();
                    cache.get_or_create(fields)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // i % 2 and i % 4 only ever pair up four ways.
    assert_eq!(cache.len(), 4);
    for a in &configs {
        for b in &configs {
            assert_eq!(a.fields() == b.fields(), Arc::ptr_eq(a, b));
        }
    }
}

#[test]
fn test_global_constructors_agree() {
    let typed = CheckConfig::new(true, CheckStrategy::ConstantTime);
    let untyped = CheckConfig::from_values(
        &OptionValue::Bool(true),
        &OptionValue::Strategy(CheckStrategy::ConstantTime),
    )
    .unwrap();
    let cached = config_cache()
        .get(&ConfigFields {
            debug: true,
            strategy: CheckStrategy::ConstantTime,
        })
        .unwrap();

    assert!(Arc::ptr_eq(&typed, &untyped));
    assert!(Arc::ptr_eq(&typed, &cached));
    assert!(!Arc::ptr_eq(&typed, &default_config()));
}

#[test]
fn test_rejected_values_do_not_register() {
    let cache = ConfigCache::new();
    let result = CheckConfig::from_values_in(
        &cache,
        &OptionValue::from("yes"),
        &OptionValue::Strategy(CheckStrategy::LinearTime),
    );
    assert!(result.is_err());
    assert!(cache.is_empty());
}
