//! End-to-end validation scenarios against the three-entry horse catalog.

use hsn_core::config::ValidationConfig;
use hsn_core::errors::HsnError;
use hsn_core::models::{CatalogMap, RuleName};
use hsn_validation::ValidationEngine;
use test_fixtures::horse_catalog;

fn engine() -> ValidationEngine {
    ValidationEngine::with_catalog(ValidationConfig::default(), horse_catalog()).unwrap()
}

// ─── Reference scenarios ───

#[test]
fn fully_valid_code() {
    let outcome = engine().validate_one("010110").unwrap();
    assert!(outcome.is_valid);
    assert_eq!(outcome.description, "Pure-bred breeding animals");
    for rule in [RuleName::Numeric, RuleName::Length, RuleName::Hierarchy] {
        assert!(outcome.rule(rule).unwrap().passed, "{rule} should pass");
    }
}

#[test]
fn odd_length_code() {
    let outcome = engine().validate_one("12345").unwrap();
    assert!(!outcome.is_valid);
    let length = outcome.rule(RuleName::Length).unwrap();
    assert!(!length.passed);
    assert!(length.message.contains("odd length"));
    assert_eq!(outcome.description, "not found");
}

#[test]
fn absent_code_reports_not_found_without_ancestors() {
    let outcome = engine().validate_one("999999").unwrap();
    assert!(outcome.rule(RuleName::Numeric).unwrap().passed);
    assert!(outcome.rule(RuleName::Length).unwrap().passed);

    let hierarchy = outcome.rule(RuleName::Hierarchy).unwrap();
    assert!(!hierarchy.passed);
    assert!(hierarchy.message.contains("code not found in hierarchy"));
    assert!(!hierarchy.message.contains("99,"));
    assert!(!hierarchy.message.contains("9999,"));
}

#[test]
fn batch_preserves_order() {
    let batch = engine()
        .validate_batch(&["010110", "12345", "01", "ABC"])
        .unwrap();
    let verdicts: Vec<bool> = batch.iter().map(|o| o.is_valid).collect();
    assert_eq!(verdicts, vec![true, false, true, false]);
    let codes: Vec<&str> = batch.iter().map(|o| o.code.as_str()).collect();
    assert_eq!(codes, vec!["010110", "12345", "01", "ABC"]);
    assert!(batch.completed);
    assert!(!batch.all_valid());
}

// ─── Caching ───

#[test]
fn repeat_validation_is_identical_and_a_hit() {
    let engine = engine();
    let first = engine.validate_one("010110").unwrap();
    let before = engine.cache_stats().unwrap();
    let second = engine.validate_one("010110").unwrap();
    let after = engine.cache_stats().unwrap();

    assert_eq!(first, second);
    assert_eq!(after.hits, before.hits + 1);
    assert_eq!(after.misses, before.misses);
}

#[test]
fn batch_duplicates_are_kept_and_hit_the_cache() {
    let engine = engine();
    let batch = engine
        .validate_batch(&["0101", "0101", "0101"])
        .unwrap();
    assert_eq!(batch.len(), 3);
    assert!(batch.iter().all(|o| o.code == "0101" && o.is_valid));

    let stats = engine.cache_stats().unwrap();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.size, 1);
}

#[test]
fn capacity_bound_evicts_least_recently_used() {
    let engine = ValidationEngine::with_catalog(
        ValidationConfig {
            cache_capacity: 2,
            parallel_batch: false,
            ..ValidationConfig::default()
        },
        horse_catalog(),
    )
    .unwrap();

    engine.validate_one("01").unwrap();
    engine.validate_one("0101").unwrap();
    engine.validate_one("010110").unwrap(); // evicts "01"

    let stats = engine.cache_stats().unwrap();
    assert_eq!(stats.size, 2);
    assert_eq!(stats.capacity, 2);

    engine.validate_one("01").unwrap();
    assert_eq!(engine.cache_stats().unwrap().misses, stats.misses + 1);
}

#[test]
fn catalog_swap_invalidates_cached_outcomes() {
    let engine = engine();
    assert!(!engine.validate_one("0201").unwrap().is_valid);
    engine.validate_one("010110").unwrap();

    let mut next: CatalogMap = horse_catalog();
    next.insert("02".to_string(), "Meat and edible meat offal".to_string());
    next.insert("0201".to_string(), "Meat of bovine animals".to_string());
    next.insert("010110".to_string(), "Pure-bred breeding horses".to_string());
    engine.load_catalog(next).unwrap();

    let swapped = engine.validate_one("0201").unwrap();
    assert!(swapped.is_valid, "outcome must be recomputed, not served stale");
    assert_eq!(
        engine.validate_one("010110").unwrap().description,
        "Pure-bred breeding horses"
    );

    let stats = engine.cache_stats().unwrap();
    assert_eq!(stats.hits, 0, "new catalog starts with a new cache");
    assert_eq!(stats.misses, 2);
}

#[test]
fn clear_cache_forces_recompute() {
    let engine = engine();
    engine.validate_one("01").unwrap();
    engine.clear_cache().unwrap();
    engine.validate_one("01").unwrap();
    let stats = engine.cache_stats().unwrap();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 0);
}

// ─── Structural errors ───

#[test]
fn empty_catalog_is_rejected() {
    let engine = ValidationEngine::default();
    let err = engine.load_catalog(CatalogMap::new()).unwrap_err();
    assert!(matches!(err, HsnError::InvalidCatalog { .. }));
    assert!(!engine.is_loaded().unwrap());
}

#[test]
fn validation_before_load_is_an_error() {
    let engine = ValidationEngine::default();
    assert!(matches!(
        engine.validate_one("01"),
        Err(HsnError::NoCatalogLoaded)
    ));
}

#[test]
fn malformed_codes_never_abort_a_batch() {
    let batch = engine()
        .validate_batch(&["", "\u{0}", "01", "12.34", "0101"])
        .unwrap();
    assert_eq!(batch.len(), 5);
    assert_eq!(batch.valid_count(), 2);
}
