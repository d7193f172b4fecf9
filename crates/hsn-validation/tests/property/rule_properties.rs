use std::sync::Arc;

use hsn_core::models::{CatalogMap, LengthViolation, RuleName};
use hsn_validation::index::{even_prefixes, HierarchyIndex};
use hsn_validation::rules::{self, hierarchy, length, numeric};
use hsn_validation::ValidationCache;
use proptest::prelude::*;

fn chain_catalog(code: &str) -> CatalogMap {
    let mut catalog: CatalogMap = even_prefixes(code)
        .map(|p| (p.to_string(), format!("desc {p}")))
        .collect();
    catalog.insert(code.to_string(), format!("desc {code}"));
    catalog
}

proptest! {
    #[test]
    fn bad_lengths_always_fail_with_a_class(s in "[0-9A-Z]{0,12}") {
        let len = s.chars().count();
        let result = length::validate(&s);
        if len < 2 {
            prop_assert!(!result.passed);
            prop_assert_eq!(length::classify(&s), Some(LengthViolation::TooShort));
            prop_assert!(result.message.contains("too short"));
        } else if len > 8 {
            prop_assert!(!result.passed);
            prop_assert_eq!(length::classify(&s), Some(LengthViolation::TooLong));
            prop_assert!(result.message.contains("too long"));
        } else if len % 2 == 1 {
            prop_assert!(!result.passed);
            prop_assert_eq!(length::classify(&s), Some(LengthViolation::OddLength));
            prop_assert!(result.message.contains("odd length"));
        } else {
            prop_assert!(result.passed);
        }
    }

    #[test]
    fn non_digit_strings_fail_numeric(prefix in "[0-9]{0,6}", bad in "[^0-9]", suffix in "[0-9]{0,6}") {
        let code = format!("{prefix}{bad}{suffix}");
        prop_assert!(!numeric::validate(&code).passed);
    }

    #[test]
    fn complete_chains_pass_hierarchy(code in "([0-9]{2}){1,4}") {
        let index = HierarchyIndex::build(chain_catalog(&code)).unwrap();
        prop_assert!(hierarchy::validate(&code, &index).passed);
        prop_assert!(rules::evaluate(&code, &index).is_valid);
    }

    #[test]
    fn missing_ancestors_are_exactly_the_absent_prefixes(code in "([0-9]{2}){2,4}", keep in proptest::collection::vec(any::<bool>(), 3)) {
        let mut catalog = CatalogMap::new();
        catalog.insert(code.clone(), "leaf".to_string());
        let prefixes: Vec<&str> = even_prefixes(&code).collect();
        let mut expected_missing = Vec::new();
        for (prefix, keep) in prefixes.iter().zip(keep.iter()) {
            if *keep {
                catalog.insert(prefix.to_string(), "parent".to_string());
            } else {
                expected_missing.push(prefix.to_string());
            }
        }
        let index = HierarchyIndex::build(catalog).unwrap();
        prop_assert_eq!(index.missing_ancestors(&code), expected_missing.clone());
        prop_assert_eq!(hierarchy::validate(&code, &index).passed, expected_missing.is_empty());
    }

    #[test]
    fn validity_is_the_and_of_three_rules(code in "[0-9A-C]{0,9}") {
        let index = HierarchyIndex::build(chain_catalog("01011010")).unwrap();
        let outcome = rules::evaluate(&code, &index);
        let three_pass = outcome.rule_results[..3].iter().all(|r| r.passed);
        prop_assert_eq!(outcome.is_valid, three_pass);
        prop_assert_eq!(outcome.rule_results.len(), 4);
        prop_assert_eq!(outcome.rule_results[3].rule, RuleName::Final);
    }

    #[test]
    fn cached_equals_uncached(code in "[0-9]{1,8}") {
        let index = Arc::new(HierarchyIndex::build(chain_catalog("01011010")).unwrap());
        let cache = ValidationCache::new(Arc::clone(&index), 16);
        let uncached = rules::evaluate(&code, &index);
        let first = cache.get(&code);
        let second = cache.get(&code);
        prop_assert_eq!(&*first, &uncached);
        prop_assert_eq!(&*second, &uncached);
        prop_assert_eq!(cache.stats().hits, 1);
    }
}
