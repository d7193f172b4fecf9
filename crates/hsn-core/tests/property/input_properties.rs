use hsn_core::config::{HsnConfig, ValidationConfig};
use hsn_core::models::{CodeInput, ValidationRequest};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn integers_coerce_to_their_decimal_form(n in any::<i64>()) {
        let input = CodeInput::from(n);
        prop_assert_eq!(input.as_code(), n.to_string());
        let parsed = CodeInput::from_json(&json!(n)).unwrap();
        prop_assert_eq!(parsed.into_code(), n.to_string());
    }

    #[test]
    fn any_string_is_a_single_request(s in ".*") {
        match ValidationRequest::from_json(&json!(s)).unwrap() {
            ValidationRequest::Single(input) => prop_assert_eq!(input.into_code(), s),
            ValidationRequest::Batch(_) => prop_assert!(false, "string parsed as batch"),
        }
    }

    #[test]
    fn batches_keep_length_and_order(codes in proptest::collection::vec("[0-9A-Z]{0,8}", 0..32)) {
        match ValidationRequest::from_json(&json!(codes)).unwrap() {
            ValidationRequest::Batch(inputs) => {
                let back: Vec<String> = inputs.into_iter().map(CodeInput::into_code).collect();
                prop_assert_eq!(back, codes);
            }
            ValidationRequest::Single(_) => prop_assert!(false, "array parsed as single"),
        }
    }

    #[test]
    fn fractional_numbers_are_rejected(x in 0.001f64..1e9) {
        let x = x.trunc() + 0.5;
        prop_assert!(CodeInput::from_json(&json!(x)).is_err());
        prop_assert!(ValidationRequest::from_json(&json!([x])).is_err());
    }

    #[test]
    fn valid_configs_survive_toml(capacity in 1u64..1_000_000, chunk in 1usize..10_000, parallel in any::<bool>()) {
        let config = HsnConfig {
            validation: ValidationConfig {
                cache_capacity: capacity,
                parallel_batch: parallel,
                batch_chunk_size: chunk,
            },
            ..HsnConfig::default()
        };
        let text = config.to_toml().unwrap();
        let back = HsnConfig::from_toml(&text).unwrap();
        prop_assert!(back.validate().is_ok());
        prop_assert_eq!(back, config);
    }
}
