use tapestry_core::config::{defaults, TapestryConfig};
use tapestry_core::constants::MAX_CHAIN_HARD_CAP;
use tapestry_core::errors::TapestryError;

#[test]
fn empty_config_is_all_defaults() {
    let config = TapestryConfig::from_toml_str("").unwrap();
    assert_eq!(
        config.weaver.max_chain_length,
        defaults::DEFAULT_MAX_CHAIN_LENGTH
    );
    assert_eq!(config.cache.capacity, defaults::DEFAULT_CACHE_CAPACITY);
    assert!(config.weaver.predicates.causal.is_empty());
}

#[test]
fn partial_config_fills_in_missing_fields() {
    let config = TapestryConfig::from_toml_str(
        r#"
        [weaver]
        max_chain_length = 3

        [weaver.predicates]
        causal = ["heats", "burns"]

        [cache]
        capacity = 16

        [storage]
        read_pool_size = 2
        "#,
    )
    .unwrap();

    assert_eq!(config.weaver.max_chain_length, 3);
    assert!(config.weaver.predicates.is_causal("heats"));
    assert!(!config.weaver.predicates.is_causal("is-a"));
    assert_eq!(config.cache.capacity, 16);
    assert_eq!(
        config.cache.max_age_secs,
        defaults::DEFAULT_CACHE_MAX_AGE_SECS
    );
    assert_eq!(config.storage.read_pool_size, 2);
}

#[test]
fn oversized_chain_length_is_clamped_to_the_hard_cap() {
    let config = TapestryConfig::from_toml_str("[weaver]\nmax_chain_length = 9999").unwrap();
    assert_eq!(
        config.weaver.effective_max_chain_length(),
        MAX_CHAIN_HARD_CAP
    );
}

#[test]
fn malformed_toml_is_an_error() {
    let result = TapestryConfig::from_toml_str("[weaver]\nmax_chain_length = \"many\"");
    assert!(matches!(
        result,
        Err(TapestryError::Serialization { .. })
    ));
}
