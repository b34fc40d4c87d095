use baak_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = BaakConfig::from_toml("").unwrap();

    assert_eq!(config.session.timeout_minutes, 30);
    assert_eq!(config.session.max_exchanges, 3);

    assert_eq!(config.knowledge.top_k, 5);
    assert_eq!(config.knowledge.min_score, 0.45);
    assert_eq!(config.knowledge.catalog_top_k, 30);
    assert_eq!(config.knowledge.catalog_min_score, 0.30);
    assert_eq!(config.knowledge.info_top_k, 20);
    assert_eq!(config.knowledge.info_min_score, 0.30);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = BaakConfig::from_toml(
        r#"
[session]
timeout_minutes = 5

[knowledge]
top_k = 8
"#,
    )
    .unwrap();

    assert_eq!(config.session.timeout_minutes, 5);
    assert_eq!(config.session.max_exchanges, 3);
    assert_eq!(config.knowledge.top_k, 8);
    assert_eq!(config.knowledge.min_score, 0.45);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    assert!(BaakConfig::from_toml("session = \"nope\"").is_err());
}

#[test]
fn config_roundtrips_through_toml() {
    let config = BaakConfig::default();
    let rendered = toml::to_string(&config).unwrap();
    let back = BaakConfig::from_toml(&rendered).unwrap();
    assert_eq!(back.session.timeout_minutes, config.session.timeout_minutes);
    assert_eq!(back.knowledge.catalog_top_k, config.knowledge.catalog_top_k);
}
