use insight_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = InsightConfig::from_toml("").unwrap();

    // Traversal defaults
    assert_eq!(config.traversal.max_depth, 50);
    assert_eq!(config.traversal.max_nodes, 500);

    // Topology defaults
    assert_eq!(config.topology.absolute_threshold, 15);
    assert_eq!(config.topology.ratio_threshold, 0.3);

    // Cache defaults
    assert_eq!(config.cache.ttl_secs, 60);
    assert_eq!(config.cache.max_entries, 256);

    // Render defaults
    assert_eq!(config.render.timeout_secs, 90);

    // API defaults
    assert_eq!(config.api.request_timeout_secs, 20);
    assert!(!config.api.is_configured());

    // Command defaults
    assert_eq!(config.commands.trigger_graph, "#邀请关系");
    assert_eq!(config.commands.trigger_kick_downline, "#踢关系网");
    assert_eq!(config.commands.kick_confirm_delay_secs, 5);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[traversal]
max_depth = 10

[cache]
ttl_secs = 5

[api]
base_url = "http://127.0.0.1:8080"
api_key = "secret"
"#;
    let config = InsightConfig::from_toml(toml).unwrap();
    assert_eq!(config.traversal.max_depth, 10);
    // Non-overridden fields keep defaults
    assert_eq!(config.traversal.max_nodes, 500);
    assert_eq!(config.cache.ttl_secs, 5);
    assert_eq!(config.cache.max_entries, 256);
    assert!(config.api.is_configured());
}

#[test]
fn config_serde_roundtrip() {
    let config = InsightConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = InsightConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.traversal.max_depth, config.traversal.max_depth);
    assert_eq!(
        roundtripped.commands.trigger_network,
        config.commands.trigger_network
    );
}

#[test]
fn config_rejects_zero_depth() {
    let err = InsightConfig::from_toml("[traversal]\nmax_depth = 0\n").unwrap_err();
    assert!(err.to_string().contains("max_depth"));
}

#[test]
fn config_rejects_ratio_out_of_range() {
    assert!(InsightConfig::from_toml("[topology]\nratio_threshold = 0.0\n").is_err());
    assert!(InsightConfig::from_toml("[topology]\nratio_threshold = 1.5\n").is_err());
    assert!(InsightConfig::from_toml("[topology]\nratio_threshold = 1.0\n").is_ok());
}

#[test]
fn config_rejects_zero_cache_capacity() {
    assert!(InsightConfig::from_toml("[cache]\nmax_entries = 0\n").is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = InsightConfig::from_toml("[traversal\nmax_depth = 3").unwrap_err();
    assert!(matches!(err, insight_core::InsightError::ConfigError(_)));
}

#[test]
fn config_from_missing_file_is_config_error() {
    let err = InsightConfig::from_file("/definitely/not/here/insight.toml").unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn durations_follow_seconds() {
    let config = InsightConfig::default();
    assert_eq!(config.cache.ttl().as_secs(), 60);
    assert_eq!(config.render.timeout().as_secs(), 90);
    assert_eq!(config.commands.kick_confirm_delay().as_secs(), 5);
    assert_eq!(config.commands.triggers().len(), 5);
}
