use super::*;

#[test]
fn from_vars_uses_defaults() {
    let cfg = HostConfig::from_vars(None, None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = HostConfig::from_vars(Some("8080"), Some("/srv/site"), Some("debug")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
    assert_eq!(cfg.log_filter, "debug");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_vars(Some(" "), Some(""), Some("  ")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_vars(Some("http"), None, None).unwrap_err();
    assert!(matches!(err, HostError::InvalidVar { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");

    assert!(HostConfig::from_vars(Some("70000"), None, None).is_err());
}
