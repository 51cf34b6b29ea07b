use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
    assert_eq!(cfg.content_file, PathBuf::from(DEFAULT_CONTENT_FILE));
}

#[test]
fn overrides_are_honored() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("SITE_DIR", "/srv/site"),
        ("CONTENT_FILE", "fixtures/me.yaml"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/site"));
    assert_eq!(cfg.content_file, PathBuf::from("fixtures/me.yaml"));
}

#[test]
fn blank_paths_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("SITE_DIR", "  ")])).unwrap();
    assert_eq!(cfg.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

// The only test that touches the host variables.
#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("SITE_DIR");
        std::env::remove_var("CONTENT_FILE");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.site_dir, PathBuf::from(DEFAULT_SITE_DIR));

    unsafe { std::env::remove_var("PORT") };
}
