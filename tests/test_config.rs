use attic::config::Config;

mod common;
use common::{unique_dir, write_file};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.server.max_connections, 1024);
    assert_eq!(cfg.static_files.root.to_str().unwrap(), "WWWROOT");
    assert_eq!(cfg.access_log.path.to_str().unwrap(), "server.log");
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let dir = unique_dir("config-missing");
    let cfg = Config::load_from(&dir.join("no-such-file.yaml")).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.static_files.root.to_str().unwrap(), "WWWROOT");
}

#[test]
fn test_config_full_yaml() {
    let dir = unique_dir("config-full");
    let path = write_file(
        &dir,
        "attic.yaml",
        b"server:\n  listen_addr: \"127.0.0.1:9000\"\n  max_connections: 16\nstatic_files:\n  root: \"public\"\naccess_log:\n  path: \"requests.log\"\n",
    );

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.server.max_connections, 16);
    assert_eq!(cfg.static_files.root.to_str().unwrap(), "public");
    assert_eq!(cfg.access_log.path.to_str().unwrap(), "requests.log");
}

#[test]
fn test_config_partial_yaml_keeps_other_defaults() {
    let dir = unique_dir("config-partial");
    let path = write_file(
        &dir,
        "attic.yaml",
        b"server:\n  listen_addr: \"127.0.0.1:9000\"\n",
    );

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    // Untouched fields keep their defaults
    assert_eq!(cfg.server.max_connections, 1024);
    assert_eq!(cfg.static_files.root.to_str().unwrap(), "WWWROOT");
    assert_eq!(cfg.access_log.path.to_str().unwrap(), "server.log");
}

#[test]
fn test_config_invalid_yaml_is_an_error() {
    let dir = unique_dir("config-invalid");
    let path = write_file(&dir, "attic.yaml", b"server: 17\n");

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_config_load_without_env_var() {
    // When ATTIC_CONFIG is not set, load() falls back to ./attic.yaml,
    // which does not exist here, so the defaults apply.
    unsafe {
        std::env::remove_var("ATTIC_CONFIG");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8080");
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.access_log.path, cfg2.access_log.path);
}
