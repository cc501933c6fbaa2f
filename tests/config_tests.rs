//! Tests for loading the server configuration from YAML files

use blog_graphql::prelude::*;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config_file() {
    let file = write_config(
        r#"
host: 0.0.0.0
port: 8081
log_level: debug
playground: false
seed: false
"#,
    );

    let config = ServerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:8081");
    assert_eq!(config.log_level, "debug");
    assert!(!config.playground);
    assert!(!config.seed);
}

#[test]
fn test_load_partial_config_file() {
    let file = write_config("log_level: warn\n");

    let config = ServerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.log_level, "warn");
    assert_eq!(config.port, 4000);
    assert!(config.seed);
}

#[test]
fn test_unknown_field_type_is_rejected() {
    let file = write_config("playground: maybe\n");

    assert!(ServerConfig::from_yaml_file(file.path().to_str().unwrap()).is_err());
}

#[tokio::test]
async fn test_config_file_drives_builder() {
    let file = write_config("seed: false\n");
    let config = ServerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    let host = ServerBuilder::new().with_config(config).build_host().unwrap();

    assert!(host.store.list_users().await.unwrap().is_empty());
    assert!(!host.config.seed);
}
