//! Tests for the command handlers behind the `consul-data` binary.

use clap::Parser;
use consul_data::commands::config::default_config_json;
use consul_data::commands::generate::{generate_data, load_config, write_data};
use consul_data::commands::{load_data, run_describe, run_generate, run_push};
use consul_data::{GenerateOpts, PushCommandArgs};
use consul_data_core::Config;
use std::ffi::OsStr;
use std::fs;
use tempfile::TempDir;

const SMALL_CONFIG_YAML: &str = r#"
KV:
  NumEntries: 12
  PetName:
    Prefix: "app/"
    Segments: 2
Catalog:
  NumNodes: 3
  MinServicesPerNode: 2
  MaxServicesPerNode: 4
"#;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, SMALL_CONFIG_YAML).unwrap();
    path
}

#[test]
fn test_generate_to_file_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    let opts = GenerateOpts {
        config: Some(config),
        seed: Some(42),
    };
    run_generate(opts.clone(), Some(first.clone())).unwrap();
    run_generate(opts, Some(second.clone())).unwrap();

    let first = fs::read_to_string(first).unwrap();
    let second = fs::read_to_string(second).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("{\n   \"KV\": {"));
}

#[test]
fn test_generated_file_loads_back() {
    let dir = TempDir::new().unwrap();
    let opts = GenerateOpts {
        config: Some(write_config(&dir)),
        seed: Some(7),
    };
    let data = generate_data(&opts).unwrap();

    let path = dir.path().join("data.json");
    write_data(&data, Some(&path)).unwrap();

    let loaded = load_data(&path).unwrap();
    assert_eq!(loaded, data);

    let summary = loaded.summary();
    assert_eq!(summary.keys, 12);
    assert_eq!(summary.nodes, 3);
    assert!(loaded.kv.keys().all(|k| k.starts_with("app/")));

    run_describe(&path).unwrap();
}

#[test]
fn test_missing_files_name_their_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let err = load_data(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));

    let err = load_config(Some(&missing)).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}

#[test]
fn test_invalid_kind_fails_generation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "KV": { "ValueType": "lorem-ipsum" } }"#).unwrap();

    let err = generate_data(&GenerateOpts {
        config: Some(path),
        seed: Some(1),
    })
    .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("KV.ValueType"), "{message}");
    assert!(message.contains("lorem-ipsum"), "{message}");
}

#[test]
fn test_default_config_round_trips() {
    let json = default_config_json().unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), Config::default());
    assert!(json.contains("\"NumEntries\": 1024"));
}

#[derive(Parser)]
struct PushCli {
    #[command(flatten)]
    push: PushCommandArgs,
}

#[test]
fn test_push_data_and_output_conflict() {
    assert!(
        PushCli::try_parse_from(["push", "--data", "in.json", "--output", "out.json"]).is_err()
    );

    let cli = PushCli::try_parse_from(["push", "--data", "in.json", "--parallel", "4"]).unwrap();
    assert_eq!(
        cli.push.data.as_deref(),
        Some(std::path::Path::new("in.json"))
    );
    assert_eq!(cli.push.push.parallel, 4);

    let cli = PushCli::try_parse_from(["push", "--seed", "9", "--output", "out.json"]).unwrap();
    assert_eq!(cli.push.generate.seed, Some(9));
}

#[tokio::test]
async fn test_push_generates_then_reports_unreachable_agent() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let output = dir.path().join("pushed.json");

    let cli = PushCli::try_parse_from([
        OsStr::new("push"),
        OsStr::new("-c"),
        config.as_os_str(),
        OsStr::new("--seed"),
        OsStr::new("3"),
        OsStr::new("--output"),
        output.as_os_str(),
        OsStr::new("--http-addr"),
        OsStr::new("127.0.0.1:1"),
    ])
    .unwrap();

    let err = run_push(cli.push).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to push data to Consul"), "{message}");
    // Output is only written after a successful push
    assert!(!output.exists());
}
