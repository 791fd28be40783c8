//! End-to-end startup of the `linkcfg` binary.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

const SECRET_19: &str = "0123456789abcdefghi";
const SECRET_20: &str = "0123456789abcdefghij";

fn run(dir: &Path, toml: &str, secret: &str) -> Output {
    let conf = dir.join("server.toml");
    std::fs::write(&conf, toml).unwrap();

    Command::new(env!("CARGO_BIN_EXE_linkcfg"))
        .env_clear()
        .env("LINK_CONF", &conf)
        .env("LINK_JWT_SECRET", secret)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn record<'a>(records: &'a [Value], name: &str) -> &'a Value {
    records
        .iter()
        .find(|r| r["name"] == name)
        .unwrap_or_else(|| panic!("no record for {name}"))
}

#[test]
fn short_secret_exits_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), "", SECRET_19);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("jwt_secret"), "stderr: {stderr}");
}

#[test]
fn valid_secret_prints_records() {
    let dir = tempfile::tempdir().unwrap();
    let toml = r#"
        server_addr = ":8443"
        db_file = "data.db"
        cert_file = "/etc/link/vpn_cert.pem"
        max_client = 250
        proxy_protocol = true
    "#;
    let output = run(dir.path(), toml, SECRET_20);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["name"], "server_addr");
    assert_eq!(records[0]["env"], "LINK_SERVER_ADDR");
    assert_eq!(records[0]["data"], ":8443");
    assert!(records.iter().all(|r| r["name"] != "conf"));

    assert_eq!(record(&records, "max_client")["data"], 250);
    assert_eq!(record(&records, "proxy_protocol")["data"], true);
    assert_eq!(record(&records, "jwt_secret")["data"], SECRET_20);
    assert_eq!(
        record(&records, "cert_file")["data"],
        "/etc/link/vpn_cert.pem"
    );
    assert_eq!(
        record(&records, "db_file")["data"],
        dir.path().join("data.db").to_string_lossy().as_ref()
    );
    assert_eq!(record(&records, "log_path")["data"], "");
}

#[test]
fn numeric_looking_secret_keeps_its_text() {
    let dir = tempfile::tempdir().unwrap();
    let secret = "00000000000000000000123";
    let output = run(dir.path(), "", secret);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record(&records, "jwt_secret")["data"], secret);
}

#[test]
fn missing_config_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_linkcfg"))
        .env_clear()
        .env("LINK_CONF", dir.path().join("absent.toml"))
        .env("LINK_JWT_SECRET", SECRET_20)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}
