use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("termdict");
    cmd.env_remove("GOOGLE_TRANSLATE_API_KEY")
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn missing_api_key_aborts_before_reading_terms() {
    let tmp = TempDir::new().expect("create temp dir");
    let terms = tmp.path().join("terms.txt");
    let output = tmp.path().join("out.json");
    fs::write(&terms, "сеть\n").unwrap();

    let out = cmd()
        .arg("--terms")
        .arg(&terms)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("GOOGLE_TRANSLATE_API_KEY"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn missing_terms_file_is_nothing_to_do() {
    let tmp = TempDir::new().expect("create temp dir");
    let output = tmp.path().join("out.json");

    let out = cmd()
        .arg("--api-key")
        .arg("offline-key")
        .arg("--terms")
        .arg(tmp.path().join("absent.txt"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
    assert!(stderr.contains("No terms to translate"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn mock_run_writes_dictionary() {
    let tmp = TempDir::new().expect("create temp dir");
    let terms = tmp.path().join("terms.txt");
    let output = tmp.path().join("out.json");
    fs::write(&terms, "сеть\n  сервер  \n\n").unwrap();

    cmd()
        .arg("--mock")
        .arg("--skip-blank-lines")
        .arg("--terms")
        .arg(&terms)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let raw = fs::read_to_string(&output).expect("output written");
    assert!(raw.contains("\"сеть\""), "non-ASCII must be literal: {}", raw);

    let json: Value = serde_json::from_str(&raw).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(json["сеть"]["translation"], "сеть_ky");
    assert_eq!(json["сервер"]["translation"], "сервер_ky");
    assert!(json["сервер"]["article"].as_str().unwrap().len() > 0);
}

#[test]
fn unwritable_output_still_succeeds() {
    let tmp = TempDir::new().expect("create temp dir");
    let terms = tmp.path().join("terms.txt");
    fs::write(&terms, "сеть\n").unwrap();

    let out = cmd()
        .arg("--mock")
        .arg("--terms")
        .arg(&terms)
        .arg("--output")
        .arg(tmp.path().join("missing-dir").join("out.json"))
        .assert()
        .success()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error saving dictionary"), "stderr: {}", stderr);
}
