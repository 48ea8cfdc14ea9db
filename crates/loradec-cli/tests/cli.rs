use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("loradec"))
}

// Cayenne LPP: channel 1, temperature 27.2 (0x01 0x67 0x01 0x10).
const CAYENNE_TEMPERATURE_B64: &str = "AWcBEA==";
// Laird: contact sensor state, value 1 (0x09 0x00 0x00 0x01 0x01 0x01).
const LAIRD_CONTACT_B64: &str = "CQAAAQEB";

#[test]
fn help_lists_decode() {
    cmd().arg("decode").arg("--help").assert().success();
}

#[test]
fn decode_cayenne_to_stdout() {
    let assert = cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("cayenne")
        .arg(CAYENNE_TEMPERATURE_B64)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["protocol"], "cayenne");
    assert_eq!(value["payload_bytes"], 4);
    assert_eq!(value["records"]["1"]["type_name"], "Temperature Sensor");
    assert_eq!(value["records"]["1"]["value"], 27.2);
}

#[test]
fn decode_laird_to_stdout() {
    let assert = cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("laird")
        .arg(LAIRD_CONTACT_B64)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["records"][0]["type"], "Laird_Contact_Sensor");
    assert_eq!(value["records"][0]["value"], 1);
}

#[test]
fn decode_writes_report_file() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("decoded.json");

    cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("cayenne")
        .arg(CAYENNE_TEMPERATURE_B64)
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: decoded record written"));

    let contents = std::fs::read_to_string(&report).expect("read report");
    let _: Value = serde_json::from_str(&contents).expect("valid json");
}

#[test]
fn decode_empty_laird_result_notes_absence() {
    // 5-byte contact sensor payload fails the length gate.
    cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("laird")
        .arg("CQAAAQE=")
        .arg("--stdout")
        .assert()
        .success()
        .stderr(contains("no decodable record"));
}

#[test]
fn invalid_base64_shows_error_and_hint() {
    cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("cayenne")
        .arg("not base64!")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unknown_cayenne_type_fails_with_hint() {
    // 0x03 0x63 0x01 0x02: type code 99 is not in the descriptor table.
    cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("cayenne")
        .arg("A2MBAg==")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("unknown sensor type code: 99"));
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("decoded.json");

    cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("laird")
        .arg(LAIRD_CONTACT_B64)
        .arg("--stdout")
        .arg("-o")
        .arg(&report)
        .assert()
        .failure();
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("decode")
        .arg("--protocol")
        .arg("laird")
        .arg(LAIRD_CONTACT_B64)
        .arg("--stdout")
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure();
}
