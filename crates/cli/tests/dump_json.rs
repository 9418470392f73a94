use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn ini(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ini"));
    cmd.env("XDG_CONFIG_HOME", config_home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn dump_normalises_text() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("messy.ini");
    fs::write(&file, "  [ s ]\n  k =  v  \nnot a pair\n").unwrap();

    ini(tmp.path())
        .args(["dump", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("[ s ]\nk=v\n\n");
}

#[test]
fn dump_json_preserves_order_and_multi_values() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("app.ini");
    fs::write(&file, "[z]\nb=1\nb=2\na=3\n[a]\nx=\n").unwrap();

    let output = ini(tmp.path())
        .args(["dump", "--json", file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["z"]["b"], serde_json::json!(["1", "2"]));
    assert_eq!(value["z"]["a"], serde_json::json!("3"));
    assert_eq!(value["a"]["x"], serde_json::json!(""));

    // section order follows the file
    assert!(stdout.find("\"z\"").unwrap() < stdout.find("\"a\"").unwrap());
}
