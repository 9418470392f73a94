use iniparser_core::ParseOptions;
use iniparser_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_minimal_config_uses_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.format, ParseOptions::default());
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
}

#[test]
fn load_format_and_logging() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let log_path = tmp.path().join("ini.log");
    let toml = format!(
        r#"
version = 1

[format]
sections = false
allow_repeated_values = false

[logging]
level = "debug"
file_level = "trace"
file = "{}"
"#,
        log_path.display()
    );
    write_file(&cfg_path, &toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert!(!rc.format.sections);
    assert!(!rc.format.allow_repeated_values);
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(log_path));
}

#[test]
fn partial_format_section_keeps_other_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[format]\nallow_repeated_values = false\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert!(rc.format.sections);
    assert!(!rc.format.allow_repeated_values);
}
