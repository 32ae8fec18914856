use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rindirect::config::Config;
use rindirect::config::check::check_config;
use rindirect::models::entry::Entry;
use rindirect::models::view_mode::ViewMode;
use std::fs;

mod common;
use common::{rin, setup_test_config, write_test_config};

#[test]
fn test_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.end_time, "22:00");
    assert_eq!(cfg.default_view, ViewMode::Schedule);
    assert_eq!(
        cfg.default_entries,
        vec![Entry::new("Lunch", "60"), Entry::new("Break", "30")]
    );
}

#[test]
fn test_config_yaml_defaults_and_numbers() {
    let cfg = Config::from_yaml("end_time: \"06:30\"\n").unwrap();
    assert_eq!(cfg.end_time, "06:30");
    assert_eq!(cfg.default_entries.len(), 2);

    let cfg = Config::from_yaml(
        "default_entries:\n  - label: stretch\n    minutes: 10\n  - minutes: \"5\"\n",
    )
    .unwrap();
    assert_eq!(cfg.end_time, "22:00");
    assert_eq!(cfg.default_entries[0].duration, "10");
    assert_eq!(cfg.default_entries[1].label, "");

    let seeded = cfg.seed_entries();
    assert_eq!(seeded.get(0).unwrap().label, "Stretch");

    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    assert!(Config::from_yaml("end_time: [").is_err());
}

#[test]
fn test_config_round_trip_through_file() {
    let path = setup_test_config("lib_round_trip");
    let path = std::path::PathBuf::from(path);

    let mut cfg = Config::default();
    cfg.end_time = "18:15".into();
    cfg.default_view = ViewMode::Eod;
    cfg.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn test_check_config_report() {
    let raw = "end_time: \"7pm\"\ncolour: purple\ndefault_entries:\n  - label: x\n    minutes: abc\n";
    let cfg = Config::from_yaml(raw).unwrap();
    let report = check_config(raw, &cfg);

    assert_eq!(report.missing, vec!["default_view".to_string()]);
    assert_eq!(report.unknown, vec!["colour".to_string()]);
    assert_eq!(report.problems.len(), 2);
    assert!(!report.is_clean());

    let clean = Config::default().to_yaml().unwrap();
    assert!(check_config(&clean, &Config::default()).is_clean());
}

#[test]
fn test_init_writes_default_config() {
    let path = setup_test_config("init_default");

    rin()
        .args(["--config", &path, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&path).expect("config written");
    assert!(content.contains("end_time"));
    assert!(content.contains("Lunch"));

    // Second init keeps the file
    fs::write(&path, "end_time: \"05:00\"\n").unwrap();
    rin()
        .args(["--config", &path, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "end_time: \"05:00\"\n");

    rin()
        .args(["--config", &path, "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("22:00"));
}

#[test]
fn test_config_print_and_check() {
    let path = setup_test_config("config_print");
    rin().args(["--config", &path, "init"]).assert().success();

    rin()
        .args(["--config", &path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("end_time:").and(contains("22:00")))
        .stdout(contains("default_view: schedule"));

    rin()
        .args(["--config", &path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete and valid"));
}

#[test]
fn test_config_check_reports_problems() {
    let path = write_test_config("config_check_bad", "end_time: \"10pm\"\n");

    rin()
        .args(["--config", &path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field 'default_view'"))
        .stderr(contains("not a valid HH:MM"));
}
