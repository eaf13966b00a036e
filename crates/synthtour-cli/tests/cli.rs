use assert_cmd::Command;
use predicates::prelude::*;

fn synthtour() -> Command {
    Command::cargo_bin("synthtour").expect("binary built")
}

#[test]
fn test_help_shows_all_commands() {
    synthtour()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("consent"));
}

#[test]
fn test_sample_prints_json_record() {
    synthtour()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"query\""))
        .stdout(predicate::str::contains("\"answer\": \"72\""));
}

#[test]
fn test_medical_flag_selects_other_sample() {
    synthtour()
        .args(["sample", "--medical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glm-4.7"))
        .stdout(predicate::str::contains("myocardial stunning"));
}

#[test]
fn test_consent_show_without_record() {
    let home = tempfile::tempdir().expect("tempdir");
    synthtour()
        .env("SYNTHTOUR_HOME", home.path())
        .args(["consent", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No consent recorded"));
}

#[test]
fn test_config_path_respects_home_override() {
    let home = tempfile::tempdir().expect("tempdir");
    synthtour()
        .env("SYNTHTOUR_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_writes_default_file() {
    let home = tempfile::tempdir().expect("tempdir");
    synthtour()
        .env("SYNTHTOUR_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("config.toml").exists());
}
