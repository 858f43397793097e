use assert_cmd::Command;
use predicates::str::contains;

fn variables() -> Command {
    Command::cargo_bin("primer-variables").unwrap()
}

fn datatypes() -> Command {
    Command::cargo_bin("primer-datatypes").unwrap()
}

#[test]
fn variables_prints_shadowing_section() {
    variables()
        .assert()
        .success()
        .stdout(contains("[shadowing]"))
        .stdout(contains("outer again: 5"));
}

#[test]
fn variables_json_carries_envelope() {
    variables()
        .arg("--json")
        .assert()
        .success()
        .stdout(contains("\"ok\": true"))
        .stdout(contains("\"program\": \"variables\""));
}

#[test]
fn datatypes_prints_contract_dispatch() {
    datatypes()
        .assert()
        .success()
        .stdout(contains("[contracts]"))
        .stdout(contains("square area: 16"));
}

#[test]
fn datatypes_json_carries_envelope() {
    datatypes()
        .arg("--json")
        .assert()
        .success()
        .stdout(contains("\"ok\": true"))
        .stdout(contains("\"program\": \"datatypes\""));
}

#[test]
fn unknown_flag_is_rejected() {
    variables().arg("--verbose").assert().failure();
}
