use assert_cmd::Command;

fn run_flag(bin: &str, flag: &str) {
    Command::cargo_bin(bin).unwrap().arg(flag).assert().success();
}

#[test]
fn every_binary_has_help_and_version_paths() {
    for bin in ["primer-variables", "primer-datatypes"] {
        run_flag(bin, "--help");
        run_flag(bin, "--version");
    }
}

#[test]
fn help_names_the_json_flag() {
    for bin in ["primer-variables", "primer-datatypes"] {
        let out = Command::cargo_bin(bin)
            .unwrap()
            .arg("--help")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let help = String::from_utf8(out).expect("utf-8 help text");
        assert!(help.contains("--json"), "{bin} help should list --json");
    }
}
