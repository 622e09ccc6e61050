#![cfg(unix)]

use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn fake_tool_end_to_end_tags() {
    let env = TestEnv::new();
    let tool = env.write_fake_iccdump();
    let profile = env.write_profile();

    env.cmd()
        .args([
            "--iccdump",
            tool.to_str().expect("tool path utf8"),
            "tags",
            profile.to_str().expect("profile path utf8"),
        ])
        .assert()
        .success()
        .stdout(contains("1\tB2A0"))
        .stdout(contains("2\tA2B0"));
}

#[test]
fn stdin_profile_is_spilled_and_processed() {
    let env = TestEnv::new();
    let tool = env.write_fake_iccdump();

    env.cmd()
        .args([
            "--iccdump",
            tool.to_str().expect("tool path utf8"),
            "report",
            "-",
        ])
        .write_stdin(&b"\x00\x00\x08\xa4ADBE"[..])
        .assert()
        .success()
        .stdout(contains("1\tB2A0\tprocessed"))
        .stdout(contains("2\tA2B0\tprocessed"));
}

#[test]
fn config_file_supplies_tool_path() {
    let env = TestEnv::new();
    let tool = env.write_fake_iccdump();
    let profile = env.write_profile();
    env.write_config(&tool);

    env.cmd()
        .args(["tags", profile.to_str().expect("profile path utf8")])
        .assert()
        .success()
        .stdout(contains("B2A0"));
}

#[test]
fn failing_tool_surfaces_exit_status() {
    let env = TestEnv::new();
    let tool = env.write_failing_iccdump();
    let profile = env.write_profile();

    env.cmd()
        .args([
            "--iccdump",
            tool.to_str().expect("tool path utf8"),
            "dump",
            profile.to_str().expect("profile path utf8"),
        ])
        .assert()
        .failure()
        .stderr(contains("exited with"));
}

#[test]
fn missing_tool_path_fails_fast() {
    let env = TestEnv::new();
    let profile = env.write_profile();

    env.cmd()
        .args([
            "--iccdump",
            "/no/such/iccdump",
            "tags",
            profile.to_str().expect("profile path utf8"),
        ])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn doctor_reports_ok_with_runnable_tool() {
    let env = TestEnv::new();
    let tool = env.write_fake_iccdump();
    env.write_config(&tool);

    let out = env.run_json(&["doctor"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["overall"], "ok");

    let checks = out["data"]["checks"].as_array().expect("checks");
    assert!(checks
        .iter()
        .any(|c| c["name"] == "iccdump_runnable" && c["status"] == "ok"));
}
