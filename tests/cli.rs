#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;

#[test]
fn zero_args_fail_before_any_report() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .code(1)
        .stdout(contains(
            "ERROR: A schema and 3D model need to be provided as arguments",
        ))
        .stdout(contains("-- 3D COMMERCE VALIDATOR --").not())
        .stdout(contains("Validation Report").not());
}

#[test]
fn one_arg_asks_for_model() {
    let env = TestEnv::new();
    env.cmd()
        .arg(env.schema())
        .assert()
        .code(1)
        .stdout(contains(
            "ERROR: A 3D model needs to be provided as the second argument",
        ));
}

#[test]
fn prints_aligned_report() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args([env.schema(), env.model()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "-- 3D COMMERCE VALIDATOR --",
            "* Version: 1.2.3",
            "==== Validation Report ====",
            "    Schema: PASS       | ok",
            "Model Size: FAIL       | too large",
            "  Textures: NOT TESTED | ",
            "===========================",
        ]
    );
}

#[test]
fn product_info_is_forwarded_when_given() {
    let env = TestEnv::new();
    env.cmd()
        .args([env.schema(), env.model(), env.product_info()])
        .assert()
        .success()
        .stdout(contains("Product Info: PASS       | loaded"))
        .stdout(contains("      Schema: PASS       | ok"));
}

#[test]
fn concurrent_loads_produce_same_report() {
    let env = TestEnv::new();
    let sequential = env
        .cmd()
        .args([env.schema(), env.model()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    env.update_config(|config| config["validator"]["concurrent_loads"] = json!(true));

    env.cmd()
        .args([env.schema(), env.model()])
        .assert()
        .success()
        .stdout(sequential);
}

#[test]
fn malformed_schema_is_reported() {
    let env = TestEnv::new();
    let schema = env.file("broken.json", "{ \"version\": ");
    env.cmd()
        .args([schema, env.model()])
        .assert()
        .code(1)
        .stdout(contains("ERROR: failed to parse schema JSON"))
        .stdout(contains("Validation Report").not());
}

#[test]
fn missing_model_is_reported() {
    let env = TestEnv::new();
    env.cmd()
        .args([env.schema(), "/nonexistent/model.glb".to_string()])
        .assert()
        .code(1)
        .stdout(contains("ERROR: failed to read 3D model file at /nonexistent/model.glb"));
}

#[test]
fn relative_paths_resolve_against_executable_dir() {
    let env = TestEnv::new();
    // 작업 디렉터리에 같은 이름의 파일이 있어도 실행 파일 디렉터리 기준으로 찾는다.
    env.file("relative-schema.json", "{}");
    env.file("relative-model.glb", "glTF");

    let exe = std::fs::canonicalize(env!("CARGO_BIN_EXE_commerce-validator")).unwrap();
    let exe_dir = exe.parent().unwrap().display().to_string();

    let output = env
        .cmd()
        .args(["relative-schema.json", "relative-model.glb"])
        .assert()
        .code(1)
        .stdout(contains(format!(
            "ERROR: failed to read schema file at {exe_dir}/relative-schema.json"
        )))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(!stdout.contains(&env.dir().display().to_string()));
}

#[test]
fn debug_log_records_loaded_document_sizes() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .env("RUST_LOG", "commerce_validator=debug")
        .args([env.schema(), env.model()])
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    let model_line = stderr
        .lines()
        .find(|line| line.contains("ModelLoaded"))
        .expect("model load is logged");
    assert!(model_line.contains("bytes"));
    assert!(model_line.contains(&"glTF-binary-fixture".len().to_string()));
}

#[test]
fn validator_failure_passes_stderr_through() {
    let env = TestEnv::new();
    env.cmd()
        .env("FAKE_VALIDATOR_FAIL", "1")
        .args([env.schema(), env.model()])
        .assert()
        .code(1)
        .stdout(contains("ERROR: validator command failed"))
        .stdout(contains("validator crashed on"));
}

#[test]
fn config_subcommand_shows_effective_validator() {
    let env = TestEnv::new();
    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("\"effective_validator\""))
        .stdout(contains("\"command\": \"sh\""))
        .stdout(contains("\"decimal_display_precision\": 2"));
}

#[test]
fn malformed_config_is_reported() {
    let env = TestEnv::new();
    env.set_config(json!(["not", "an", "object"]));
    env.cmd()
        .args([env.schema(), env.model()])
        .assert()
        .code(1)
        .stdout(contains("ERROR: failed to parse JSON in"));
}
