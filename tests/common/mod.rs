use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for the external validator: prints a version or a JSON report.
const FAKE_VALIDATOR: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "1.2.3"
  exit 0
fi
if [ "$FAKE_VALIDATOR_FAIL" = "1" ]; then
  echo "validator crashed on $2" >&2
  exit 4
fi
PI=""
if [ -n "$3" ]; then
  PI='{"name":"Product Info","tested":true,"pass":true,"message":"loaded"},'
fi
printf '{"items":[{"name":"Schema","tested":true,"pass":true,"message":"ok"},{"name":"Model Size","tested":true,"pass":false,"message":"too large"},%s{"name":"Textures","tested":false,"pass":false,"message":""}]}\n' "$PI"
"#;

pub struct TestEnv {
    tmp: TempDir,
    home: PathBuf,
    config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(home.join(".config")).expect("create isolated home");

        let script = tmp.path().join("fake-validator.sh");
        fs::write(&script, FAKE_VALIDATOR).expect("write fake validator");

        let config = tmp.path().join("config.json");
        let script = script.display().to_string();
        write_json(
            &config,
            &json!({
                "validator": {
                    "command": "sh",
                    "args": [script, "{schema}", "{model}"],
                    "product_info_args": ["{product_info}"],
                    "version_args": [script, "--version"],
                    "decimal_display_precision": 2
                }
            }),
        );

        Self { tmp, home, config }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("commerce-validator");
        cmd.current_dir(self.tmp.path())
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("COMMERCE_VALIDATOR_CONFIG", &self.config)
            .env_remove("RUST_LOG")
            .env_remove("FAKE_VALIDATOR_FAIL");
        cmd
    }

    /// Writes a file into the sandbox and returns its absolute path.
    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    pub fn file(&self, name: &str, contents: &str) -> String {
        let path = self.tmp.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path.display().to_string()
    }

    pub fn schema(&self) -> String {
        self.file("schema.json", r#"{"version":"1.0","requirements":{}}"#)
    }

    pub fn model(&self) -> String {
        self.file("model.glb", "glTF-binary-fixture")
    }

    pub fn product_info(&self) -> String {
        self.file("product-info.json", r#"{"dimensions":{"width":1.0}}"#)
    }

    pub fn set_config(&self, value: serde_json::Value) {
        write_json(&self.config, &value);
    }

    pub fn update_config(&self, edit: impl FnOnce(&mut serde_json::Value)) {
        let raw = fs::read_to_string(&self.config).expect("read config");
        let mut value: serde_json::Value = serde_json::from_str(&raw).expect("parse config");
        edit(&mut value);
        write_json(&self.config, &value);
    }
}

fn write_json(path: &Path, value: &serde_json::Value) {
    let rendered = serde_json::to_string_pretty(value).expect("render json");
    fs::write(path, rendered).expect("write json");
}
