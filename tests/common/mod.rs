#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub dataset: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let dataset = write_fixture_dataset(tmp.path());

        Self {
            _tmp: tmp,
            home,
            dataset,
        }
    }

    pub fn root(&self) -> &Path {
        self._tmp.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("opnet");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_data(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--data")
            .arg(self.dataset.to_str().expect("dataset path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn fail_json_data(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--data")
            .arg(self.dataset.to_str().expect("dataset path utf8"))
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

pub fn fixture_dataset() -> Value {
    json!({
        "mobile": {
            "operators": {
                "1": {"name": "X", "date_added": "2001-03-04"},
                "2": {"name": "Y", "date_added": "2005-09-01"},
                "3": {"name": "Z", "date_added": "2010-01-15"}
            },
            "years": {
                "2020": {"operators": [
                    {"id": "1", "volume": 100, "links": []},
                    {"id": "2", "volume": 300, "links": ["1"]}
                ]},
                "2021": {"operators": [
                    {"id": "1", "volume": 100, "links": ["0"]},
                    {"id": "2", "volume": 300, "links": ["1"]},
                    {"id": "3", "volume": 50, "links": ["2", "0"]}
                ]}
            }
        },
        "landline": {
            "operators": {
                "1": {"name": "Fixed A", "date_added": "1998-01-01"},
                "2": {"name": "Fixed B", "date_added": "1999-06-30"}
            },
            "years": {
                "2021": {"operators": [
                    {"id": "1", "volume": 500, "links": ["0"]},
                    {"id": "2", "volume": 500, "links": ["0"]}
                ]}
            }
        }
    })
}

fn write_fixture_dataset(base: &Path) -> PathBuf {
    let path = base.join("dataset.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&fixture_dataset()).expect("serialize dataset"),
    )
    .expect("write dataset");
    path
}
