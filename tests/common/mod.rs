use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PROGRAMS_DIR: &str = "_data/programs";
pub const COLLEGES_DIR: &str = "_data/college-university";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("site");
        let home = tmp.path().join("home");
        fs::create_dir_all(root.join(PROGRAMS_DIR)).expect("create programs dir");
        fs::create_dir_all(&home).expect("create isolated home");

        Self {
            _tmp: tmp,
            root,
            home,
        }
    }

    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create data dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read data file")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("veristamp").expect("binary built");
        cmd.current_dir(&self.root).env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
