use crate::domain::models::AuditEvent;
use anyhow::Context;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Files directly under `dir` with a `.yml` extension, in sorted order.
/// A missing directory yields an empty list rather than an error.
pub fn yaml_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        return Ok(files);
    }
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map(|e| e == "yml").unwrap_or(false) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn load_document(path: &Path) -> anyhow::Result<Value> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Serialize `doc` in block style, key order preserved, and overwrite
/// the source file.
pub fn save_document(path: &Path, doc: &Value) -> anyhow::Result<()> {
    let out = serde_yaml::to_string(doc)?;
    std::fs::write(path, out).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Append one event to the mutation audit trail, best-effort. Audit
/// failures never fail the run.
pub fn append_audit(event: &AuditEvent) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/veristamp/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let line = match serde_json::to_string(event) {
        Ok(l) => l,
        Err(_) => return,
    };
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, format!("{line}\n").as_bytes()));
}

pub fn unix_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
