use crate::domain::models::{CheckReport, FileCheckReport, FileStampReport, StampReport};
use crate::services::storage;
use anyhow::Context;
use serde_yaml::Value;
use std::path::Path;

pub const VERIFIED_DATE_KEY: &str = "verified_date";

/// Mapping-form documents keep their records under this key.
pub const RECORDS_KEY: &str = "programs";

/// A document that parsed to nothing: null, an empty sequence, or an
/// empty mapping. Such files are never rewritten.
pub fn is_empty_document(doc: &Value) -> bool {
    match doc {
        Value::Null => true,
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

fn records_mut(doc: &mut Value) -> anyhow::Result<Option<&mut Vec<Value>>> {
    if doc.is_sequence() {
        return Ok(doc.as_sequence_mut());
    }
    if doc.is_mapping() {
        return Ok(doc.get_mut(RECORDS_KEY).and_then(Value::as_sequence_mut));
    }
    anyhow::bail!("top-level value is neither a sequence nor a mapping")
}

fn records_of(doc: &Value) -> anyhow::Result<&[Value]> {
    if let Some(seq) = doc.as_sequence() {
        return Ok(seq);
    }
    if doc.is_mapping() {
        return Ok(doc
            .get(RECORDS_KEY)
            .and_then(Value::as_sequence)
            .map(|seq| seq.as_slice())
            .unwrap_or(&[]));
    }
    anyhow::bail!("top-level value is neither a sequence nor a mapping")
}

/// Set `verified_date` on every mapping record, returning the display
/// names of the records touched in document order. The write is an
/// unconditional overwrite; a fresh key lands at the end of the mapping.
/// Non-mapping entries are left alone.
pub fn stamp_document(doc: &mut Value, date: &str) -> anyhow::Result<Vec<String>> {
    let mut stamped = Vec::new();
    let Some(records) = records_mut(doc)? else {
        return Ok(stamped);
    };
    for record in records.iter_mut() {
        let Some(fields) = record.as_mapping_mut() else {
            continue;
        };
        fields.insert(Value::from(VERIFIED_DATE_KEY), Value::from(date));
        stamped.push(display_name(record));
    }
    Ok(stamped)
}

/// A record's `name` field, read for display only.
pub fn display_name(record: &Value) -> String {
    record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string()
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocScan {
    pub missing: usize,
    pub stale: usize,
    pub current: usize,
}

/// Classify every mapping record's `verified_date` against `date`.
pub fn scan_document(doc: &Value, date: &str) -> anyhow::Result<DocScan> {
    let mut scan = DocScan::default();
    for record in records_of(doc)? {
        if !record.is_mapping() {
            continue;
        }
        match record.get(VERIFIED_DATE_KEY) {
            None => scan.missing += 1,
            Some(v) if v.as_str() == Some(date) => scan.current += 1,
            Some(_) => scan.stale += 1,
        }
    }
    Ok(scan)
}

/// One full stamping pass over the given directories. Missing directories
/// contribute nothing; empty documents are reported but never rewritten.
/// Every other parsed file is serialized back, even when no record in it
/// was a mapping.
pub fn stamp_directories(dirs: &[String], date: &str) -> anyhow::Result<StampReport> {
    let mut files = Vec::new();
    let mut total = 0usize;
    for dir in dirs {
        for path in storage::yaml_files(Path::new(dir))? {
            let mut doc = storage::load_document(&path)?;
            if is_empty_document(&doc) {
                files.push(FileStampReport {
                    path: path.display().to_string(),
                    records: Vec::new(),
                    skipped_empty: true,
                });
                continue;
            }
            let records = stamp_document(&mut doc, date)
                .with_context(|| format!("unsupported document in {}", path.display()))?;
            storage::save_document(&path, &doc)?;
            total += records.len();
            files.push(FileStampReport {
                path: path.display().to_string(),
                records,
                skipped_empty: false,
            });
        }
    }
    Ok(StampReport {
        date: date.to_string(),
        files,
        total,
    })
}

/// Read-only counterpart of [`stamp_directories`].
pub fn check_directories(dirs: &[String], date: &str) -> anyhow::Result<CheckReport> {
    let mut files = Vec::new();
    let mut missing = 0usize;
    let mut stale = 0usize;
    let mut current = 0usize;
    for dir in dirs {
        for path in storage::yaml_files(Path::new(dir))? {
            let doc = storage::load_document(&path)?;
            if is_empty_document(&doc) {
                continue;
            }
            let scan = scan_document(&doc, date)
                .with_context(|| format!("unsupported document in {}", path.display()))?;
            missing += scan.missing;
            stale += scan.stale;
            current += scan.current;
            files.push(FileCheckReport {
                path: path.display().to_string(),
                missing: scan.missing,
                stale: scan.stale,
                current: scan.current,
            });
        }
    }
    Ok(CheckReport {
        date: date.to_string(),
        files,
        missing,
        stale,
        current,
    })
}
