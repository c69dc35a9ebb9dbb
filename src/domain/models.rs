use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Outcome of stamping one file.
#[derive(Debug, Serialize)]
pub struct FileStampReport {
    pub path: String,
    /// Display names of the records stamped, in document order.
    pub records: Vec<String>,
    pub skipped_empty: bool,
}

#[derive(Debug, Serialize)]
pub struct StampReport {
    pub date: String,
    pub files: Vec<FileStampReport>,
    pub total: usize,
}

/// Per-file classification of `verified_date` against the run's date.
#[derive(Debug, Serialize)]
pub struct FileCheckReport {
    pub path: String,
    pub missing: usize,
    pub stale: usize,
    pub current: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub date: String,
    pub files: Vec<FileCheckReport>,
    pub missing: usize,
    pub stale: usize,
    pub current: usize,
}

/// One line of the mutation audit trail.
#[derive(Serialize)]
pub struct AuditEvent<'a> {
    pub ts: u64,
    pub command: &'a str,
    pub date: &'a str,
    pub files: usize,
    pub records: usize,
}
