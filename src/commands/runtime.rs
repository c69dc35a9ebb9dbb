use crate::cli::{Cli, Commands};
use crate::domain::models::{AuditEvent, CheckReport, StampReport};
use crate::services::{output, stamp, storage};
use std::fmt::Write as _;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Stamp => {
            let report = stamp::stamp_directories(&cli.data_dirs(), &cli.date)?;
            storage::append_audit(&AuditEvent {
                ts: storage::unix_timestamp(),
                command: "stamp",
                date: &report.date,
                files: report.files.len(),
                records: report.total,
            });
            output::emit(cli.json, &report, render_stamp)
        }
        Commands::Check => {
            let report = stamp::check_directories(&cli.data_dirs(), &cli.date)?;
            output::emit(cli.json, &report, render_check)
        }
    }
}

fn render_stamp(report: &StampReport) -> String {
    let mut out = String::new();
    for f in &report.files {
        let _ = writeln!(out, "{}", f.path);
        for name in &f.records {
            let _ = writeln!(out, "\t{}", name);
        }
    }
    let _ = writeln!(out, "updated {} records", report.total);
    out
}

fn render_check(report: &CheckReport) -> String {
    let mut out = String::new();
    for f in &report.files {
        let _ = writeln!(out, "{}\t{}\t{}\t{}", f.path, f.missing, f.stale, f.current);
    }
    let _ = writeln!(
        out,
        "{} missing, {} stale, {} current",
        report.missing, report.stale, report.current
    );
    out
}
