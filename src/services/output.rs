use crate::domain::models::JsonOut;
use serde::Serialize;

/// Emit a run report: pretty JSON envelope in `--json` mode, otherwise
/// the text rendering produced by `text` (which owns its newlines).
pub fn emit<T: Serialize>(json: bool, data: &T, text: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        print!("{}", text(data));
    }
    Ok(())
}
