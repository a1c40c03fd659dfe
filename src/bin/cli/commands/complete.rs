use anyhow::Result;

use jarman_lib::progress::CompletionKind;

use super::saved;
use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, kind: CompletionKind, id: &str, format: &OutputFormat) -> Result<()> {
    let ledger = app.progress.completion(kind);
    let complete = saved(ledger.toggle(id), kind.as_str())?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "kind": kind,
                "id": id,
                "complete": complete,
                "total": ledger.count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let state = if complete { "complete" } else { "not complete" };
            println!("{} {} is {} ({} done)", kind, id, state, ledger.count());
        }
    }

    Ok(())
}
