//! Export CLI command

use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::FilterArgs;
use crate::error::{FintrackError, FintrackResult};
use crate::export::{write_export, ExportFormat, ReportExport};
use crate::storage::{Storage, TransactionSource};

/// Arguments for `fintrack export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// csv, json or yaml (defaults to the output extension, then json)
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> FintrackResult<()> {
    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or(ExportFormat::Json);

    let transactions = storage.transactions.list()?;
    let filter = args.filter.build(None)?;
    let selected = filter.apply(&transactions);
    let export = ReportExport::new(&filter, &selected);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(format, &export, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FintrackError::Export(e.to_string()))?;
            eprintln!(
                "Exported {} transaction(s) as {} to {}",
                selected.len(),
                format,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(format, &export, &mut writer)?;
        }
    }

    Ok(())
}
