use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use tablecast_infer::{assemble, infer_table};
use tablecast_ingest::{SUPPORTED_EXTENSIONS, load_table};

use crate::cli::InferArgs;
use crate::summary::{apply_table_style, print_report};

pub fn run_infer(args: &InferArgs) -> Result<()> {
    let span = info_span!("infer", file = %args.file.display());
    let _guard = span.enter();

    let table = load_table(&args.file).context("load input file")?;
    let typed = infer_table(table).context("infer schema")?;
    let report = assemble::assemble(&typed);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report.to_value()).context("serialize payload")?
        );
    } else {
        print_report(&report, &typed);
    }
    Ok(())
}

pub fn run_formats() {
    let mut table = Table::new();
    table.set_header(vec!["Extension", "Format"]);
    apply_table_style(&mut table);
    for extension in SUPPORTED_EXTENSIONS {
        let format = match *extension {
            "csv" => "Comma-separated values",
            _ => "Excel workbook",
        };
        table.add_row(vec![format!(".{extension}"), format.to_string()]);
    }
    println!("{table}");
}
