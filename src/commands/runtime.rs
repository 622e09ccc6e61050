use crate::cli::{Cli, Commands};
use crate::domain::models::{ExtractReport, JsonOut, LutSummary, TagRow};
use crate::report::{enumerate_tags, extract_lut, is_lut_family, LutData};
use crate::services::config::Config;
use crate::services::dumper::load_report;
use crate::services::output::{format_preview, print_out};
use log::debug;

pub fn handle_runtime_commands(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Dump { input } => {
            let report = load_report(cli.saved_report, input, cli.iccdump.as_deref(), config)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                print!("{report}");
            }
        }
        Commands::Tags { input } => {
            let report = load_report(cli.saved_report, input, cli.iccdump.as_deref(), config)?;
            let tags = enumerate_tags(&report);
            debug!("enumerated {} tags", tags.len());
            print_out(cli.json, &tags, |t| format!("{}\t{}", t.index, t.signature))?;
        }
        Commands::Extract { input, signature } => {
            let report = load_report(cli.saved_report, input, cli.iccdump.as_deref(), config)?;
            let lut = extract_lut(&report, signature, cli.scoped_values);
            render_extract(cli.json, signature, lut)?;
        }
        Commands::Report { input } => {
            let report = load_report(cli.saved_report, input, cli.iccdump.as_deref(), config)?;
            let rows: Vec<TagRow> = enumerate_tags(&report)
                .into_iter()
                .map(|tag| tag_row(&report, tag.index, tag.signature, cli.scoped_values))
                .collect();
            render_rows(cli.json, &rows)?;
        }
        // dispatched by handle_admin_commands before this handler runs
        Commands::Doctor => {}
    }
    Ok(())
}

fn tag_row(report: &str, index: u32, signature: String, scoped: bool) -> TagRow {
    if !is_lut_family(&signature) {
        return TagRow {
            index,
            signature,
            status: "skipped".to_string(),
            lut: None,
        };
    }
    match extract_lut(report, &signature, scoped) {
        Some(lut) => TagRow {
            index,
            signature,
            status: "processed".to_string(),
            lut: Some(LutSummary::from_lut(&lut)),
        },
        None => TagRow {
            index,
            signature,
            status: "no_data".to_string(),
            lut: None,
        },
    }
}

fn render_extract(json: bool, signature: &str, lut: Option<LutData>) -> anyhow::Result<()> {
    if json {
        let data = ExtractReport {
            signature: signature.to_string(),
            found: lut.is_some(),
            lut,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
        return Ok(());
    }
    match lut {
        Some(lut) => {
            println!("signature: {signature}");
            println!("bit depth: {}", lut.bit_depth);
            println!("input entries: {}", lut.input_entries.join(", "));
            println!("output entries: {}", lut.output_entries.join(", "));
            println!(
                "values[{}]: {}",
                lut.values.len(),
                format_preview(&lut.values)
            );
        }
        None => println!("no LUT data found for tag '{signature}'"),
    }
    Ok(())
}

fn render_rows(json: bool, rows: &[TagRow]) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: rows })?
        );
        return Ok(());
    }
    for row in rows {
        println!("{}\t{}\t{}", row.index, row.signature, row.status);
        if let Some(lut) = &row.lut {
            println!("  bit depth: {}", lut.bit_depth);
            println!("  input entries: {}", lut.input_entries.join(", "));
            println!("  output entries: {}", lut.output_entries.join(", "));
            println!(
                "  values[{}]: {}",
                lut.value_count,
                format_preview(&lut.preview)
            );
        }
    }
    Ok(())
}
