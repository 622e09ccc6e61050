use crate::cli::{Cli, Commands};
use crate::domain::models::{CheckItem, DoctorReport};
use crate::services::config::{config_path, Config};
use crate::services::output::print_one;
use std::process::Command;

pub fn handle_admin_commands(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let Commands::Doctor = &cli.command else {
        return Ok(false);
    };

    let report = doctor(cli, config)?;
    print_one(cli.json, &report, |r| format!("doctor: {}", r.overall))?;
    if !cli.json {
        for check in &report.checks {
            println!("{}\t{}", check.name, check.status);
        }
    }
    Ok(true)
}

fn doctor(cli: &Cli, config: &Config) -> anyhow::Result<DoctorReport> {
    let tool = cli
        .iccdump
        .clone()
        .or_else(|| config.iccdump.clone());

    let mut checks = vec![
        CheckItem {
            name: "config_file".to_string(),
            status: match config_path() {
                Ok(p) if p.exists() => "ok",
                Ok(_) => "not_provided",
                Err(_) => "missing",
            }
            .to_string(),
        },
        CheckItem {
            name: "iccdump_configured".to_string(),
            status: if tool.is_some() { "ok" } else { "missing" }.to_string(),
        },
    ];

    match &tool {
        Some(path) => {
            let exists = path.is_file();
            checks.push(CheckItem {
                name: "iccdump_exists".to_string(),
                status: if exists { "ok" } else { "missing" }.to_string(),
            });
            checks.push(CheckItem {
                name: "iccdump_runnable".to_string(),
                status: if exists && Command::new(path).output().is_ok() {
                    "ok"
                } else {
                    "not_runnable"
                }
                .to_string(),
            });
        }
        None => {
            checks.push(CheckItem {
                name: "iccdump_exists".to_string(),
                status: "missing".to_string(),
            });
            checks.push(CheckItem {
                name: "iccdump_runnable".to_string(),
                status: "not_runnable".to_string(),
            });
        }
    }

    let overall = if checks
        .iter()
        .all(|c| c.status == "ok" || c.status == "not_provided")
    {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    Ok(DoctorReport { overall, checks })
}
