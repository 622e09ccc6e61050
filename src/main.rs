use clap::Parser;

mod cli;
mod commands;
mod domain;
mod report;
mod services;

use cli::Cli;
use domain::models::{ErrorBody, JsonErr};
use services::dumper::DumpError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        render_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = services::config::load_config()?;

    if commands::handle_admin_commands(cli, &config)? {
        return Ok(());
    }
    commands::handle_runtime_commands(cli, &config)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<DumpError>() {
        Some(DumpError::NotConfigured(_)) => "DUMP_NOT_CONFIGURED",
        Some(DumpError::ToolMissing(_)) => "DUMP_TOOL_MISSING",
        Some(DumpError::Launch { .. }) => "DUMP_LAUNCH_FAILED",
        Some(DumpError::Failed { .. }) => "DUMP_FAILED",
        None => "RUNTIME",
    }
}

fn render_failure(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: format!("{err:#}"),
            },
        };
        if let Ok(rendered) = serde_json::to_string_pretty(&body) {
            println!("{rendered}");
        }
    } else {
        eprintln!("error: {err:#}");
    }
}
