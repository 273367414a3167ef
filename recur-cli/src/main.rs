mod cli;
mod logging;
mod render;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::Cli;
use recur_core::{
    Recur, RunOptions,
    rem::{Modifiers, classify},
};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("recur: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init_logging(cli.verbose)?;

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: "%a, %d %b %Y".to_string(),
        use_color: cli.color.use_color(),
    }));
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    // Check mode: no files involved.
    if let Some(pattern) = &cli.check {
        let (modifiers, _) = Modifiers::split(pattern);
        renderer.print_check(pattern, today, modifiers, classify(pattern, today));
        return Ok(());
    }

    let recur = Recur::new(cli.todo_dir)?;
    log::info!("using file for recurring records: {}", recur.config.recur_file.display());

    if cli.path {
        renderer.print_info(&format!("{}", recur.config.todo_dir.display()));
        return Ok(());
    }

    let options = RunOptions {
        dry_run: cli.dry_run,
    };
    let report = recur.add_today_tasks(today, options)?;
    renderer.print_report(today, &report, cli.dry_run);
    Ok(())
}
