use anyhow::Result;
use chrono::Local;
use std::env;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use repo_patterns::{run_program, AppConfig, Program};

/// Usage: repo-patterns [healthcare|inventory|grading|warehouse|finance|all] [config.toml]
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let command = args.get(1).map(String::as_str).unwrap_or("all");
    let config = AppConfig::load(args.get(2).map(Path::new))?;

    init_logging(&config.logging.filter);

    let programs = if command == "all" {
        Program::ALL.to_vec()
    } else {
        vec![Program::from_name(command)?]
    };

    let now = Local::now().naive_local();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (i, program) in programs.into_iter().enumerate() {
        if i > 0 {
            writeln!(out, "\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n")?;
        }
        run_program(program, &config, now, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

/// Logs go to stderr; stdout carries only program output
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
