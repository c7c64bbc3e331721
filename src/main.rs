//! Mergington activities — service entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse CLI args
//!   3. Load config
//!   4. Resolve effective log level (CLI `-v` flags > env > config)
//!   5. Init logger once
//!   6. Build the seeded activity directory
//!   7. Bind the HTTP listener and print the startup summary
//!   8. Spawn Ctrl-C → shutdown signal watcher
//!   9. Serve until shutdown

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use mergington_activities::activities::ActivityDirectory;
use mergington_activities::config::{self, Config};
use mergington_activities::error::AppError;
use mergington_activities::logger;
use mergington_activities::web::{self, WebState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    let force_cli_level = args.log_level.is_some();

    logger::init(effective_log_level, force_cli_level, config.log_file.as_deref())?;

    info!(
        service = %config.service_name,
        bind = %config.http.bind,
        static_dir = %config.http.static_dir.display(),
        configured_log_level = %config.log_level,
        effective_log_level = %effective_log_level,
        "config loaded"
    );

    let directory = Arc::new(ActivityDirectory::seeded());
    let activity_count = directory.len()?;
    info!(activities = activity_count, "activity directory seeded");

    let listener = web::bind(&config.http.bind).await?;
    let local_addr = listener.local_addr()?;

    // Shared shutdown token — Ctrl-C cancels it, the server watches it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    print_startup_summary(&config, &local_addr.to_string(), activity_count);

    let state = WebState::new(directory, &config.http.static_dir);
    web::serve(listener, state, shutdown).await?;

    info!("bye");
    Ok(())
}

fn print_startup_summary(config: &Config, local_addr: &str, activity_count: usize) {
    let fit = |text: String| -> String {
        const WIDTH: usize = 58;
        if text.chars().count() >= WIDTH {
            let mut out = text.chars().take(WIDTH - 1).collect::<String>();
            out.push('…');
            out
        } else {
            format!("{text:<WIDTH$}")
        }
    };

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ Mergington Activities                                        ║");
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║   {}║", fit(format!("service: {}", config.service_name)));
    println!("║   {}║", fit(format!("pid: {}", std::process::id())));
    println!("║   {}║", fit(format!("listening: http://{local_addr}")));
    println!("║   {}║", fit(format!("activities: {activity_count} seeded")));
    println!("║   {}║", fit(format!("static: {}", config.http.static_dir.display())));
    println!("╚══════════════════════════════════════════════════════════════╝");
}

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: mergington-activities [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    CliArgs {
        log_level: logger::level_for_verbosity(verbosity),
        config_path,
    }
}
