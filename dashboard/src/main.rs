//! Slotwatch - Entry Point
//!
//! A polling dashboard for parking-slot devices and bookings. Reads the
//! backend's REST API and serves the rendered views locally.

use std::collections::HashMap;
use std::env;
use std::process::ExitCode;

use slotwatch::app::options::AppOptions;
use slotwatch::app::run::run;
use slotwatch::filesys::file::File;
use slotwatch::http::client::HttpClient;
use slotwatch::logs::{init_logging, LogOptions};
use slotwatch::storage::settings::{Settings, DEFAULT_SETTINGS_PATH};
use slotwatch::utils::{run_diagnostic, version_info};

use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments
    let mut cli_args: HashMap<String, String> = HashMap::new();
    for arg in env::args().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    // Print version and exit
    let version = version_info();
    if cli_args.contains_key("version") {
        match serde_json::to_string_pretty(&version) {
            Ok(json) => println!("{json}"),
            Err(_) => println!("{}", version.version),
        }
        return ExitCode::SUCCESS;
    }

    // Retrieve the settings file
    let settings_path = cli_args
        .get("config")
        .cloned()
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let mut settings = match File::new(&settings_path).read_json_or_default::<Settings>().await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings file {settings_path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = apply_overrides(&mut settings, &cli_args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let options = AppOptions::from(&settings);

    // Run diagnostics
    if cli_args.contains_key("diagnostic") || cli_args.contains_key("diag") {
        let passed = match HttpClient::new(&options.backend) {
            Ok(client) => run_diagnostic(&client).await,
            Err(e) => {
                eprintln!("{e}");
                false
            }
        };
        return if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    // Initialize logging
    let log_options = LogOptions {
        log_level: settings.log_level.clone(),
        log_dir: settings.log_dir.clone(),
        json_format: settings.log_json,
        ..Default::default()
    };
    let _log_guard = match init_logging(log_options) {
        Ok(guard) => guard,
        Err(e) => {
            println!("Failed to initialize logging: {e}");
            None
        }
    };

    info!(
        "Running slotwatch {} ({}) with options: {:?}",
        version.version, version.git_hash, options
    );
    match run(options, await_shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to run the dashboard: {e}");
            ExitCode::FAILURE
        }
    }
}

fn apply_overrides(settings: &mut Settings, cli_args: &HashMap<String, String>) -> Result<(), String> {
    if let Some(backend) = cli_args.get("backend") {
        settings.backend.base_url = backend.clone();
    }
    if let Some(port) = cli_args.get("port") {
        settings.server.port = port
            .parse()
            .map_err(|_| format!("Invalid --port value: {port}"))?;
    }
    if let Some(mode) = cli_args.get("mode") {
        settings.view_mode = mode.parse()?;
    }
    Ok(())
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
                _ => {
                    error!("Unable to install signal handlers, falling back to Ctrl+C");
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
        }
        info!("Ctrl+C received, shutting down...");
    }
}
