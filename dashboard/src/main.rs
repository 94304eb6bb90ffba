//! Theseus Dashboard - Entry Point
//!
//! Shows the status of containers managed by a Theseus backend and submits
//! new deployments described by a launch form file.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use theseus_dashboard::app::dashboard::{Dashboard, SubmitOutcome};
use theseus_dashboard::app::options::AppOptions;
use theseus_dashboard::builder::defaults::apply_desktop_defaults;
use theseus_dashboard::builder::form::FormSnapshot;
use theseus_dashboard::filesys::file::File;
use theseus_dashboard::http::client::HttpClient;
use theseus_dashboard::logs::{init_logging, LogLevel};
use theseus_dashboard::render::terminal::{format_hosts, format_status};
use theseus_dashboard::render::status::StatusView;
use theseus_dashboard::storage::settings::{load_settings, DEFAULT_SETTINGS_PATH};
use theseus_dashboard::utils::{parse_cli_args, version_info};

use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = parse_cli_args(env::args().skip(1));

    // Print version and exit
    if cli_args.contains_key("version") {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(version) => println!("{}", version),
            Err(e) => eprintln!("Failed to encode version info: {e}"),
        }
        return ExitCode::SUCCESS;
    }

    // Retrieve the settings file
    let settings_path = cli_args
        .get("settings")
        .map(String::as_str)
        .unwrap_or(DEFAULT_SETTINGS_PATH);
    let settings = match load_settings(&File::new(settings_path)).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings file {settings_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = match cli_args.get("log-level").map(|l| l.parse::<LogLevel>()) {
        Some(Ok(level)) => Some(level),
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        None => None,
    };
    let options = match AppOptions::from(&settings)
        .with_overrides(cli_args.get("base-url").map(String::as_str), log_level)
    {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let _log_guard = match init_logging(options.log.clone()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    info!("Running Theseus dashboard with options: {:?}", options);

    let client = match HttpClient::with_timeout(&options.backend_base_url, options.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create the HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dashboard = Dashboard::new(Arc::new(client));

    if cli_args.contains_key("hosts") {
        return match dashboard.load_host_options().await {
            Ok(options) => {
                print!("{}", format_hosts(&options));
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to load host machines: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if cli_args.contains_key("deploy") {
        let Some(form_path) = cli_args.get("form") else {
            error!("--deploy needs --form=<path to form json>");
            return ExitCode::FAILURE;
        };

        let mut form: FormSnapshot = match File::new(form_path).read_json().await {
            Ok(form) => form,
            Err(e) => {
                error!("Unable to read form file {form_path}: {e}");
                return ExitCode::FAILURE;
            }
        };
        if cli_args.contains_key("webtop-defaults") {
            apply_desktop_defaults(&mut form);
        }

        match dashboard.on_deploy(&form).await {
            SubmitOutcome::Reload { alert, .. } => println!("{alert}"),
            SubmitOutcome::Alert { alert } => {
                eprintln!("{alert}");
                return ExitCode::FAILURE;
            }
            SubmitOutcome::Ignored => return ExitCode::FAILURE,
        }
    }

    // Status is shown on load and again after a deployment
    let view = dashboard.load_status().await;
    print!("{}", format_status(&view));
    match view {
        StatusView::Table(_) => ExitCode::SUCCESS,
        StatusView::Failed => ExitCode::FAILURE,
    }
}
