//! Campus Attendance - role dashboards and simulated QR / face check-in.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use campus_attendance as app;

use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::models::Role;
use app::ui::App;

/// Campus attendance with QR and face check-in.
#[derive(Parser)]
#[command(name = "campus-attendance")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Load config from an explicit path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Sign straight in with a demo account of this role (student, faculty, admin)
    #[arg(long)]
    role: Option<Role>,

    /// Email for the demo sign-in
    #[arg(long, requires = "role")]
    email: Option<String>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    // Fall back to defaults; an invalid file is reported in the UI
    let (config, load_status, warning) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, "loaded", None),
        ConfigLoadResult::Missing => (AppConfig::default(), "missing, using defaults", None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), "invalid, using defaults", Some(e.to_string())),
    };

    // Initialize logging
    let _guard = match init_logging(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("File logging disabled: {e:#}");
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(config.logging.level()))
                .try_init();
            None
        }
    };

    tracing::info!("Campus Attendance starting...");
    if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
    }
    tracing::info!("Config path: {:?} ({})", config_path, load_status);
    if let Some(e) = &warning {
        tracing::warn!("Config invalid: {}", e);
    }

    run_app(cli, config, warning)
}

/// Log to stdout and a daily rolling file.
///
/// The returned guard flushes the file writer when dropped.
fn init_logging(logging: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let dir = logging.log_dir();
    std::fs::create_dir_all(&dir).with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("campus-attendance")
        .filename_suffix("log")
        .build(&dir)
        .context("creating rolling log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(logging.level()).context("parsing logging.level")?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(guard)
}

/// Run the main application.
fn run_app(cli: Cli, config: AppConfig, warning: Option<String>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Campus Attendance")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    eframe::run_native(
        "Campus Attendance",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            let mut app = App::new(config, rt).with_config_warning(warning);
            if let Some(role) = cli.role {
                tracing::info!("Demo sign-in as {}", role);
                app = app.sign_in_demo(role, cli.email);
            }
            Ok(Box::new(app))
        }),
    )
}
