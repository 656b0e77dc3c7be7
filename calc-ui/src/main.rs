use std::path::PathBuf;

use clap::Parser;
use gpui::Application;
use tracing::{debug, error};

use calc_ui::{config::AppConfig, logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop four-function calculator.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML settings file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,calc_core=trace`. Overrides the file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable log output on stdout.
    #[arg(long, short)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())?.with_overrides(
        cli.log_level,
        cli.log_file,
        cli.quiet,
    );
    logging::apply_settings(&config.logging)?;
    debug!(?config, "starting calculator");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            setup_app(cx);
            if let Err(e) = open_main_window(&config, cx) {
                error!(%e, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
