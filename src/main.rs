// Hyprland SPA - terminal desktop companion for Hyprland
//
// A single-window app with a navigation bar and swappable pages showing the
// live state of the Hyprland compositor (workspaces, windows, monitors),
// plus a few desktop quick actions.
//
// Architecture:
// - Shell: page registry, navigation state, lifecycle hooks
// - Pages: one module per view, each querying hyprctl through `Hyprctl`
// - TUI (ratatui): renders the shell, routes keys, drives auto-refresh
// - API (axum): a tiny HTTP endpoint running alongside the UI
// - Config/logging: TOML file + env overrides, tracing subscriber

mod api;
mod cli;
mod config;
mod desktop;
mod hyprland;
mod logging;
mod pages;
mod shell;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use desktop::DesktopActions;
use hyprland::Hyprctl;
use logging::{LogBuffer, Sink};
use pages::{PageDeps, SystemInfo};
use shell::PageId;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management exits before anything else starts
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        cli::handle_config(show, path, reset);
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if let Some(page) = &cli.page {
        config.start_page = page.clone();
    }
    if cli.no_api {
        config.api.enabled = false;
    }

    let status_json = match cli.command {
        Some(Commands::Status { json }) => Some(json),
        _ => None,
    };
    let serve_only = matches!(cli.command, Some(Commands::Serve));
    let use_tui = config.enable_tui && !serve_only && status_json.is_none();

    // In TUI mode logs go to the in-memory buffer so they don't garble the
    // alternate screen; the Logs page shows them
    let log_buffer = LogBuffer::new();
    let sink = if use_tui {
        Sink::Buffer(log_buffer.clone())
    } else {
        Sink::Stdout
    };
    let _file_guard = logging::init(&config.logging, sink);

    let hyprctl = Hyprctl::detect(config.hyprland.binary.clone());

    if let Some(json) = status_json {
        if !cli::run_status(&hyprctl, json) {
            std::process::exit(1);
        }
        return Ok(());
    }

    tracing::debug!(
        hyprland = hyprctl.is_hyprland(),
        binary = hyprctl.binary(),
        start_page = %config.start_page,
        "Starting hyprspa {}",
        config::VERSION
    );

    // Oneshot channel for graceful API shutdown
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let api_handle = if config.api.enabled || serve_only {
        Some(tokio::spawn(api::serve(config.api.bind_addr, shutdown_rx)))
    } else {
        drop(shutdown_rx);
        None
    };

    if use_tui {
        let deps = PageDeps {
            app_title: config.title.clone(),
            hyprctl: hyprctl.clone(),
            desktop: DesktopActions::new(config.actions.screenshot_dir.clone()),
            logs: log_buffer,
            system: SystemInfo::from_env(),
            color_scheme: config.color_scheme,
            auto_refresh: config.refresh.enabled,
            refresh_secs: config.refresh.interval_secs,
        };

        let mut app = App::new(
            pages::build_shell(deps),
            hyprctl,
            config.color_scheme,
            config.refresh.enabled,
            config.refresh.interval(),
        );
        app.start(&PageId::new(config.start_page.clone()));

        if let Err(e) = tui::run_tui(app).await {
            eprintln!("TUI error: {:#}", e);
        }
    } else if let Some(handle) = api_handle {
        return run_headless(handle, shutdown_tx).await;
    } else {
        tracing::info!("Running headless. Press Ctrl+C to stop.");
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("Shutting down");
    let _ = shutdown_tx.send(());
    if let Some(handle) = api_handle {
        // A bind failure never stopped the UI, so it is only logged
        if let Err(e) = server_result(handle.await) {
            tracing::error!("API server error: {:#}", e);
        }
    }

    Ok(())
}

/// Serve until Ctrl+C, or fail as soon as the server stops on its own
async fn run_headless(
    mut handle: JoinHandle<Result<()>>,
    shutdown_tx: oneshot::Sender<()>,
) -> Result<()> {
    tracing::info!("Running headless. Press Ctrl+C to stop.");
    tokio::select! {
        // The server only stops by itself when it failed to start
        joined = &mut handle => return server_result(joined),
        signal = tokio::signal::ctrl_c() => signal.context("Failed to listen for Ctrl+C")?,
    }

    tracing::info!("Shutting down");
    let _ = shutdown_tx.send(());
    server_result(handle.await)
}

/// Flatten the API task's join result
fn server_result(joined: Result<Result<()>, JoinError>) -> Result<()> {
    joined.context("API server task panicked")?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn headless_returns_bind_error_instead_of_waiting() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(api::serve(addr, shutdown_rx));

        let result = tokio::time::timeout(Duration::from_secs(5), run_headless(handle, shutdown_tx))
            .await
            .expect("headless mode should stop when the server cannot bind");

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to bind"));
    }
}
