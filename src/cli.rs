// CLI module - command-line argument parsing and handlers
//
// Without a subcommand hyprspa runs the TUI (plus the HTTP endpoint).
// Subcommands:
// - serve: HTTP endpoint only, until Ctrl+C
// - status: one-shot Hyprland status query
// - config --show | --path | --reset: configuration management

use crate::config::{Config, VERSION};
use crate::hyprland::Hyprctl;
use crate::pages::status_rows;
use crate::shell::to_plain_text;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Hyprland SPA - terminal desktop companion for Hyprland
#[derive(Parser, Debug)]
#[command(name = "hyprspa")]
#[command(version = VERSION)]
#[command(about = "Terminal desktop companion for Hyprland", long_about = None)]
pub struct Cli {
    /// Page to show at startup (overrides config and HYPRSPA_START_PAGE)
    #[arg(long, value_name = "ID")]
    pub page: Option<String>,

    /// Do not start the HTTP endpoint
    #[arg(long)]
    pub no_api: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP endpoint without the TUI
    Serve,

    /// Print the current Hyprland status and exit
    Status {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

pub fn handle_config(show: bool, path: bool, reset: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else {
        // No flag provided, show help
        println!("Usage: hyprspa config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() && !confirm(&format!(
        "Config file exists at {}. Overwrite? [y/N] ",
        path.display()
    )) {
        println!("Aborted.");
        return;
    }

    match Config::reset_file() {
        Ok(path) => println!("Config reset to defaults: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Ask on stderr, read a line from stdin. Anything but "y" is a no.
fn confirm(prompt: &str) -> bool {
    eprint!("{}", prompt);
    if std::io::stderr().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

/// Query Hyprland once and print the result. Returns false on failure.
pub fn run_status(hyprctl: &Hyprctl, json: bool) -> bool {
    match status_report(hyprctl, json) {
        Some(report) => {
            println!("{}", report);
            true
        }
        None => {
            eprintln!("Hyprland information unavailable");
            false
        }
    }
}

fn status_report(hyprctl: &Hyprctl, json: bool) -> Option<String> {
    let status = hyprctl.status()?;

    if json {
        return match serde_json::to_string_pretty(&status) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to encode status: {}", e);
                None
            }
        };
    }

    Some(to_plain_text(&status_rows(&status)).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyprland::fake::FakeRunner;
    use crate::pages::fixtures;

    #[test]
    fn parses_global_flags_and_subcommands() {
        let cli = Cli::parse_from(["hyprspa", "--page", "monitors", "--no-api"]);
        assert_eq!(cli.page.as_deref(), Some("monitors"));
        assert!(cli.no_api);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["hyprspa", "status", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Status { json: true })));

        let cli = Cli::parse_from(["hyprspa", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: true,
                show: false,
                reset: false
            })
        ));
    }

    #[test]
    fn status_report_text() {
        let hyprctl = fixtures::hyprctl(fixtures::desktop_runner(), true);
        let report = status_report(&hyprctl, false).unwrap();

        assert_eq!(
            report,
            "Active Workspace: code\nMonitors: 2 connected\nFocused Monitor: DP-1"
        );
    }

    #[test]
    fn status_report_json() {
        let hyprctl = fixtures::hyprctl(fixtures::desktop_runner(), true);
        let report = status_report(&hyprctl, true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["workspace"]["name"], "code");
        assert_eq!(value["monitors"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn status_unavailable() {
        let hyprctl = fixtures::hyprctl(FakeRunner::new(), true);
        assert!(status_report(&hyprctl, false).is_none());
        assert!(!run_status(&hyprctl, true));
    }
}
