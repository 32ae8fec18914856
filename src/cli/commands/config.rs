use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*check && !*edit_config {
            info(format!("Configuration file: {}", path.display()));
            info("Use --print, --check or --edit.");
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            run_check(cfg, path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            run_editor(path, editor.clone());
        }
    }

    Ok(())
}

fn run_check(cfg: &Config, path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (built-in defaults are used, run `init`)",
            path.display()
        ));
        return Ok(());
    }

    let raw = fs::read_to_string(path)?;
    let report = check_config(&raw, cfg);

    for key in &report.missing {
        warning(format!("Missing field '{key}': default value is used"));
    }
    for key in &report.unknown {
        warning(format!("Unknown field '{key}' is ignored"));
    }
    for problem in &report.problems {
        error(problem);
    }

    if report.is_clean() {
        success("Configuration file is complete and valid.");
    }
    Ok(())
}

fn run_editor(path: &Path, requested_editor: Option<String>) {
    // Platform default editor
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    // First attempt: requested editor
    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            // Fallback
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
