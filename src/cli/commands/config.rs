use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::process::Command as ProcessCommand;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                info(format!("Configuration file: {}", path.display()));
                println!("{}", content);
            } else {
                warning("No configuration file found. Run `mesai init` first.");
            }
            return Ok(());
        }

        if *edit_config {
            if !path.exists() {
                warning("No configuration file found. Run `mesai init` first.");
                return Ok(());
            }

            let chosen = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .unwrap_or_else(|| "vi".to_string());

            let status = ProcessCommand::new(&chosen).arg(&path).status()?;
            if !status.success() {
                return Err(AppError::Config(format!("editor '{}' failed", chosen)));
            }
            return Ok(());
        }

        warning("Nothing to do: specify --print or --edit.");
    }

    Ok(())
}
