use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::{self, ConfigSetOptions};
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    // Completions and config path must work even with a broken config file.
    match &cli.command {
        Commands::Completions { shell } => return Ok(commands::completions::execute(shell)?),
        Commands::Config {
            command: Some(ConfigCommands::Path),
        } => {
            let ctx = CommandContext::new(cli, &config::Config::default());
            return config::execute_path(&ctx);
        }
        _ => {}
    }

    let settings = config::load_config()?;
    let ctx = CommandContext::new(cli, &settings);

    match &cli.command {
        Commands::Query(args) => commands::query::execute(&ctx, args, &settings),
        Commands::Keys => commands::keys::execute(&ctx),
        Commands::Config { command } => match command {
            None | Some(ConfigCommands::Show) => config::execute_show(&ctx),
            Some(ConfigCommands::Set { key, value }) => {
                let opts = ConfigSetOptions {
                    key: key.clone(),
                    value: value.clone(),
                };
                config::execute_set(&ctx, &opts)
            }
            Some(ConfigCommands::Path) => config::execute_path(&ctx),
        },
        Commands::Completions { shell } => Ok(commands::completions::execute(shell)?),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Query(_) => "QUERY_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Query(_) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
