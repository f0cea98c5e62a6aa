//! playerbar - media player module for i3bar-compatible status bars.

use std::{error::Error, process, time::Duration};

use clap::Parser;
use tracing::info;

use playerbar::{
    bar,
    cli::{self, Cli, CliCommand, CliError, CommandResult, formatting::format_error},
    config::Config,
    module::PlayerModule,
    services::{DbusClient, mpris::Command},
    tracing_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    let _guard = if args.log_file {
        Some(tracing_config::init_with_file(config.general.log_level)?)
    } else {
        tracing_config::init(config.general.log_level)?;
        None
    };

    let command = args
        .command
        .unwrap_or(CliCommand::Run { interval: None });

    let result = match command {
        CliCommand::Run { interval } => run(&config, interval).await,
        other => execute(&config, &other),
    };

    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

async fn run(config: &Config, interval: Option<u64>) -> CommandResult {
    let interval = interval.unwrap_or(config.general.interval);
    if interval == 0 {
        return Err(CliError::InvalidArgument {
            arg: "interval".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }

    info!("Starting player module");
    let bus = DbusClient::session()?;
    let module = PlayerModule::new(bus, &config.player)?;

    bar::run(module, Duration::from_secs(interval)).await?;
    Ok(String::new())
}

fn execute(config: &Config, command: &CliCommand) -> CommandResult {
    if *command == CliCommand::Schema {
        return cli::schema();
    }

    let bus = DbusClient::session()?;
    match command {
        CliCommand::Status => cli::status(bus, &config.player),
        CliCommand::PlayPause => cli::send(&bus, &config.player, Command::PlayPause),
        CliCommand::Next => cli::send(&bus, &config.player, Command::Next),
        CliCommand::Previous => cli::send(&bus, &config.player, Command::Previous),
        CliCommand::Players => cli::players(&bus, &config.player),
        CliCommand::Run { .. } | CliCommand::Schema => Ok(String::new()),
    }
}
