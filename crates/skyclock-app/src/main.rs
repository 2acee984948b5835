mod terminal;

use std::{backtrace::Backtrace, panic, path::PathBuf};

use clap::{Parser, Subcommand};
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, LogSpecification, Logger, Naming};
use log::{debug, error, info};
use masterror::{AppError, AppResult};
use skyclock_core::{config::get_config, modules::clock::ClockWidget, server};
use skyclock_proto::config::Config;
use tokio::runtime::Handle;

use crate::terminal::TerminalLocator;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    /// Serve the dashboard page and weather API
    #[default]
    Serve,
    /// Show the clock in this terminal until Ctrl-C
    Clock,
}

fn get_log_spec(log_level: &str) -> LogSpecification {
    LogSpecification::env_or_parse(log_level).unwrap_or_else(|err| {
        error!("Failed to parse log level '{log_level}': {err}");
        LogSpecification::info()
    })
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        error!("{err}");
        eprintln!("skyclock: {err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> AppResult<()> {
    let logger = Logger::with(LogSpecification::info())
        .log_to_file(FileSpec::default().directory("/tmp/skyclock"))
        .duplicate_to_stdout(flexi_logger::Duplicate::All)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .start()
        .map_err(|err| AppError::internal(format!("Failed to start logger: {err}")))?;

    panic::set_hook(Box::new(|info| {
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
    }));

    debug!("args: {args:?}");

    let (config, config_path) = get_config(args.config_path)
        .map_err(|err| AppError::internal(format!("Failed to read config: {err}")))?;
    info!("Using config {}", config_path.display());

    logger.set_new_spec(get_log_spec(&config.log_level));

    match args.command.unwrap_or_default() {
        Command::Serve => server::serve(&config)
            .await
            .map_err(|err| AppError::internal(err.to_string())),
        Command::Clock => run_terminal_clock(&config).await,
    }
}

async fn run_terminal_clock(config: &Config) -> AppResult<()> {
    let Some(mut clock) =
        ClockWidget::initialize(&TerminalLocator::detect(), &config.clock, &Handle::current())
    else {
        info!("stdout is not a terminal, nothing to show");
        return Ok(());
    };

    tokio::signal::ctrl_c()
        .await
        .map_err(|err| AppError::internal(format!("Failed to wait for Ctrl-C: {err}")))?;

    clock.stop();
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let args = Args::parse_from(["skyclock"]);
        assert_eq!(args.command, None);
        assert_eq!(args.command.unwrap_or_default(), Command::Serve);
    }

    #[test]
    fn clock_subcommand_and_config_path_parse() {
        let args = Args::parse_from(["skyclock", "--config-path", "/etc/skyclock.toml", "clock"]);
        assert_eq!(args.command, Some(Command::Clock));
        assert_eq!(args.config_path, Some(PathBuf::from("/etc/skyclock.toml")));
    }

    fn level_of(spec: &LogSpecification, module: Option<&str>) -> Option<log::LevelFilter> {
        spec.module_filters()
            .iter()
            .find(|filter| filter.module_name.as_deref() == module)
            .map(|filter| filter.level_filter)
    }

    #[test]
    fn config_log_level_becomes_the_logger_spec() {
        // RUST_LOG takes precedence over the config value.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let spec = get_log_spec("warn, skyclock_core=debug");
        assert_eq!(level_of(&spec, None), Some(log::LevelFilter::Warn));
        assert_eq!(
            level_of(&spec, Some("skyclock_core")),
            Some(log::LevelFilter::Debug)
        );
    }

    #[test]
    fn unparsable_log_level_falls_back_to_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let spec = get_log_spec("skyclock_core=loud");
        assert_eq!(level_of(&spec, None), Some(log::LevelFilter::Info));
    }
}
