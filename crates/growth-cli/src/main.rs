//! Growth assessment CLI.

use anyhow::Context;
use clap::{ColorChoice, Parser};
use growth_cli::logging::{LogConfig, LogFormat, init_logging};
use growth_cli::{commands, summary};
use growth_references::LmsRegistry;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::AgeCalculation(args) => {
            let report = commands::run_age_calculation(
                args.birth_date,
                args.observation_date,
                args.gestation_weeks,
                args.gestation_days,
                args.adjustment,
            )?;
            summary::print_age(&report);
        }
        Command::SdsForMeasurement(args) => {
            let registry = load_registry()?;
            let report = commands::run_sds_for_measurement(
                &registry,
                args.reference.into(),
                args.decimal_age,
                args.sex.into(),
                args.measurement_method.into(),
                args.observation_value,
            )?;
            summary::print_sds(&report);
        }
        Command::MeasurementForCentile(args) => {
            let registry = load_registry()?;
            let report = commands::run_measurement_for_centile(
                &registry,
                args.reference.into(),
                args.decimal_age,
                args.sex.into(),
                args.measurement_method.into(),
                args.centile,
            )?;
            summary::print_measurement(&report);
        }
        Command::MeasurementForSds(args) => {
            let registry = load_registry()?;
            let report = commands::run_measurement_for_sds(
                &registry,
                args.reference.into(),
                args.decimal_age,
                args.sex.into(),
                args.measurement_method.into(),
                args.sds,
            )?;
            summary::print_measurement(&report);
        }
        Command::MidparentalHeight(args) => {
            let report = commands::run_midparental_height(
                args.maternal_height,
                args.paternal_height,
                args.sex.into(),
            )?;
            summary::print_midparental(&report);
        }
        Command::References => {
            let registry = load_registry()?;
            summary::print_references(&commands::run_references(&registry));
        }
    }
    Ok(())
}

fn load_registry() -> anyhow::Result<LmsRegistry> {
    LmsRegistry::embedded().context("load embedded reference tables")
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
