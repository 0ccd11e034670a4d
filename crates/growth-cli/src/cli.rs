//! CLI argument definitions for the growth assessment calculator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use growth_model::{GrowthError, MeasurementMethod, Reference, Sex};

#[derive(Parser)]
#[command(
    name = "growth",
    version,
    about = "Growth assessment calculator for infants, children and young people",
    long_about = "Calculations relating to the growth of infants, children and young people\n\
                  against the UK-WHO, Trisomy-21 and Turner syndrome references:\n\
                  decimal age, SDS/centile conversion, and mid-parental height."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate decimal age, chronological or corrected for gestation.
    AgeCalculation(AgeArgs),

    /// SDS and centile for an observed measurement.
    SdsForMeasurement(SdsForMeasurementArgs),

    /// Measurement value at a given centile.
    MeasurementForCentile(MeasurementForCentileArgs),

    /// Measurement value at a given SDS.
    MeasurementForSds(MeasurementForSdsArgs),

    /// Mid-parental height estimate from parental heights.
    MidparentalHeight(MidparentalHeightArgs),

    /// List the embedded reference tables and their coverage.
    References,
}

#[derive(Parser)]
pub struct AgeArgs {
    /// Date of birth (YYYY-MM-DD).
    #[arg(value_name = "BIRTH_DATE", value_parser = parse_date)]
    pub birth_date: NaiveDate,

    /// Date of observation (YYYY-MM-DD).
    #[arg(value_name = "OBSERVATION_DATE", value_parser = parse_date)]
    pub observation_date: NaiveDate,

    /// Gestation at birth: completed weeks.
    #[arg(value_name = "GESTATION_WEEKS", default_value_t = 40)]
    pub gestation_weeks: u32,

    /// Gestation at birth: additional days.
    #[arg(value_name = "GESTATION_DAYS", default_value_t = 0)]
    pub gestation_days: u32,

    /// Correct the decimal age for gestational age.
    #[arg(long = "adjustment", short = 'a')]
    pub adjustment: bool,
}

#[derive(Parser)]
pub struct SdsForMeasurementArgs {
    /// Decimal age in years (negative for corrected preterm ages).
    #[arg(value_name = "DECIMAL_AGE", allow_hyphen_values = true)]
    pub decimal_age: f64,

    /// What was measured.
    #[arg(value_enum, value_name = "MEASUREMENT_METHOD")]
    pub measurement_method: MethodArg,

    /// Sex of the child.
    #[arg(value_enum, value_name = "SEX")]
    pub sex: SexArg,

    /// Observed value, in the method's unit (cm, kg, or kg/m²).
    #[arg(value_name = "OBSERVATION_VALUE")]
    pub observation_value: f64,

    /// Reference population.
    #[arg(
        long = "reference",
        short = 'r',
        value_enum,
        default_value = "uk-who"
    )]
    pub reference: ReferenceArg,
}

#[derive(Parser)]
pub struct MeasurementForCentileArgs {
    /// Decimal age in years (negative for corrected preterm ages).
    #[arg(value_name = "DECIMAL_AGE", allow_hyphen_values = true)]
    pub decimal_age: f64,

    /// What was measured.
    #[arg(value_enum, value_name = "MEASUREMENT_METHOD")]
    pub measurement_method: MethodArg,

    /// Sex of the child.
    #[arg(value_enum, value_name = "SEX")]
    pub sex: SexArg,

    /// Target centile, strictly between 0 and 100.
    #[arg(value_name = "CENTILE")]
    pub centile: f64,

    /// Reference population.
    #[arg(
        long = "reference",
        short = 'r',
        value_enum,
        default_value = "uk-who"
    )]
    pub reference: ReferenceArg,
}

#[derive(Parser)]
pub struct MeasurementForSdsArgs {
    /// Decimal age in years (negative for corrected preterm ages).
    #[arg(value_name = "DECIMAL_AGE", allow_hyphen_values = true)]
    pub decimal_age: f64,

    /// What was measured.
    #[arg(value_enum, value_name = "MEASUREMENT_METHOD")]
    pub measurement_method: MethodArg,

    /// Sex of the child.
    #[arg(value_enum, value_name = "SEX")]
    pub sex: SexArg,

    /// Target standard deviation score.
    #[arg(value_name = "SDS", allow_hyphen_values = true)]
    pub sds: f64,

    /// Reference population.
    #[arg(
        long = "reference",
        short = 'r',
        value_enum,
        default_value = "uk-who"
    )]
    pub reference: ReferenceArg,
}

#[derive(Parser)]
pub struct MidparentalHeightArgs {
    /// Maternal height in cm.
    #[arg(value_name = "MATERNAL_HEIGHT")]
    pub maternal_height: f64,

    /// Paternal height in cm.
    #[arg(value_name = "PATERNAL_HEIGHT")]
    pub paternal_height: f64,

    /// Sex of the child.
    #[arg(value_enum, value_name = "SEX")]
    pub sex: SexArg,
}

/// CLI sex choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

/// CLI measurement method choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Height,
    Weight,
    Bmi,
    Ofc,
}

impl From<MethodArg> for MeasurementMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Height => MeasurementMethod::Height,
            MethodArg::Weight => MeasurementMethod::Weight,
            MethodArg::Bmi => MeasurementMethod::Bmi,
            MethodArg::Ofc => MeasurementMethod::Ofc,
        }
    }
}

/// CLI reference choices, spelled exactly as the published literals.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReferenceArg {
    #[value(name = "uk-who")]
    UkWho,
    #[value(name = "trisomy-21")]
    Trisomy21,
    #[value(name = "turners-syndrome")]
    TurnersSyndrome,
}

impl From<ReferenceArg> for Reference {
    fn from(value: ReferenceArg) -> Self {
        match value {
            ReferenceArg::UkWho => Reference::UkWho,
            ReferenceArg::Trisomy21 => Reference::Trisomy21,
            ReferenceArg::TurnersSyndrome => Reference::TurnersSyndrome,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        GrowthError::InvalidDate {
            value: value.to_string(),
        }
        .to_string()
    })
}
