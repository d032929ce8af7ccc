use std::io::{self, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use reducekit_core::models::{Parity, ParityReport, Reduction};
use reducekit_core::{OverflowPolicy, ReduceConfig, filtered_sum_by, maximum_of, number_range, sum_of};
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};

mod support;


use self::support::{collect_entries, collect_values, eprint_json, print_json, write_json_seq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) default_prefix: String,
    pub(crate) overflow: OverflowPolicy,
}

impl Settings {
    pub(crate) fn resolve(config: ReduceConfig, overflow_flag: Option<OverflowPolicy>) -> Self {
        Self {
            overflow: overflow_flag.unwrap_or(config.overflow),
            default_prefix: config.default_prefix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandOutput {
    Reduction(Reduction),
    Parity(ParityReport),
    Range(RangeInclusive<i64>),
}

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = ReduceConfig::from_env().context("failed to load configuration")?;
    let settings = Settings::resolve(config, cli.overflow);
    let operation = cli.command.operation();
    debug!(
        operation,
        overflow = settings.overflow.as_str(),
        prefix = %settings.default_prefix,
        "dispatching command"
    );

    match execute(&settings, cli.command) {
        Ok(output) => render(&output, cli.format),
        Err(err) => {
            if cli.format == OutputFormat::Json {
                eprint_json(&err.to_payload(operation))?;
            }
            Err(err).with_context(|| format!("{operation} failed"))
        }
    }
}

pub(crate) fn execute(
    settings: &Settings,
    command: Commands,
) -> reducekit_core::Result<CommandOutput> {
    match command {
        Commands::Max(args) => {
            let values = collect_values(&args.values)?;
            let inputs = values.len();
            let max = maximum_of(values)?;
            Ok(CommandOutput::Reduction(Reduction::new("max", max, inputs)))
        }
        Commands::Sum(args) => {
            let entries = collect_entries(&args.pairs)?;
            let prefix = args
                .prefix
                .unwrap_or_else(|| settings.default_prefix.clone());
            let sum = filtered_sum_by(
                &entries,
                |key| key.starts_with(prefix.as_str()),
                settings.overflow,
            )?;
            debug!(prefix = %prefix, matched = sum.matched, "prefix-filtered sum");
            Ok(CommandOutput::Reduction(
                Reduction::new("sum", sum.total, entries.len()).with_filter(prefix, sum.matched),
            ))
        }
        Commands::Add(args) => {
            let total = sum_of(args.lhs, args.rhs, settings.overflow)?;
            Ok(CommandOutput::Reduction(Reduction::new("add", total, 2)))
        }
        Commands::Parity(args) => Ok(CommandOutput::Parity(ParityReport {
            value: args.value,
            parity: Parity::of(args.value),
        })),
        Commands::Range(args) => Ok(CommandOutput::Range(number_range(args.max))),
    }
}

fn render(output: &CommandOutput, format: OutputFormat) -> Result<()> {
    match (output, format) {
        (CommandOutput::Reduction(reduction), OutputFormat::Text) => {
            println!("{}", reduction.result);
        }
        (CommandOutput::Reduction(reduction), OutputFormat::Json) => print_json(reduction)?,
        (CommandOutput::Parity(report), OutputFormat::Text) => {
            println!("{}", report.parity.as_str());
        }
        (CommandOutput::Parity(report), OutputFormat::Json) => print_json(report)?,
        (CommandOutput::Range(range), OutputFormat::Text) => {
            let mut stdout = io::stdout().lock();
            for value in range.clone() {
                writeln!(stdout, "{value}")?;
            }
        }
        (CommandOutput::Range(range), OutputFormat::Json) => {
            write_json_seq(&mut io::stdout().lock(), range.clone())?;
        }
    }
    Ok(())
}
