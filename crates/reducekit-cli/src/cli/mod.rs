use std::ffi::OsString;

use clap::{Parser, Subcommand, ValueEnum};
use reducekit_core::OverflowPolicy;

mod args;
mod parsers;


pub use args::{AddArgs, MaxArgs, RangeArgs, SumArgs, ValueArg};

/// Long options that consume the following token as their value.
const VALUE_FLAGS: [&str; 4] = ["--format", "--log-level", "--overflow", "--prefix"];

#[derive(Debug, Parser)]
#[command(name = "reduce")]
#[command(about = "Integer reductions over sequences and key=value mappings", version)]
pub struct Cli {
    /// Output rendering for results and errors.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log filter directive (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Addition overflow policy; overrides `REDUCEKIT_OVERFLOW`.
    #[arg(long, global = true, value_parser = parsers::parse_overflow_policy)]
    pub overflow: Option<OverflowPolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the largest of the given integers.
    Max(MaxArgs),
    /// Sum the values of key=value pairs whose key starts with a prefix.
    Sum(SumArgs),
    /// Add two integers.
    Add(AddArgs),
    /// Report whether an integer is even or odd.
    Parity(ValueArg),
    /// Print 1 through MAX, one per line.
    Range(RangeArgs),
}

impl Commands {
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Max(_) => "max",
            Self::Sum(_) => "sum",
            Self::Add(_) => "add",
            Self::Parity(_) => "parity",
            Self::Range(_) => "range",
        }
    }
}

impl Cli {
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(shield_hyphen_values(args))
    }

    #[cfg(test)]
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(shield_hyphen_values(args))
    }
}

/// Prefixes value-shaped tokens such as `-5,-1` or `-x=1` with a space so
/// clap reads them as positionals rather than short flags. Values are trimmed
/// by the integer and pair parsers. Tokens after `--` and tokens consumed by
/// a value-taking option are left untouched.
pub fn shield_hyphen_values<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut option_value_pending = false;
    let mut after_terminator = false;
    for arg in args.into_iter().map(Into::into) {
        let Some(token) = arg.to_str() else {
            option_value_pending = false;
            out.push(arg);
            continue;
        };
        if after_terminator || option_value_pending {
            option_value_pending = false;
            out.push(arg);
            continue;
        }
        if token == "--" {
            after_terminator = true;
            out.push(arg);
            continue;
        }
        if VALUE_FLAGS.contains(&token) {
            option_value_pending = true;
            out.push(arg);
            continue;
        }
        if is_hyphen_value(token) {
            out.push(OsString::from(format!(" {token}")));
        } else {
            out.push(arg);
        }
    }
    out
}

fn is_hyphen_value(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    rest.starts_with(|c: char| c.is_ascii_digit()) || rest.contains('=')
}
