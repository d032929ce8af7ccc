use clap::Args;

use super::parsers::parse_int_arg;

#[derive(Debug, Args)]
pub struct MaxArgs {
    /// Comma-separated integers; several arguments are merged.
    #[arg(value_name = "INTEGERS")]
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Comma-separated `key=value` pairs; several arguments are merged. Keys
    /// starting with `--` must follow a `--` terminator.
    #[arg(value_name = "PAIRS")]
    pub pairs: Vec<String>,
    /// Key prefix to match. Defaults to `REDUCEKIT_DEFAULT_PREFIX`, then `data`.
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(allow_hyphen_values = true, value_parser = parse_int_arg)]
    pub lhs: i64,
    #[arg(allow_hyphen_values = true, value_parser = parse_int_arg)]
    pub rhs: i64,
}

#[derive(Debug, Args)]
pub struct ValueArg {
    #[arg(allow_hyphen_values = true, value_parser = parse_int_arg)]
    pub value: i64,
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    #[arg(allow_hyphen_values = true, value_parser = parse_int_arg)]
    pub max: i64,
}
