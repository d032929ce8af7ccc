use reducekit_core::OverflowPolicy;
use reducekit_core::parse::parse_int;

pub(super) fn parse_int_arg(raw: &str) -> std::result::Result<i64, String> {
    parse_int(raw).map_err(|err| err.to_string())
}

pub(super) fn parse_overflow_policy(raw: &str) -> std::result::Result<OverflowPolicy, String> {
    raw.parse::<OverflowPolicy>().map_err(|err| err.to_string())
}
