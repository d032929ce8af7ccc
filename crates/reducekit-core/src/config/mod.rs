use crate::arith::OverflowPolicy;
use crate::error::{ReduceError, Result};
use crate::reduce::DEFAULT_PREFIX;

mod env;

pub const ENV_DEFAULT_PREFIX: &str = "REDUCEKIT_DEFAULT_PREFIX";
pub const ENV_OVERFLOW: &str = "REDUCEKIT_OVERFLOW";

/// Process-level defaults. Explicit call arguments and CLI flags win over these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceConfig {
    pub default_prefix: String,
    pub overflow: OverflowPolicy,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            default_prefix: DEFAULT_PREFIX.to_string(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl ReduceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::read_non_empty_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_prefix = env::non_empty(lookup(ENV_DEFAULT_PREFIX))
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        let overflow = match env::non_empty(lookup(ENV_OVERFLOW)) {
            None => OverflowPolicy::default(),
            Some(raw) => raw.parse::<OverflowPolicy>().map_err(|_| {
                ReduceError::Validation(format!(
                    "invalid {ENV_OVERFLOW}: {raw} (expected checked|wrapping|saturating)"
                ))
            })?,
        };
        Ok(Self {
            default_prefix,
            overflow,
        })
    }
}
