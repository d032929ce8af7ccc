// Public fallible APIs in this crate share one concrete error contract (`ReduceError`).
#![allow(clippy::missing_errors_doc)]

pub mod arith;
pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod reduce;

pub use arith::{OverflowPolicy, is_even, number_range, sum_of};
pub use config::ReduceConfig;
pub use error::{ErrorPayload, ReduceError, Result};
pub use reduce::{
    DEFAULT_PREFIX, FilteredSum, filtered_sum, filtered_sum_by, filtered_sum_with, maximum_of,
};
