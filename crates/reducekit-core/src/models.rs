use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    pub operation: String,
    pub result: i64,
    pub inputs: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<usize>,
}

impl Reduction {
    pub fn new(operation: impl Into<String>, result: i64, inputs: usize) -> Self {
        Self {
            operation: operation.into(),
            result,
            inputs,
            prefix: None,
            matched: None,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, prefix: impl Into<String>, matched: usize) -> Self {
        self.prefix = Some(prefix.into());
        self.matched = Some(matched);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub const fn of(value: i64) -> Self {
        if crate::arith::is_even(value) {
            Self::Even
        } else {
            Self::Odd
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityReport {
    pub value: i64,
    pub parity: Parity,
}
