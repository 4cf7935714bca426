use std::{fmt, str::FromStr};
use thiserror::Error;

/// Build count as integer. Stores hold it as text; `FromStr` and `Display`
/// are the only conversions between the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(u64);

impl Count {
    #[cfg(test)]
    pub fn new(value: u64) -> Self {
        Count(value)
    }

    /// `None` once the count cannot grow any further.
    pub fn increment(self) -> Option<Count> {
        self.0.checked_add(1).map(Count)
    }
}

impl FromStr for Count {
    type Err = ParseCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Count)
            .map_err(|_| ParseCountError {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{value:?} is not a non-negative integer")]
pub struct ParseCountError {
    value: String,
}

/// The value emitted as the action output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildCount {
    Known(Count),
    /// Rendered as `NaN`: the count could not be established.
    Unknown,
}

impl From<Count> for BuildCount {
    fn from(count: Count) -> Self {
        BuildCount::Known(count)
    }
}

impl fmt::Display for BuildCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildCount::Known(count) => fmt::Display::fmt(count, f),
            BuildCount::Unknown => f.write_str("NaN"),
        }
    }
}
