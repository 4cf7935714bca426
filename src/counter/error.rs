use super::count::{BuildCount, Count, ParseCountError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration")]
    Config {
        #[source]
        cause: anyhow::Error,
    },
    #[error("Cannot resolve the current count")]
    CountSource {
        #[source]
        cause: anyhow::Error,
    },
    #[error("Stored count is invalid")]
    InvalidCount {
        #[source]
        cause: ParseCountError,
    },
    #[error("Cannot look up pull requests, keeping count {current}")]
    PullRequestLookup {
        current: Count,
        #[source]
        cause: anyhow::Error,
    },
    #[error("Count {current} cannot be incremented any further")]
    Overflow { current: Count },
    #[error("Cannot persist count {attempted}, keeping count {current}")]
    Persist {
        current: Count,
        attempted: Count,
        #[source]
        cause: anyhow::Error,
    },
}

impl Error {
    /// Output to emit instead of the count the failed run would have produced.
    pub fn fallback(&self) -> BuildCount {
        match self {
            Error::Config { .. } | Error::CountSource { .. } | Error::InvalidCount { .. } => {
                BuildCount::Unknown
            }
            Error::PullRequestLookup { current, .. }
            | Error::Overflow { current }
            | Error::Persist { current, .. } => BuildCount::Known(*current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn should_report_unknown_before_a_count_is_known() {
        let config = Error::Config {
            cause: anyhow!("Input required and not supplied: label"),
        };
        let source = Error::CountSource {
            cause: anyhow!("API error"),
        };
        let invalid = Error::InvalidCount {
            cause: "abc".parse::<Count>().unwrap_err(),
        };

        assert_eq!(config.fallback(), BuildCount::Unknown);
        assert_eq!(source.fallback(), BuildCount::Unknown);
        assert_eq!(invalid.fallback(), BuildCount::Unknown);
    }

    #[test]
    fn should_keep_the_current_count_once_it_is_known() {
        let lookup = Error::PullRequestLookup {
            current: Count::new(42),
            cause: anyhow!("API error"),
        };
        let persist = Error::Persist {
            current: Count::new(42),
            attempted: Count::new(43),
            cause: anyhow!("API error"),
        };

        let overflow = Error::Overflow {
            current: Count::new(u64::MAX),
        };

        assert_eq!(lookup.fallback(), BuildCount::Known(Count::new(42)));
        assert_eq!(overflow.fallback(), BuildCount::Known(Count::new(u64::MAX)));
        assert_eq!(persist.fallback(), BuildCount::Known(Count::new(42)));
    }

    #[test]
    fn should_chain_the_cause_in_messages() {
        let err = anyhow::Error::from(Error::Persist {
            current: Count::new(42),
            attempted: Count::new(43),
            cause: anyhow!("API error"),
        });

        assert_eq!(
            format!("{:#}", err),
            "Cannot persist count 43, keeping count 42: API error"
        );
    }
}
