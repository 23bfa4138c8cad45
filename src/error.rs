use std::fmt::{self, Display, Formatter};
use std::io;

use crate::types::Itemset;

#[derive(Debug)]
pub enum AprioriError {
    /// Reading transactions or writing a report failed.
    Io(io::Error),
    /// A support fraction or confidence outside `[0, 1]`.
    InvalidThreshold { name: &'static str, value: f64 },
    /// Support is undefined for an itemset with no items.
    EmptyItemset,
    /// A frequent pair whose singleton is absent from the frequent itemsets.
    MissingSubset(Itemset),
    /// A rule antecedent with zero support.
    ZeroSupport(Itemset),
    /// A required command-line flag, or a flag's value, was not given.
    MissingArgument(&'static str),
    /// A command-line flag value that is not a number.
    InvalidArgument { flag: String, value: String },
    /// A command-line flag the tool does not know.
    UnknownArgument(String),
    /// Help was requested; carries the usage text.
    Usage(String),
}

impl Display for AprioriError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AprioriError::Io(err) => write!(f, "i/o error: {}", err),
            AprioriError::InvalidThreshold { name, value } => {
                write!(f, "invalid {} threshold {}: expected a value in [0, 1]", name, value)
            }
            AprioriError::EmptyItemset => write!(f, "support of an empty itemset is undefined"),
            AprioriError::MissingSubset(itemset) => {
                write!(f, "itemset {} is not among the frequent itemsets", itemset)
            }
            AprioriError::ZeroSupport(itemset) => {
                write!(f, "cannot compute confidence: {} has zero support", itemset)
            }
            AprioriError::MissingArgument(flag) => write!(f, "missing required argument {}", flag),
            AprioriError::InvalidArgument { flag, value } => {
                write!(f, "invalid value {:?} for {}", value, flag)
            }
            AprioriError::UnknownArgument(arg) => write!(f, "unknown argument {:?}", arg),
            AprioriError::Usage(usage) => write!(f, "{}", usage),
        }
    }
}

impl std::error::Error for AprioriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AprioriError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AprioriError {
    fn from(err: io::Error) -> Self {
        AprioriError::Io(err)
    }
}

/// Rejects NaN and anything outside `[0, 1]`.
pub(crate) fn check_fraction(name: &'static str, value: f64) -> Result<f64, AprioriError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AprioriError::InvalidThreshold { name, value })
    }
}
