use std::path::PathBuf;

use crate::error::{check_fraction, AprioriError};
use crate::types::Support;

pub const USAGE: &str = "usage: apriori --in <path> [--s <support>] [--c <confidence>]

  --in <path>        file with one transaction per line, items separated by spaces
  --s <support>      support threshold as a fraction of the transactions (default 0.05)
  --c <confidence>   confidence threshold from 0 to 1 (default 0.5)";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    /// Fraction of the transactions an itemset must appear in.
    pub support: f64,
    pub confidence: f64,
}

impl Config {
    pub const DEFAULT_SUPPORT: f64 = 0.05;
    pub const DEFAULT_CONFIDENCE: f64 = 0.5;

    /// Parse flags, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self, AprioriError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut support = Self::DEFAULT_SUPPORT;
        let mut confidence = Self::DEFAULT_CONFIDENCE;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.find('=') {
                Some(pos) if arg.starts_with("--") => {
                    (arg[..pos].to_owned(), Some(arg[pos + 1..].to_owned()))
                }
                _ => (arg, None),
            };

            let flag: &'static str = match flag.as_str() {
                "-h" | "--help" => return Err(AprioriError::Usage(USAGE.to_owned())),
                "--in" => "--in",
                "--s" => "--s",
                "--c" => "--c",
                other => return Err(AprioriError::UnknownArgument(other.to_owned())),
            };
            let value = inline
                .or_else(|| args.next())
                .ok_or(AprioriError::MissingArgument(flag))?;

            match flag {
                "--in" => input = Some(PathBuf::from(value)),
                "--s" => support = parse_fraction(flag, &value, "support")?,
                _ => confidence = parse_fraction(flag, &value, "confidence")?,
            }
        }

        let input = input.ok_or(AprioriError::MissingArgument("--in"))?;
        Ok(Config {
            input,
            support,
            confidence,
        })
    }

    /// Absolute support threshold for `num_transactions`, rounding halves to even.
    pub fn min_support_count(&self, num_transactions: usize) -> Support {
        round_half_even(self.support * num_transactions as f64) as Support
    }
}

fn parse_fraction(flag: &str, value: &str, name: &'static str) -> Result<f64, AprioriError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| AprioriError::InvalidArgument {
            flag: flag.to_owned(),
            value: value.to_owned(),
        })?;
    check_fraction(name, parsed)
}

fn round_half_even(value: f64) -> f64 {
    if (value - value.trunc()).abs() == 0.5 {
        2.0 * (value / 2.0).round()
    } else {
        value.round()
    }
}
