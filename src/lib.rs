//! Frequent itemsets and association rules with the Apriori algorithm.
//!
//! ```no_run
//! use apriori::{generate_rules, mine, TransactionIndex};
//!
//! let index = TransactionIndex::from_path("transactions.dat")?;
//! let frequent = mine(&index, 3)?;
//! for rule in generate_rules(0.7, &frequent)? {
//!     println!("{}", rule);
//! }
//! # Ok::<(), apriori::AprioriError>(())
//! ```

#[cfg(test)]
macro_rules! itemset {
    ($($x:expr),* $(,)?) => {
        $crate::types::Itemset::new(vec![$($crate::types::Item::Integer($x)),*])
    };
}

pub mod combi;
pub mod config;
pub mod error;
pub mod index;
pub mod itemsets;
pub mod report;
pub mod rules;
pub mod types;

pub use config::Config;
pub use error::AprioriError;
pub use index::TransactionIndex;
pub use itemsets::mine;
pub use report::write_report;
pub use rules::{generate_rules, Rule};
pub use types::{Item, Itemset, ItemsetCounts, Support};
