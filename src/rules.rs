//! Association rules over the frequent itemsets.

pub mod rule;
pub mod search;

pub use rule::Rule;
pub use search::{generate_rules, relevant_items, RelevantItems};
