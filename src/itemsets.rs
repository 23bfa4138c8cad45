//! Level-wise search for frequent itemsets.

pub mod count;

pub use count::{filter, mine, mine_level, next_candidates, support};
