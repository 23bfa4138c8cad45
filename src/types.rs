use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

use bitvec::prelude::*;
use itertools::Itertools;

/// A single token of a transaction.
///
/// Tokens that parse as base-10 integers become `Integer`, everything else
/// stays `Text`, so `"5"` and `5` only meet when both sides parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Item {
    Integer(i64),
    Text(String),
}

impl Item {
    /// Normalize a raw token.
    ///
    /// Only plain base-10 literals that fit in an `i64` (optional sign, no
    /// digit separators) become integers. `1_000` or a value past `i64::MAX`
    /// stays text, so it never merges with `1000` or another spelling of the
    /// same large number.
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(value) => Item::Integer(value),
            Err(_) => Item::Text(token.to_owned()),
        }
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Item::Integer(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Text(value.to_owned())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::Text(value)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Item::Integer(value) => write!(f, "{}", value),
            Item::Text(value) => write!(f, "{}", value),
        }
    }
}

/// A set of distinct items, stored sorted so that equal sets hash equally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<Item>);

impl Itemset {
    pub fn new<I: IntoIterator<Item = Item>>(items: I) -> Self {
        let mut items: Vec<Item> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Itemset(items)
    }

    pub fn single(item: Item) -> Self {
        Itemset(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.0.binary_search(item).is_ok()
    }

    /// All items but the largest one.
    pub fn prefix(&self) -> &[Item] {
        match self.0.split_last() {
            Some((_, prefix)) => prefix,
            None => &[],
        }
    }

    pub fn last(&self) -> Option<&Item> {
        self.0.last()
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::new(self.iter().chain(other.iter()).cloned())
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        !self.iter().any(|item| other.contains(item))
    }

    /// Subsets of exactly `size` items, each already in canonical order.
    pub fn subsets(&self, size: usize) -> impl Iterator<Item = Itemset> + '_ {
        self.0.iter().cloned().combinations(size).map(Itemset)
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Itemset::new(iter)
    }
}

impl Display for Itemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

pub type TransactionId = usize;
pub type Support = usize;

/// Positions of the transactions that contain an item, one bit per transaction.
pub type TransactionIds = BitVec<usize, Lsb0>;

pub type ItemsetCounts = HashMap<Itemset, Support>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_integers() {
        assert_eq!(Item::parse("5"), Item::Integer(5));
        assert_eq!(Item::parse("-12"), Item::Integer(-12));
        assert_eq!(Item::parse("bread"), Item::Text("bread".to_owned()));
        assert_eq!(Item::parse("5a"), Item::Text("5a".to_owned()));
        assert_ne!(Item::parse("5"), Item::from("5"));
    }

    #[test]
    fn parse_keeps_out_of_range_and_separated_numbers_as_text() {
        assert_eq!(Item::parse("+7"), Item::Integer(7));
        assert_eq!(Item::parse("007"), Item::Integer(7));
        assert_eq!(Item::parse("1_000"), Item::Text("1_000".to_owned()));
        assert_ne!(Item::parse("1_000"), Item::parse("1000"));

        let big = "99999999999999999999";
        assert_eq!(Item::parse(big), Item::Text(big.to_owned()));
        assert_ne!(Item::parse(big), Item::parse("099999999999999999999"));
    }

    #[test]
    fn itemset_equality_ignores_order_and_duplicates() {
        let a = itemset![3, 1, 2];
        let b = itemset![1, 2, 3, 2];
        assert_eq!(a, b);
        assert_eq!(b.len(), 3);
        assert_eq!(a.items(), &[Item::Integer(1), Item::Integer(2), Item::Integer(3)]);
    }

    #[test]
    fn itemset_prefix_and_subsets() {
        let set = itemset![1, 2, 3];
        assert_eq!(set.prefix(), &[Item::Integer(1), Item::Integer(2)]);
        assert_eq!(set.last(), Some(&Item::Integer(3)));
        assert!(itemset![7].prefix().is_empty());

        let subsets: Vec<Itemset> = set.subsets(2).collect();
        assert_eq!(subsets, vec![itemset![1, 2], itemset![1, 3], itemset![2, 3]]);
    }

    #[test]
    fn itemset_union_and_disjoint() {
        assert_eq!(itemset![1, 2].union(&itemset![2, 3]), itemset![1, 2, 3]);
        assert!(itemset![1].is_disjoint(&itemset![2, 3]));
        assert!(!itemset![1, 3].is_disjoint(&itemset![2, 3]));
    }

    #[test]
    fn itemset_display() {
        assert_eq!(itemset![2, 1].to_string(), "{1, 2}");
        let mixed = Itemset::new(vec![Item::from("milk"), Item::Integer(4)]);
        assert_eq!(mixed.to_string(), "{4, milk}");
    }
}
