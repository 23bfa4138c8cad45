use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AprioriError;
use crate::types::{Item, Itemset, Support, TransactionId, TransactionIds};

/// Item -> transactions containing it, built once from the input.
#[derive(Debug, Clone, Default)]
pub struct TransactionIndex {
    items: HashMap<Item, TransactionIds>,
    num_transactions: usize,
    c1: Vec<(Itemset, Support)>,
}

impl TransactionIndex {
    /// Build the index from raw tokens. Tokens are normalized with [`Item::parse`].
    pub fn new<T, I, S>(transactions: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items: HashMap<Item, TransactionIds> = HashMap::new();
        let mut num_transactions = 0;

        for (id, transaction) in transactions.into_iter().enumerate() {
            for token in transaction {
                let ids = items
                    .entry(Item::parse(token.as_ref()))
                    .or_insert_with(TransactionIds::new);
                if ids.len() <= id {
                    ids.resize(id + 1, false);
                }
                ids.set(id, true);
            }
            num_transactions = id + 1;
        }

        items
            .values_mut()
            .for_each(|ids| ids.resize(num_transactions, false));

        let mut c1: Vec<(Itemset, Support)> = items
            .iter()
            .map(|(item, ids)| (Itemset::single(item.clone()), ids.count_ones()))
            .collect();
        c1.sort_unstable();

        TransactionIndex {
            items,
            num_transactions,
            c1,
        }
    }

    /// One transaction per line, items separated by whitespace.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, AprioriError> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        Ok(Self::new(lines.iter().map(|line| line.split_whitespace())))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AprioriError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Frequent-or-not 1-itemsets with their supports, sorted by item.
    pub fn c1(&self) -> &[(Itemset, Support)] {
        &self.c1
    }

    pub fn transactions_of(&self, item: &Item) -> Option<&TransactionIds> {
        self.items.get(item)
    }

    /// Number of transactions containing every item of `itemset`.
    pub fn support(&self, itemset: &Itemset) -> Result<Support, AprioriError> {
        if itemset.is_empty() {
            return Err(AprioriError::EmptyItemset);
        }

        let ids: Option<Vec<&TransactionIds>> =
            itemset.iter().map(|item| self.items.get(item)).collect();
        let mut ids = match ids {
            Some(ids) => ids,
            None => return Ok(0),
        };

        // Walk the rarest item's transactions and probe the others.
        ids.sort_unstable_by_key(|ids| ids.count_ones());
        let (rarest, rest) = ids.split_first().ok_or(AprioriError::EmptyItemset)?;

        Ok(rarest
            .iter_ones()
            .filter(|&id: &TransactionId| rest.iter().all(|other| other[id]))
            .count())
    }
}
