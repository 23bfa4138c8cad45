use crate::{
    combi::{join_step, prune_step},
    error::AprioriError,
    index::TransactionIndex,
    types::{Itemset, ItemsetCounts, Support},
};

/// Support of every candidate. Repeated candidates are counted once.
pub fn support<I>(index: &TransactionIndex, candidates: I) -> Result<ItemsetCounts, AprioriError>
where
    I: IntoIterator<Item = Itemset>,
{
    let mut counts = ItemsetCounts::new();
    for candidate in candidates {
        if counts.contains_key(&candidate) {
            continue;
        }
        let count = index.support(&candidate)?;
        counts.insert(candidate, count);
    }
    Ok(counts)
}

/// Candidates of size k, with supports, from the frequent (k-1)-itemsets.
pub fn next_candidates(
    index: &TransactionIndex,
    previous: &ItemsetCounts,
) -> Result<ItemsetCounts, AprioriError> {
    let joined = join_step(previous.keys());
    let candidates = prune_step(joined, previous);
    support(index, candidates)
}

pub fn filter(candidates: ItemsetCounts, min_support: Support) -> ItemsetCounts {
    candidates
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .collect()
}

/// One level of the search: the frequent k-itemsets given the (k-1) ones.
pub fn mine_level(
    index: &TransactionIndex,
    previous: &ItemsetCounts,
    min_support: Support,
) -> Result<ItemsetCounts, AprioriError> {
    let candidates = next_candidates(index, previous)?;
    Ok(filter(candidates, min_support))
}

/// All frequent itemsets of every size, keyed by itemset.
pub fn mine(index: &TransactionIndex, min_support: Support) -> Result<ItemsetCounts, AprioriError> {
    let mut frequent = filter(index.c1().iter().cloned().collect(), min_support);
    let mut all_frequent_itemsets = frequent.clone();

    while !frequent.is_empty() {
        frequent = mine_level(index, &frequent, min_support)?;
        all_frequent_itemsets.extend(
            frequent
                .iter()
                .map(|(itemset, &count)| (itemset.clone(), count)),
        );
    }

    Ok(all_frequent_itemsets)
}
