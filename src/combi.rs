use itertools::Itertools;

use crate::types::{Itemset, ItemsetCounts};

/// Join frequent (k-1)-itemsets that share their first k-2 items.
///
/// Every k-itemset whose (k-1)-subsets are all frequent is produced exactly
/// once, so after [`prune_step`] the result equals the pairwise union join.
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step<'a, I>(itemsets: I) -> Vec<Itemset>
where
    I: IntoIterator<Item = &'a Itemset>,
{
    let mut itemsets: Vec<&Itemset> = itemsets.into_iter().collect();
    itemsets.sort_unstable();

    let mut final_itemsets = Vec::new();

    let mut i = 0;
    while i < itemsets.len() {
        let prefix = itemsets[i].prefix();
        let skip = itemsets[i..]
            .iter()
            .take_while(|itemset| itemset.len() == itemsets[i].len() && itemset.prefix() == prefix)
            .count();

        for (first, second) in itemsets[i..i + skip].iter().tuple_combinations() {
            if let Some(tail) = second.last() {
                final_itemsets.push(Itemset::new(first.iter().chain(Some(tail)).cloned()));
            }
        }

        i += skip;
    }

    final_itemsets
}

/// Keep candidates whose every (k-1)-subset is frequent, once each.
pub fn prune_step(candidates: Vec<Itemset>, previous: &ItemsetCounts) -> Vec<Itemset> {
    candidates
        .into_iter()
        .filter(|candidate| {
            !candidate.is_empty()
                && candidate
                    .subsets(candidate.len() - 1)
                    .all(|subset| previous.contains_key(&subset))
        })
        .unique()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn counts(itemsets: Vec<Itemset>) -> ItemsetCounts {
        itemsets.into_iter().map(|itemset| (itemset, 1)).collect()
    }

    /// Every pair of distinct itemsets whose union is one item larger.
    fn pairwise_join(itemsets: &[Itemset]) -> HashSet<Itemset> {
        itemsets
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.union(b))
            .filter(|union| union.len() == itemsets[0].len() + 1)
            .collect()
    }

    #[test]
    fn test_join_step() {
        let itemsets = vec![
            itemset![1, 2, 3],
            itemset![1, 2, 4],
            itemset![1, 3, 4],
            itemset![1, 3, 5],
            itemset![2, 3, 4],
        ];
        let y = join_step(&itemsets);
        assert_eq!(y.len(), 2);
        assert!(y.contains(&itemset![1, 2, 3, 4]));
        assert!(y.contains(&itemset![1, 3, 4, 5]));
    }

    #[test]
    fn test_join_step_singletons() {
        let itemsets = vec![itemset![3], itemset![1], itemset![2]];
        let y: HashSet<Itemset> = join_step(&itemsets).into_iter().collect();
        let expected: HashSet<Itemset> = vec![itemset![1, 2], itemset![1, 3], itemset![2, 3]]
            .into_iter()
            .collect();
        assert_eq!(y, expected);
    }

    #[test]
    fn test_join_step_empty() {
        assert!(join_step(&Vec::<Itemset>::new()).is_empty());
        assert!(join_step(&vec![itemset![1]]).is_empty());
    }

    #[test]
    fn test_prune_step() {
        let previous = counts(vec![itemset![1, 2], itemset![2, 3], itemset![1, 3], itemset![1, 4]]);
        let candidates = vec![itemset![1, 2, 3], itemset![1, 2, 4], itemset![1, 2, 3]];

        let pruned = prune_step(candidates, &previous);
        assert_eq!(pruned, vec![itemset![1, 2, 3]]);
    }

    #[test]
    fn join_then_prune_matches_pairwise_join() {
        let previous = vec![
            itemset![1, 2],
            itemset![1, 3],
            itemset![1, 4],
            itemset![2, 3],
            itemset![2, 5],
            itemset![3, 4],
            itemset![4, 5],
        ];
        let lookup = counts(previous.clone());

        let joined: HashSet<Itemset> = prune_step(join_step(&previous), &lookup)
            .into_iter()
            .collect();
        let brute: HashSet<Itemset> =
            prune_step(pairwise_join(&previous).into_iter().collect(), &lookup)
                .into_iter()
                .collect();

        assert_eq!(joined, brute);
        assert!(joined.contains(&itemset![1, 2, 3]));
        assert!(joined.contains(&itemset![1, 3, 4]));
        assert_eq!(joined.len(), 2);
    }
}
