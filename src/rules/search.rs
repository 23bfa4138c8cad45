use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{
    error::{check_fraction, AprioriError},
    rules::rule::{compute_confidence, Rule},
    types::{Itemset, ItemsetCounts, Support},
};

/// Frequent pairs and their singletons, with supports.
pub type RelevantItems = BTreeMap<Itemset, Support>;

/// Generate rules from the frequent pairs.
///
/// Only pairs feed the pool, so every rule has a single-item antecedent and a
/// single-item consequent. Larger frequent itemsets are not split into rules.
pub fn generate_rules(
    min_conf: f64,
    frequent_itemsets: &ItemsetCounts,
) -> Result<Vec<Rule>, AprioriError> {
    let min_conf = check_fraction("confidence", min_conf)?;
    let relevant_items = relevant_items(frequent_itemsets)?;

    let mut rules = Vec::new();
    for ((antecedent, &antecedent_support), (consequent, _)) in
        relevant_items.iter().tuple_combinations().flat_map(|(a, b)| vec![(a, b), (b, a)])
    {
        if !antecedent.is_disjoint(consequent) {
            continue;
        }
        let union = antecedent.union(consequent);
        // pairs kept at a zero support threshold may never occur together
        let union_support = match relevant_items.get(&union) {
            Some(&support) if support > 0 => support,
            _ => continue,
        };

        let confidence = compute_confidence(antecedent, antecedent_support, union_support)?;
        if confidence >= min_conf {
            rules.push(Rule::new(antecedent.clone(), consequent.clone(), confidence));
        }
    }

    Ok(rules)
}

/// Every frequent 2-itemset plus both of its 1-itemsets.
pub fn relevant_items(frequent_itemsets: &ItemsetCounts) -> Result<RelevantItems, AprioriError> {
    let mut relevant_items = RelevantItems::new();

    for (itemset, &support) in frequent_itemsets.iter().filter(|(itemset, _)| itemset.len() == 2) {
        for single in itemset.subsets(1) {
            let single_support = match frequent_itemsets.get(&single) {
                Some(&support) => support,
                None => return Err(AprioriError::MissingSubset(single)),
            };
            relevant_items.insert(single, single_support);
        }
        relevant_items.insert(itemset.clone(), support);
    }

    Ok(relevant_items)
}
