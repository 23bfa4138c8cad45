use std::io::Write;

use itertools::Itertools;

use crate::{
    config::Config, error::AprioriError, index::TransactionIndex, itemsets::mine,
    rules::generate_rules,
};

/// Mine `index` with the thresholds in `config` and write the results.
///
/// Percentages print like `5.0%`. Rule generation is skipped when nothing is
/// frequent, but its heading and empty result are still written.
pub fn write_report<W: Write>(
    out: &mut W,
    config: &Config,
    index: &TransactionIndex,
) -> Result<(), AprioriError> {
    let support_pct = config.support * 100.0;
    let confidence_pct = config.confidence * 100.0;
    let min_support = config.min_support_count(index.num_transactions());

    writeln!(out, "\nLooking for frequent items with apriori algorithm...")?;
    let frequent = mine(index, min_support)?;
    if frequent.is_empty() {
        writeln!(out, "No frequent items found for support threshold {:?}%.", support_pct)?;
    } else {
        writeln!(
            out,
            "The itemsets returned by apriori algorithm with support threshold {:?}% are:",
            support_pct
        )?;
        for (itemset, support) in frequent
            .iter()
            .sorted_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        {
            writeln!(out, "{}: {}", itemset, support)?;
        }
    }

    writeln!(out, "\nLooking for association rules...")?;
    let rules = if frequent.is_empty() {
        Vec::new()
    } else {
        generate_rules(config.confidence, &frequent)?
    };
    if rules.is_empty() {
        writeln!(out, "No association rules found for confidence {:?}%.", confidence_pct)?;
    } else {
        writeln!(out, "The found association rules with confidence {:?}% are:", confidence_pct)?;
        for rule in &rules {
            writeln!(out, "{}", rule)?;
        }
    }

    Ok(())
}
