use std::fmt::{Display, Formatter, Result};

use crate::{
    error::AprioriError,
    types::{Itemset, Support},
};

/// `antecedent => consequent`, with the confidence it was accepted at.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: Itemset,
    consequent: Itemset,
    pub confidence: f64,
}

impl Rule {
    pub fn new(antecedent: Itemset, consequent: Itemset, confidence: f64) -> Self {
        Rule {
            antecedent,
            consequent,
            confidence,
        }
    }

    pub fn get_antecedent(&self) -> &Itemset {
        &self.antecedent
    }

    pub fn get_consequent(&self) -> &Itemset {
        &self.consequent
    }

    pub fn into_parts(self) -> (Itemset, Itemset) {
        (self.antecedent, self.consequent)
    }
}

/// support(A ∪ C) / support(A)
pub fn compute_confidence(
    antecedent: &Itemset,
    antecedent_support: Support,
    union_support: Support,
) -> std::result::Result<f64, AprioriError> {
    if antecedent_support == 0 {
        return Err(AprioriError::ZeroSupport(antecedent.clone()));
    }
    Ok(union_support as f64 / antecedent_support as f64)
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} => {}", self.antecedent, self.consequent)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(itemset![1], itemset![3, 2], 0.75);
        assert_eq!(rule.to_string(), "{1} => {2, 3}");
    }

    #[test]
    fn test_rule_parts() {
        let rule = Rule::new(itemset![1], itemset![2], 1.0);
        assert_eq!(rule.get_antecedent(), &itemset![1]);
        assert_eq!(rule.get_consequent(), &itemset![2]);
        assert_eq!(rule.into_parts(), (itemset![1], itemset![2]));
    }

    #[test]
    fn test_compute_confidence() {
        assert_eq!(compute_confidence(&itemset![1], 4, 3).unwrap(), 0.75);
        assert_eq!(compute_confidence(&itemset![1], 3, 3).unwrap(), 1.0);
    }

    #[test]
    fn test_compute_confidence_zero_support() {
        let result = compute_confidence(&itemset![9], 0, 0);
        assert!(matches!(result, Err(AprioriError::ZeroSupport(ref itemset)) if *itemset == itemset![9]));
    }
}
