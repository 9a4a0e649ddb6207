use crate::category::{CATEGORY_RULES, CategoryRule, default_category};
use crate::estimate::WorkItem;

/// Confidence reported when no keyword matched and the default category was used.
pub const FALLBACK_CONFIDENCE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: &'static CategoryRule,
    /// Matched keywords divided by the rule's keyword count, in `[0, 1]`.
    pub confidence: f64,
    pub match_score: usize,
}

/// Number of the rule's keywords found as substrings of `text`.
pub fn match_score(rule: &CategoryRule, text: &str) -> usize {
    rule.keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

/// First-match classification: rules are tried in table order and the first
/// one with any keyword hit wins, even if a later rule would score higher.
pub fn classify(item: &WorkItem) -> Classification {
    let text = item.search_text();
    for rule in CATEGORY_RULES {
        let score = match_score(rule, &text);
        if score > 0 {
            return Classification {
                category: rule,
                confidence: score as f64 / rule.keywords.len() as f64,
                match_score: score,
            };
        }
    }

    Classification {
        category: default_category(),
        confidence: FALLBACK_CONFIDENCE,
        match_score: 0,
    }
}
