use estimate_schedule::category::{DEFAULT_CATEGORY, default_category};
use estimate_schedule::classifier::FALLBACK_CONFIDENCE;
use estimate_schedule::{CATEGORY_RULES, PARALLEL_GROUPS, WorkItem, category_rule, classify};
use std::collections::HashSet;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn lawn_item_matches_lawn_keywords() {
    let c = classify(&WorkItem::new("芝生張り", 150_000.0));
    assert_eq!(c.category.key, "lawn");
    // "芝" and "芝生" hit, out of six lawn keywords
    assert_eq!(c.match_score, 2);
    assert!(approx(c.confidence, 2.0 / 6.0));
}

#[test]
fn first_declared_category_wins_over_higher_score() {
    // planting scores 1 (植栽), lawn scores 2 (芝, 芝生); planting is declared first
    let c = classify(&WorkItem::new("植栽と芝生", 100_000.0));
    assert_eq!(c.category.key, "planting");
    assert_eq!(c.match_score, 1);
    assert!(approx(c.confidence, 1.0 / 9.0));
}

#[test]
fn description_participates_in_matching() {
    let item = WorkItem::new("工事A", 100_000.0).with_description("雨水排水管 敷設");
    let c = classify(&item);
    assert_eq!(c.category.key, "drainage");
    assert_eq!(c.match_score, 2);
}

#[test]
fn matching_is_case_insensitive() {
    let c = classify(&WorkItem::new("LED Lighting", 80_000.0));
    assert_eq!(c.category.key, "electrical");
}

#[test]
fn unmatched_item_falls_back_to_finishing() {
    let c = classify(&WorkItem::new("諸経費", 50_000.0));
    assert_eq!(c.category.key, DEFAULT_CATEGORY);
    assert_eq!(c.match_score, 0);
    assert!(approx(c.confidence, FALLBACK_CONFIDENCE));
}

#[test]
fn classification_is_deterministic() {
    let item = WorkItem::new("ブロック塀 撤去", 300_000.0);
    let first = classify(&item);
    for _ in 0..10 {
        assert_eq!(classify(&item), first);
    }
    // demolition (撤去) is declared before structures (ブロック, 塀)
    assert_eq!(first.category.key, "demolition");
}

#[test]
fn category_table_is_well_formed() {
    let mut keys = HashSet::new();
    let mut last_order = 0;
    for rule in CATEGORY_RULES {
        assert!(keys.insert(rule.key), "duplicate key {}", rule.key);
        assert!(rule.order > last_order, "orders must increase in declaration order");
        last_order = rule.order;
        assert!(rule.base_duration_days >= 1);
        assert!(!rule.keywords.is_empty());
        for keyword in rule.keywords {
            assert_eq!(*keyword, keyword.to_lowercase(), "keywords are matched lowercased");
        }
    }
    assert_eq!(default_category().key, DEFAULT_CATEGORY);
}

#[test]
fn parallel_groups_reference_known_categories() {
    for group in PARALLEL_GROUPS {
        assert!(group.len() >= 2);
        for key in *group {
            assert!(category_rule(key).is_some(), "unknown category {key}");
        }
    }
}
