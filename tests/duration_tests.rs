use chrono::NaiveDate;
use estimate_schedule::{
    CategoryRule, ProjectScale, Season, WorkItem, category_rule, determine_scale,
    determine_season, estimate_duration,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rule(key: &str) -> &'static CategoryRule {
    category_rule(key).unwrap()
}

#[test]
fn lawn_example_in_winter_rounds_to_six_days() {
    let item = WorkItem::new("芝生張り", 150_000.0);
    let est = estimate_duration(&item, rule("lawn"), ProjectScale::Medium, Season::Winter);
    assert_eq!(est.factors.base_duration_days, 3);
    assert_eq!(est.factors.amount_factor, 1.5);
    assert_eq!(est.factors.scale_factor, 1.0);
    assert_eq!(est.factors.season_factor, 1.4);
    // 3 * 1.5 * 1.0 * 1.4 = 6.3
    assert_eq!(est.duration_days, 6);
}

#[test]
fn amount_factor_is_clamped() {
    let cheap = WorkItem::new("芝", 0.0);
    let est = estimate_duration(&cheap, rule("lawn"), ProjectScale::Medium, Season::Spring);
    assert_eq!(est.factors.amount_factor, 0.5);

    let expensive = WorkItem::new("ブロック塀", 10_000_000.0);
    let est = estimate_duration(&expensive, rule("structures"), ProjectScale::Xlarge, Season::Winter);
    assert_eq!(est.factors.amount_factor, 3.0);
    // 7 * 3.0 * 1.6 * 1.4 = 47.04
    assert_eq!(est.duration_days, 47);
}

#[test]
fn halves_round_away_from_zero() {
    // 2 * 1.25 = 2.5
    let item = WorkItem::new("準備", 125_000.0);
    let est = estimate_duration(&item, rule("preparation"), ProjectScale::Medium, Season::Spring);
    assert_eq!(est.duration_days, 3);

    // 3 * 1.5 = 4.5
    let item = WorkItem::new("芝生", 150_000.0);
    let est = estimate_duration(&item, rule("lawn"), ProjectScale::Medium, Season::Autumn);
    assert_eq!(est.duration_days, 5);
}

#[test]
fn duration_never_drops_below_one_day() {
    static TINY: CategoryRule = CategoryRule {
        key: "tiny",
        display_name: "tiny",
        base_duration_days: 1,
        order: 99,
        keywords: &["tiny"],
        color: "#000000",
    };
    // 1 * 0.5 * 0.8 * 1.0 = 0.4 rounds to 0
    let item = WorkItem::new("tiny", 0.0);
    let est = estimate_duration(&item, &TINY, ProjectScale::Small, Season::Spring);
    assert_eq!(est.duration_days, 1);
}

#[test]
fn scale_thresholds_are_inclusive() {
    assert_eq!(determine_scale(0.0), ProjectScale::Small);
    assert_eq!(determine_scale(500_000.0), ProjectScale::Small);
    assert_eq!(determine_scale(500_001.0), ProjectScale::Medium);
    assert_eq!(determine_scale(2_000_000.0), ProjectScale::Medium);
    assert_eq!(determine_scale(2_000_001.0), ProjectScale::Large);
    assert_eq!(determine_scale(5_000_000.0), ProjectScale::Large);
    assert_eq!(determine_scale(5_000_001.0), ProjectScale::Xlarge);
}

#[test]
fn season_follows_month() {
    assert_eq!(determine_season(d(2024, 1, 1)), Season::Winter);
    assert_eq!(determine_season(d(2024, 2, 29)), Season::Winter);
    assert_eq!(determine_season(d(2024, 3, 1)), Season::Spring);
    assert_eq!(determine_season(d(2024, 5, 31)), Season::Spring);
    assert_eq!(determine_season(d(2024, 6, 1)), Season::Summer);
    assert_eq!(determine_season(d(2024, 8, 31)), Season::Summer);
    assert_eq!(determine_season(d(2024, 9, 1)), Season::Autumn);
    assert_eq!(determine_season(d(2024, 11, 30)), Season::Autumn);
    assert_eq!(determine_season(d(2024, 12, 1)), Season::Winter);
}

#[test]
fn factors_match_scale_and_season_tables() {
    assert_eq!(ProjectScale::Small.factor(), 0.8);
    assert_eq!(ProjectScale::Medium.factor(), 1.0);
    assert_eq!(ProjectScale::Large.factor(), 1.3);
    assert_eq!(ProjectScale::Xlarge.factor(), 1.6);
    assert_eq!(Season::Spring.factor(), 1.0);
    assert_eq!(Season::Summer.factor(), 1.2);
    assert_eq!(Season::Autumn.factor(), 1.0);
    assert_eq!(Season::Winter.factor(), 1.4);
}
