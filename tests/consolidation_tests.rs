use estimate_schedule::calculations::consolidation::DESCRIPTION_SEPARATOR;
use estimate_schedule::{ProcessTask, category_rule, consolidate};

fn item_task(index: usize, category: &str, duration: i64, amount: f64, description: &str) -> ProcessTask {
    let rule = category_rule(category).unwrap();
    let mut task = ProcessTask::new(format!("process_{index}"), format!("item {index}"), rule, duration);
    task.source_item_ids = vec![index];
    task.amount = amount;
    task.description = description.to_string();
    task.confidence = 0.5;
    task
}

#[test]
fn groups_by_category_in_first_seen_order() {
    let merged = consolidate(vec![
        item_task(0, "lawn", 3, 100_000.0, "front yard"),
        item_task(1, "planting", 4, 200_000.0, ""),
        item_task(2, "lawn", 2, 50_000.0, "back yard"),
    ]);

    assert_eq!(merged.len(), 2);
    let lawn = &merged[0];
    assert_eq!(lawn.id, "lawn");
    assert_eq!(lawn.name, "item 0");
    assert_eq!(lawn.duration_days, 5);
    assert_eq!(lawn.amount, 150_000.0);
    assert_eq!(lawn.source_item_ids, vec![0, 2]);
    assert_eq!(
        lawn.description,
        format!("front yard{DESCRIPTION_SEPARATOR}back yard")
    );

    let planting = &merged[1];
    assert_eq!(planting.id, "planting");
    assert_eq!(planting.source_item_ids, vec![1]);
}

#[test]
fn empty_descriptions_are_skipped_when_joining() {
    let merged = consolidate(vec![
        item_task(0, "paving", 2, 10.0, ""),
        item_task(1, "paving", 2, 10.0, "interlocking"),
        item_task(2, "paving", 2, 10.0, ""),
        item_task(3, "paving", 2, 10.0, "curb"),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].description, "interlocking, curb");
    assert_eq!(merged[0].duration_days, 8);
    assert_eq!(merged[0].source_item_ids, vec![0, 1, 2, 3]);
}

#[test]
fn single_member_groups_keep_their_values() {
    let merged = consolidate(vec![item_task(7, "drainage", 6, 80_000.0, "pipe")]);
    assert_eq!(merged.len(), 1);
    let task = &merged[0];
    assert_eq!(task.id, "drainage");
    assert_eq!(task.duration_days, 6);
    assert_eq!(task.amount, 80_000.0);
    assert_eq!(task.description, "pipe");
    assert_eq!(task.confidence, 0.5);
    assert_eq!(task.order, category_rule("drainage").unwrap().order);
}

#[test]
fn consolidating_nothing_yields_nothing() {
    assert!(consolidate(Vec::new()).is_empty());
}
