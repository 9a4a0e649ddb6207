use crate::task::ProcessTask;
use std::collections::HashMap;

pub const DESCRIPTION_SEPARATOR: &str = ", ";

/// Merge tasks of the same category into one task per category.
///
/// Groups keep first-seen order. Durations, amounts and source items
/// accumulate; every other scalar comes from the first member. The merged
/// task takes the category key as its id.
pub fn consolidate(tasks: Vec<ProcessTask>) -> Vec<ProcessTask> {
    let mut merged: Vec<ProcessTask> = Vec::new();
    let mut index_by_category: HashMap<String, usize> = HashMap::new();

    for task in tasks {
        match index_by_category.get(&task.category) {
            Some(&idx) => {
                let group = &mut merged[idx];
                group.duration_days += task.duration_days;
                group.amount += task.amount;
                group.source_item_ids.extend(task.source_item_ids);
                if !task.description.is_empty() {
                    if !group.description.is_empty() {
                        group.description.push_str(DESCRIPTION_SEPARATOR);
                    }
                    group.description.push_str(&task.description);
                }
            }
            None => {
                let mut first = task;
                first.id = first.category.clone();
                index_by_category.insert(first.category.clone(), merged.len());
                merged.push(first);
            }
        }
    }

    merged
}
