use crate::task::ProcessTask;
use std::collections::HashMap;

/// Categories that follow the ground being prepared and built on.
const AFTER_SITEWORK: [&str; 2] = ["planting", "lawn"];
const SITEWORK: [&str; 2] = ["earthwork", "structures"];

/// Derive each task's dependencies from category priority plus site rules.
///
/// Tasks come back sorted by `order`. Each task depends on its immediate
/// predecessor in that ordering; planting and lawn additionally wait for
/// earthwork and structures, and finishing waits for planting. Rules only ever
/// add dependencies, never on the task itself and never twice.
pub fn build_dependencies(mut tasks: Vec<ProcessTask>) -> Vec<ProcessTask> {
    tasks.sort_by_key(|task| task.order);

    for idx in 1..tasks.len() {
        let previous = tasks[idx - 1].id.clone();
        tasks[idx].add_dependency(&previous);
    }

    let id_by_category: HashMap<String, String> = tasks
        .iter()
        .map(|task| (task.category.clone(), task.id.clone()))
        .collect();

    for task in tasks.iter_mut() {
        let required: &[&str] = if AFTER_SITEWORK.contains(&task.category.as_str()) {
            &SITEWORK
        } else if task.category == "finishing" {
            &["planting"]
        } else {
            &[]
        };

        for category in required {
            if let Some(id) = id_by_category.get(*category) {
                task.add_dependency(id);
            }
        }
    }

    tasks
}
