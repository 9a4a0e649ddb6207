use crate::duration::Season;
use crate::task::ProcessTask;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tasks longer than this are flagged for sub-division.
pub const LONG_TASK_THRESHOLD_DAYS: i64 = 7;
/// More sequential tasks than this triggers the parallelism suggestion.
pub const SEQUENTIAL_TASK_THRESHOLD: usize = 5;
const SEQUENTIAL_EXAMPLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Warning,
    Suggestion,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    pub affected_task_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_tasks: usize,
    pub category_count: usize,
    pub parallel_process_count: usize,
    pub conflict_count: usize,
    pub average_duration: f64,
    pub recommendations: Vec<Recommendation>,
}

impl ScheduleSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tasks={}", self.total_tasks));
        parts.push(format!("categories={}", self.category_count));
        parts.push(format!("parallel={}", self.parallel_process_count));
        if self.conflict_count > 0 {
            parts.push(format!("conflicts={}", self.conflict_count));
        }
        parts.push(format!("avg_days={:.1}", self.average_duration));
        if !self.recommendations.is_empty() {
            parts.push(format!("recommendations={}", self.recommendations.len()));
        }
        parts.join(", ")
    }
}

/// Counts plus non-blocking advisories for a finished schedule.
pub fn summarize(tasks: &[ProcessTask], season: Season) -> ScheduleSummary {
    let category_count = tasks
        .iter()
        .map(|task| task.category.as_str())
        .collect::<HashSet<_>>()
        .len();
    let parallel_process_count = tasks.iter().filter(|task| task.is_parallel).count();
    let conflict_count = tasks.iter().filter(|task| task.has_conflict).count();
    let average_duration = if tasks.is_empty() {
        0.0
    } else {
        tasks.iter().map(|task| task.duration_days).sum::<i64>() as f64 / tasks.len() as f64
    };

    ScheduleSummary {
        total_tasks: tasks.len(),
        category_count,
        parallel_process_count,
        conflict_count,
        average_duration,
        recommendations: recommendations(tasks, season),
    }
}

pub fn recommendations(tasks: &[ProcessTask], season: Season) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let long_tasks: Vec<String> = tasks
        .iter()
        .filter(|task| task.duration_days > LONG_TASK_THRESHOLD_DAYS)
        .map(|task| task.id.clone())
        .collect();
    if !long_tasks.is_empty() {
        out.push(Recommendation {
            kind: RecommendationKind::Warning,
            message: format!(
                "{} task(s) run longer than {} days; consider splitting them into smaller phases.",
                long_tasks.len(),
                LONG_TASK_THRESHOLD_DAYS
            ),
            affected_task_ids: long_tasks,
        });
    }

    let sequential: Vec<&ProcessTask> = tasks.iter().filter(|task| !task.is_parallel).collect();
    if sequential.len() > SEQUENTIAL_TASK_THRESHOLD {
        out.push(Recommendation {
            kind: RecommendationKind::Suggestion,
            message: format!(
                "{} tasks run one after another; look for work that can proceed in parallel to shorten the schedule.",
                sequential.len()
            ),
            affected_task_ids: sequential
                .iter()
                .take(SEQUENTIAL_EXAMPLES)
                .map(|task| task.id.clone())
                .collect(),
        });
    }

    if season == Season::Winter {
        out.push(Recommendation {
            kind: RecommendationKind::Info,
            message: "Winter start: snow and frozen ground may delay outdoor work; keep slack in the schedule."
                .to_string(),
            affected_task_ids: Vec::new(),
        });
    }

    out
}
