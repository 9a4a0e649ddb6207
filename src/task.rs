use crate::category::CategoryRule;
use crate::classifier::Classification;
use crate::duration::DurationEstimate;
use crate::error::{Result, ScheduleError};
use crate::estimate::WorkItem;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A schedulable unit derived from one or more work items of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessTask {
    /// `process_<index>` before consolidation, the category key after.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub color: String,
    pub duration_days: i64,
    pub order: u32,
    pub source_item_ids: Vec<usize>,
    pub amount: f64,
    pub confidence: f64,
    pub dependencies: Vec<String>,
    pub progress: u8,
    pub status: TaskStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_parallel: bool,
    pub has_conflict: bool,
}

impl ProcessTask {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: &CategoryRule,
        duration_days: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.key.to_string(),
            color: category.color.to_string(),
            duration_days,
            order: category.order,
            source_item_ids: Vec::new(),
            amount: 0.0,
            confidence: 0.0,
            dependencies: Vec::new(),
            progress: 0,
            status: TaskStatus::Pending,
            start_date: None,
            end_date: None,
            is_parallel: false,
            has_conflict: false,
        }
    }

    /// Build the pre-consolidation task for the item at `index`.
    pub fn from_work_item(
        index: usize,
        item: &WorkItem,
        classification: &Classification,
        duration: &DurationEstimate,
    ) -> Self {
        let mut task = Self::new(
            format!("process_{index}"),
            item.name.clone(),
            classification.category,
            duration.duration_days,
        );
        task.description = item.description.clone().unwrap_or_default();
        task.source_item_ids = vec![index];
        task.amount = item.amount;
        task.confidence = classification.confidence;
        task
    }

    pub fn depends_on(&self, task_id: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == task_id)
    }

    /// Add a dependency unless it is already present or points at this task.
    pub fn add_dependency(&mut self, task_id: &str) {
        if task_id != self.id && !self.depends_on(task_id) {
            self.dependencies.push(task_id.to_string());
        }
    }

    /// Place the task on `start`; the end date is inclusive.
    ///
    /// Fails without touching the task when the end date is not representable.
    pub fn place(&mut self, start: NaiveDate) -> Result<()> {
        let end = start
            .checked_add_signed(Duration::days(self.duration_days - 1))
            .ok_or(ScheduleError::StartDateOutOfRange { start })?;
        self.start_date = Some(start);
        self.end_date = Some(end);
        Ok(())
    }

    pub fn is_scheduled(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }
}
