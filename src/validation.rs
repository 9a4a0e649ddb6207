use crate::error::{Result, ScheduleError};
use crate::estimate::Estimate;
use crate::schedule::ScheduleResult;
use crate::task::ProcessTask;
use std::collections::HashSet;

/// Reject inputs the generator cannot schedule meaningfully.
pub fn validate_estimate(estimate: &Estimate) -> Result<()> {
    if estimate.items.is_empty() {
        return Err(ScheduleError::NoWorkItems);
    }

    for (index, item) in estimate.items.iter().enumerate() {
        if !item.amount.is_finite() {
            return Err(ScheduleError::NonFiniteAmount {
                index,
                name: item.name.clone(),
            });
        }
        if item.amount < 0.0 {
            return Err(ScheduleError::NegativeAmount {
                index,
                name: item.name.clone(),
                amount: item.amount,
            });
        }
    }

    if let Some(total) = estimate.total_amount {
        if !total.is_finite() || total < 0.0 {
            return Err(ScheduleError::InvalidTotalAmount(total));
        }
    }

    Ok(())
}

/// Check the invariants every generated task list holds.
pub fn validate_scheduled_tasks(tasks: &[ProcessTask]) -> Result<()> {
    let mut ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !ids.insert(task.id.as_str()) {
            return Err(ScheduleError::InvalidSchedule(format!(
                "duplicate task id {}",
                task.id
            )));
        }
    }

    for task in tasks {
        if task.duration_days < 1 {
            return Err(ScheduleError::InvalidSchedule(format!(
                "task {} has duration {} (must be at least 1 day)",
                task.id, task.duration_days
            )));
        }
        if task.progress > 100 {
            return Err(ScheduleError::InvalidSchedule(format!(
                "task {} has progress {} (must be between 0 and 100)",
                task.id, task.progress
            )));
        }
        for dep in &task.dependencies {
            if !ids.contains(dep.as_str()) {
                return Err(ScheduleError::InvalidSchedule(format!(
                    "task {} depends on unknown task {}",
                    task.id, dep
                )));
            }
        }
        match (task.start_date, task.end_date) {
            (Some(start), Some(end)) if end >= start => {}
            (Some(start), Some(end)) => {
                return Err(ScheduleError::InvalidSchedule(format!(
                    "task {} ends {} before it starts {}",
                    task.id, end, start
                )));
            }
            _ => {
                return Err(ScheduleError::InvalidSchedule(format!(
                    "task {} has not been scheduled",
                    task.id
                )));
            }
        }
    }

    Ok(())
}

/// Task invariants plus a critical path that only names scheduled tasks.
pub fn validate_schedule(result: &ScheduleResult) -> Result<()> {
    validate_scheduled_tasks(&result.tasks)?;
    for id in &result.metadata.critical_path {
        if result.find_task(id).is_none() {
            return Err(ScheduleError::InvalidSchedule(format!(
                "critical path names unknown task {id}"
            )));
        }
    }
    Ok(())
}
