use crate::category::PARALLEL_GROUPS;
use crate::error::{Result, ScheduleError};
use crate::task::ProcessTask;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;
use tracing::{debug, warn};

/// What one scheduling step placed.
#[derive(Debug, Clone, PartialEq)]
enum Placement {
    Parallel(Vec<usize>),
    Sequential(usize),
    Conflict(usize),
}

/// Constructive scheduler: repeatedly places ready tasks at a moving cursor.
///
/// All state (`completed`, `cursor`) lives in this value, so separate passes
/// never share anything.
pub struct ForwardPass<'a> {
    tasks: &'a [ProcessTask],
    placed: Vec<bool>,
    completed: HashSet<&'a str>,
    project_start: NaiveDate,
    /// `None` once the cursor has moved past the last representable date.
    cursor: Option<NaiveDate>,
}

impl<'a> ForwardPass<'a> {
    pub fn new(tasks: &'a [ProcessTask], project_start: NaiveDate) -> Self {
        Self {
            tasks,
            placed: vec![false; tasks.len()],
            completed: HashSet::with_capacity(tasks.len()),
            project_start,
            cursor: Some(project_start),
        }
    }

    /// Run to completion. Returns the tasks in placement order with dates set.
    ///
    /// Always terminates: when nothing is ready the lowest-order remaining task
    /// is forced in and flagged `has_conflict`. Fails only when a placement
    /// would run past the last date chrono can represent.
    pub fn execute(mut self) -> Result<Vec<ProcessTask>> {
        let tasks = self.tasks;
        let mut scheduled: Vec<ProcessTask> = Vec::with_capacity(tasks.len());

        while let Some(placement) = self.next_placement() {
            let start = self.cursor.ok_or_else(|| self.out_of_range())?;

            let (members, is_parallel, has_conflict) = match placement {
                Placement::Parallel(members) => (members, true, false),
                Placement::Sequential(idx) => (vec![idx], false, false),
                Placement::Conflict(idx) => {
                    warn!(
                        task = %tasks[idx].id,
                        dependencies = ?tasks[idx].dependencies,
                        "dependency deadlock, forcing task onto schedule"
                    );
                    (vec![idx], false, true)
                }
            };

            let mut advance = 0;
            for idx in members {
                let mut task = tasks[idx].clone();
                task.place(start).map_err(|_| self.out_of_range())?;
                task.is_parallel = is_parallel;
                task.has_conflict = has_conflict;
                advance = advance.max(task.duration_days);
                debug!(
                    task = %task.id,
                    start = %start,
                    duration = task.duration_days,
                    is_parallel,
                    "placed task"
                );
                self.placed[idx] = true;
                self.completed.insert(tasks[idx].id.as_str());
                scheduled.push(task);
            }
            self.cursor = start.checked_add_signed(Duration::days(advance));
        }

        Ok(scheduled)
    }

    fn out_of_range(&self) -> ScheduleError {
        ScheduleError::StartDateOutOfRange {
            start: self.project_start,
        }
    }

    /// `None` once every task has been placed.
    fn next_placement(&self) -> Option<Placement> {
        let ready = self.ready_set();

        if let Some(batch) = self.parallel_batch(&ready) {
            return Some(Placement::Parallel(batch));
        }

        if let Some(&idx) = ready.iter().min_by_key(|&&idx| self.tasks[idx].order) {
            return Some(Placement::Sequential(idx));
        }

        self.unplaced()
            .min_by_key(|&idx| self.tasks[idx].order)
            .map(Placement::Conflict)
    }

    fn unplaced(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.tasks.len()).filter(|&idx| !self.placed[idx])
    }

    /// Unplaced tasks whose dependencies are all completed, in input order.
    fn ready_set(&self) -> Vec<usize> {
        self.unplaced()
            .filter(|&idx| {
                self.tasks[idx]
                    .dependencies
                    .iter()
                    .all(|dep| self.completed.contains(dep.as_str()))
            })
            .collect()
    }

    /// First declared group with two or more ready members, ordered by `order`.
    fn parallel_batch(&self, ready: &[usize]) -> Option<Vec<usize>> {
        PARALLEL_GROUPS.iter().find_map(|group| {
            let mut members: Vec<usize> = ready
                .iter()
                .copied()
                .filter(|&idx| group.contains(&self.tasks[idx].category.as_str()))
                .collect();
            if members.len() >= 2 {
                members.sort_by_key(|&idx| self.tasks[idx].order);
                Some(members)
            } else {
                None
            }
        })
    }
}

/// Place every task starting at `project_start`.
pub fn schedule(tasks: &[ProcessTask], project_start: NaiveDate) -> Result<Vec<ProcessTask>> {
    ForwardPass::new(tasks, project_start).execute()
}
