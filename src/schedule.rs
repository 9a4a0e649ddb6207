use crate::calculations::consolidation::consolidate;
use crate::calculations::critical_path::finder_for;
use crate::calculations::forward_pass::schedule;
use crate::classifier::classify;
use crate::clock::{Clock, SystemClock};
use crate::duration::{ProjectScale, Season, determine_scale, determine_season, estimate_duration};
use crate::error::Result;
use crate::estimate::Estimate;
use crate::graph::builder::build_dependencies;
use crate::metadata::ScheduleMetadata;
use crate::options::ScheduleOptions;
use crate::summary::{ScheduleSummary, summarize};
use crate::task::ProcessTask;
use crate::validation::validate_estimate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Output of one generate call. Owned outright; nothing is shared between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// In placement order.
    pub tasks: Vec<ProcessTask>,
    pub metadata: ScheduleMetadata,
    pub summary: ScheduleSummary,
}

impl ScheduleResult {
    pub fn find_task(&self, task_id: &str) -> Option<&ProcessTask> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn critical_path_tasks(&self) -> Vec<&ProcessTask> {
        self.metadata
            .critical_path
            .iter()
            .filter_map(|id| self.find_task(id))
            .collect()
    }

    /// Calendar days from project start to the last end date, inclusive.
    pub fn calendar_span_days(&self) -> i64 {
        (self.metadata.estimated_end_date - self.metadata.project_start_date).num_days() + 1
    }
}

/// One task per work item, classified and sized, before consolidation.
pub fn plan_tasks(estimate: &Estimate, scale: ProjectScale, season: Season) -> Vec<ProcessTask> {
    estimate
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let classification = classify(item);
            let duration = estimate_duration(item, classification.category, scale, season);
            debug!(
                item = index,
                name = %item.name,
                category = classification.category.key,
                confidence = classification.confidence,
                duration = duration.duration_days,
                "classified work item"
            );
            ProcessTask::from_work_item(index, item, &classification, &duration)
        })
        .collect()
}

pub struct ScheduleGenerator<C = SystemClock> {
    clock: C,
}

impl ScheduleGenerator<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for ScheduleGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ScheduleGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Run the whole pipeline: classify, size, consolidate, link, place,
    /// then derive the critical path and summary.
    #[instrument(skip_all, fields(items = estimate.items.len()))]
    pub fn generate(&self, estimate: &Estimate, options: &ScheduleOptions) -> Result<ScheduleResult> {
        validate_estimate(estimate)?;

        let project_start = options
            .project_start_date
            .unwrap_or_else(|| self.clock.today());
        let total_amount = estimate.effective_total();
        let scale = determine_scale(total_amount);
        let season = determine_season(project_start);

        let planned = plan_tasks(estimate, scale, season);
        let linked = build_dependencies(consolidate(planned));
        let tasks = schedule(&linked, project_start)?;

        let critical_path = finder_for(options.critical_path).find(&tasks);
        let summary = summarize(&tasks, season);

        let estimated_end_date = tasks
            .iter()
            .filter_map(|task| task.end_date)
            .max()
            .unwrap_or(project_start);

        let metadata = ScheduleMetadata {
            project_scale: scale,
            season,
            project_start_date: project_start,
            total_amount,
            total_duration_days: tasks.iter().map(|task| task.duration_days).sum(),
            estimated_end_date,
            parallel_process_count: summary.parallel_process_count,
            critical_path,
            include_weekends: options.include_weekends,
            buffer_days: options.buffer_days,
            generated_at: self.clock.now(),
        };

        info!(
            tasks = tasks.len(),
            scale = %scale,
            season = %season,
            end = %estimated_end_date,
            conflicts = summary.conflict_count,
            "generated schedule"
        );

        Ok(ScheduleResult {
            tasks,
            metadata,
            summary,
        })
    }

    /// Schedule several estimates concurrently; results keep input order.
    pub fn generate_many(
        &self,
        estimates: &[Estimate],
        options: &ScheduleOptions,
    ) -> Vec<Result<ScheduleResult>>
    where
        C: Sync,
    {
        estimates
            .par_iter()
            .map(|estimate| self.generate(estimate, options))
            .collect()
    }
}

pub fn generate_schedule(estimate: &Estimate, options: &ScheduleOptions) -> Result<ScheduleResult> {
    ScheduleGenerator::new().generate(estimate, options)
}
