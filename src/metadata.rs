use crate::duration::{ProjectScale, Season};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub project_scale: ProjectScale,
    pub season: Season,
    pub project_start_date: NaiveDate,
    pub total_amount: f64,
    /// Sum of task durations, not the calendar span.
    pub total_duration_days: i64,
    pub estimated_end_date: NaiveDate,
    pub parallel_process_count: usize,
    pub critical_path: Vec<String>,
    pub include_weekends: bool,
    pub buffer_days: u32,
    pub generated_at: DateTime<Utc>,
}
