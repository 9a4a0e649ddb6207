use crate::error::{Result, ScheduleError};
use crate::schedule::ScheduleResult;
use crate::task::ProcessTask;
use crate::validation::validate_schedule;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub mod file;

pub use file::{load_estimate_from_json, load_request_from_json, save_schedule_export};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ScheduleError::UnsupportedFormat(value.to_string())),
        }
    }
}

/// Fixed CSV layout consumed by spreadsheet users downstream.
#[derive(Serialize)]
struct TaskCsvRecord<'a> {
    name: &'a str,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
    #[serde(rename = "durationDays")]
    duration_days: i64,
    category: &'a str,
    amount: f64,
    progress: u8,
}

impl<'a> From<&'a ProcessTask> for TaskCsvRecord<'a> {
    fn from(task: &'a ProcessTask) -> Self {
        Self {
            name: &task.name,
            start_date: format_date(task.start_date),
            end_date: format_date(task.end_date),
            duration_days: task.duration_days,
            category: &task.category,
            amount: task.amount,
            progress: task.progress,
        }
    }
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Render a schedule as pretty JSON or as CSV (one row per task, schedule order).
pub fn export_schedule_data(result: &ScheduleResult, format: ExportFormat) -> Result<String> {
    validate_schedule(result)?;

    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for task in &result.tasks {
                writer.serialize(TaskCsvRecord::from(task))?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|err| ScheduleError::Io(err.into_error()))?;
            String::from_utf8(bytes)
                .map_err(|err| ScheduleError::InvalidSchedule(format!("csv output is not utf-8: {err}")))
        }
    }
}
