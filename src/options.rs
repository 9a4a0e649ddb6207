use crate::error::{Result, ScheduleError};
use crate::estimate::{Estimate, WorkItem};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Which longest-path search produces `metadata.critical_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum CriticalPathStrategy {
    /// Enumerate every root-to-sink path. `max_paths` caps the enumeration.
    Exhaustive {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_paths: Option<usize>,
    },
    /// Topological longest path over the dependency DAG.
    Dag,
}

impl Default for CriticalPathStrategy {
    fn default() -> Self {
        CriticalPathStrategy::Exhaustive { max_paths: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleOptions {
    /// `None` means today, as reported by the generator's clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_start_date: Option<NaiveDate>,
    /// Reserved; echoed into metadata but not used for placement.
    pub include_weekends: bool,
    /// Reserved; echoed into metadata but not used for placement.
    pub buffer_days: u32,
    pub critical_path: CriticalPathStrategy,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            project_start_date: None,
            include_weekends: true,
            buffer_days: 0,
            critical_path: CriticalPathStrategy::default(),
        }
    }
}

impl ScheduleOptions {
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            project_start_date: Some(date),
            ..Self::default()
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Parse a caller-supplied start date: `YYYY-MM-DD`, or an RFC 3339
/// timestamp whose calendar date is used as-is.
pub fn parse_project_start_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| ScheduleError::InvalidStartDate {
            value: value.to_string(),
        })
}

/// Options as they arrive over the wire. Every field overrides a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_weekends: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_path: Option<CriticalPathStrategy>,
}

impl RequestOptions {
    pub fn resolve(self, defaults: &ScheduleOptions) -> Result<ScheduleOptions> {
        let project_start_date = match self.project_start_date.as_deref() {
            Some(raw) => Some(parse_project_start_date(raw)?),
            None => defaults.project_start_date,
        };
        Ok(ScheduleOptions {
            project_start_date,
            include_weekends: self.include_weekends.unwrap_or(defaults.include_weekends),
            buffer_days: self.buffer_days.unwrap_or(defaults.buffer_days),
            critical_path: self.critical_path.unwrap_or(defaults.critical_path),
        })
    }
}

/// Wire form of a generate call, used by the CLI `load` command and the HTTP API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub items: Vec<WorkItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub options: RequestOptions,
}

impl ScheduleRequest {
    pub fn into_parts(self, defaults: &ScheduleOptions) -> Result<(Estimate, ScheduleOptions)> {
        let options = self.options.resolve(defaults)?;
        let estimate = Estimate {
            items: self.items,
            total_amount: self.total_amount,
        };
        Ok((estimate, options))
    }
}
