use super::{ExportFormat, export_schedule_data};
use crate::error::Result;
use crate::estimate::Estimate;
use crate::options::ScheduleRequest;
use crate::schedule::ScheduleResult;
use std::fs::{self, File};
use std::path::Path;

pub fn save_schedule_export<P: AsRef<Path>>(
    result: &ScheduleResult,
    format: ExportFormat,
    path: P,
) -> Result<()> {
    let rendered = export_schedule_data(result, format)?;
    fs::write(path, rendered)?;
    Ok(())
}

pub fn load_estimate_from_json<P: AsRef<Path>>(path: P) -> Result<Estimate> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

/// Estimate fields plus an optional `options` object.
pub fn load_request_from_json<P: AsRef<Path>>(path: P) -> Result<ScheduleRequest> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}
