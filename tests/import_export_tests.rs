use chrono::{NaiveDate, TimeZone, Utc};
use estimate_schedule::{
    CriticalPathStrategy, Estimate, ExportFormat, FixedClock, ScheduleError, ScheduleGenerator,
    ScheduleOptions, ScheduleResult, WorkItem, export_schedule_data, load_estimate_from_json,
    load_request_from_json, save_schedule_export,
};
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build_sample_schedule() -> ScheduleResult {
    let estimate = Estimate::new(vec![
        WorkItem::new("芝生張り", 150_000.0),
        WorkItem::new("高木植栽", 300_000.0).with_description("シマトネリコ"),
    ]);
    let generator =
        ScheduleGenerator::with_clock(FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()));
    generator
        .generate(&estimate, &ScheduleOptions::starting(d(2024, 5, 1)))
        .unwrap()
}

fn assert_same_schedule(a: &ScheduleResult, b: &ScheduleResult) {
    assert_eq!(a.tasks.len(), b.tasks.len());
    for (x, y) in a.tasks.iter().zip(&b.tasks) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.dependencies, y.dependencies);
        assert_eq!(x.start_date, y.start_date);
        assert_eq!(x.end_date, y.end_date);
        assert_eq!(x.source_item_ids, y.source_item_ids);
    }
    assert_eq!(a.metadata.critical_path, b.metadata.critical_path);
    assert_eq!(a.metadata.estimated_end_date, b.metadata.estimated_end_date);
    assert_eq!(a.metadata.generated_at, b.metadata.generated_at);
    assert_eq!(a.summary.total_tasks, b.summary.total_tasks);
}

#[test]
fn csv_export_has_fixed_header_and_one_row_per_task() {
    let result = build_sample_schedule();
    let csv_text = export_schedule_data(&result, ExportFormat::Csv).unwrap();

    let header = csv_text.lines().next().unwrap();
    assert_eq!(
        header,
        "name,startDate,endDate,durationDays,category,amount,progress"
    );

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), result.tasks.len());

    for (row, task) in rows.iter().zip(&result.tasks) {
        assert_eq!(&row[0], task.name);
        assert_eq!(row[1], task.start_date.unwrap().format("%Y-%m-%d").to_string());
        assert_eq!(row[2], task.end_date.unwrap().format("%Y-%m-%d").to_string());
        assert_eq!(row[3].parse::<i64>().unwrap(), task.duration_days);
        assert_eq!(&row[4], task.category);
        assert_eq!(row[5].parse::<f64>().unwrap(), task.amount);
        assert_eq!(&row[6], "0");
    }

    // planting precedes lawn in category order
    assert_eq!(&rows[0][4], "planting");
    assert_eq!(&rows[1][4], "lawn");
}

#[test]
fn json_export_round_trips() {
    let result = build_sample_schedule();
    let json = export_schedule_data(&result, ExportFormat::Json).unwrap();
    let parsed: ScheduleResult = serde_json::from_str(&json).unwrap();
    assert_same_schedule(&parsed, &result);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["season"], "spring");
    assert_eq!(value["metadata"]["project_scale"], "small");
    assert_eq!(value["tasks"][0]["description"], "シマトネリコ");
}

#[test]
fn export_refuses_inconsistent_schedules() {
    let mut result = build_sample_schedule();
    result.tasks[1].dependencies.push("ghost".into());
    let err = export_schedule_data(&result, ExportFormat::Csv).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidSchedule(_)));

    let mut result = build_sample_schedule();
    result.metadata.critical_path.push("ghost".into());
    let err = export_schedule_data(&result, ExportFormat::Json).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidSchedule(_)));
}

#[test]
fn export_format_parsing() {
    assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
    assert_eq!(ExportFormat::from_str(" CSV ").unwrap(), ExportFormat::Csv);
    let err = ExportFormat::from_str("xml").unwrap_err();
    assert!(matches!(err, ScheduleError::UnsupportedFormat(ref f) if f == "xml"));
    assert!(err.is_input_error());
    assert_eq!(ExportFormat::Csv.content_type(), "text/csv; charset=utf-8");
}

#[test]
fn save_export_writes_file() {
    let result = build_sample_schedule();
    let tmp = NamedTempFile::new().unwrap();

    save_schedule_export(&result, ExportFormat::Csv, tmp.path()).unwrap();
    let written = std::fs::read_to_string(tmp.path()).unwrap();
    assert_eq!(written, export_schedule_data(&result, ExportFormat::Csv).unwrap());

    save_schedule_export(&result, ExportFormat::Json, tmp.path()).unwrap();
    let written = std::fs::read_to_string(tmp.path()).unwrap();
    let parsed: ScheduleResult = serde_json::from_str(&written).unwrap();
    assert_same_schedule(&parsed, &result);
}

#[test]
fn load_estimate_and_request_from_json() {
    let mut estimate_file = NamedTempFile::new().unwrap();
    write!(
        estimate_file,
        r#"{{"items": [{{"name": "芝生張り", "amount": 150000}}, {{"name": "雨水排水", "description": "U字溝", "amount": 90000}}], "total_amount": 1000000}}"#
    )
    .unwrap();
    let estimate = load_estimate_from_json(estimate_file.path()).unwrap();
    assert_eq!(estimate.items.len(), 2);
    assert_eq!(estimate.items[1].description.as_deref(), Some("U字溝"));
    assert_eq!(estimate.total_amount, Some(1_000_000.0));

    let mut request_file = NamedTempFile::new().unwrap();
    write!(
        request_file,
        r#"{{"items": [{{"name": "芝生張り", "amount": 150000}}], "options": {{"project_start_date": "2024-01-01"}}}}"#
    )
    .unwrap();
    let request = load_request_from_json(request_file.path()).unwrap();
    let (estimate, options) = request.into_parts(&ScheduleOptions::default()).unwrap();
    assert_eq!(estimate.items[0].name, "芝生張り");
    assert_eq!(options.project_start_date, Some(d(2024, 1, 1)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    let err = load_estimate_from_json(file.path()).unwrap_err();
    assert!(matches!(err, ScheduleError::Serialization(_)));

    let err = load_estimate_from_json("/nonexistent/estimate.json").unwrap_err();
    assert!(matches!(err, ScheduleError::Io(_)));
}

#[test]
fn options_load_with_defaults_for_missing_fields() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"critical_path": {{"strategy": "exhaustive", "max_paths": 50}}}}"#).unwrap();
    let options = ScheduleOptions::from_json_file(file.path()).unwrap();
    assert_eq!(
        options.critical_path,
        CriticalPathStrategy::Exhaustive { max_paths: Some(50) }
    );
    assert!(options.include_weekends);
    assert_eq!(options.buffer_days, 0);
    assert_eq!(options.project_start_date, None);
}
