//! Turns a priced landscaping estimate into a phased construction schedule.
//!
//! Work items are classified into categories, sized, merged per category,
//! linked by category priority and site rules, then placed on the calendar
//! with declared parallel work. A critical path and a short advisory summary
//! come back with the placed tasks.

pub mod calculations;
pub mod category;
pub mod classifier;
pub mod clock;
pub mod duration;
pub mod error;
pub mod estimate;
pub mod export;
pub mod graph;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod logging;
pub mod metadata;
pub mod options;
pub mod schedule;
pub mod summary;
pub mod task;
pub mod validation;

pub use calculations::consolidation::consolidate;
pub use calculations::critical_path::{
    CriticalPathFinder, DagLongestPath, ExhaustivePathSearch, critical_path_duration,
    find_critical_path,
};
pub use calculations::forward_pass::{ForwardPass, schedule};
pub use category::{CATEGORY_RULES, CategoryRule, PARALLEL_GROUPS, category_rule};
pub use classifier::{Classification, classify};
pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::{
    DurationEstimate, DurationFactors, ProjectScale, Season, determine_scale, determine_season,
    estimate_duration,
};
pub use error::{Result, ScheduleError};
pub use estimate::{Estimate, WorkItem};
pub use export::{
    ExportFormat, export_schedule_data, load_estimate_from_json, load_request_from_json,
    save_schedule_export,
};
pub use graph::DependencyGraph;
pub use graph::builder::build_dependencies;
pub use metadata::ScheduleMetadata;
pub use options::{
    CriticalPathStrategy, RequestOptions, ScheduleOptions, ScheduleRequest,
    parse_project_start_date,
};
pub use schedule::{ScheduleGenerator, ScheduleResult, generate_schedule, plan_tasks};
pub use summary::{Recommendation, RecommendationKind, ScheduleSummary, summarize};
pub use task::{ProcessTask, TaskStatus};
pub use validation::{validate_estimate, validate_schedule, validate_scheduled_tasks};
