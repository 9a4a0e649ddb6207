//! Duration model: category base days scaled by item price, project size and season.

use crate::category::CategoryRule;
use crate::estimate::WorkItem;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount treated as one duration-neutral unit.
pub const AMOUNT_UNIT: f64 = 100_000.0;
pub const MIN_AMOUNT_FACTOR: f64 = 0.5;
pub const MAX_AMOUNT_FACTOR: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectScale {
    Small,
    Medium,
    Large,
    Xlarge,
}

impl ProjectScale {
    pub fn factor(self) -> f64 {
        match self {
            ProjectScale::Small => 0.8,
            ProjectScale::Medium => 1.0,
            ProjectScale::Large => 1.3,
            ProjectScale::Xlarge => 1.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectScale::Small => "small",
            ProjectScale::Medium => "medium",
            ProjectScale::Large => "large",
            ProjectScale::Xlarge => "xlarge",
        }
    }
}

impl fmt::Display for ProjectScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn factor(self) -> f64 {
        match self {
            Season::Spring => 1.0,
            Season::Summer => 1.2,
            Season::Autumn => 1.0,
            Season::Winter => 1.4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive upper bounds: 500,000 is still small, 500,001 is medium.
pub fn determine_scale(total_amount: f64) -> ProjectScale {
    if total_amount <= 500_000.0 {
        ProjectScale::Small
    } else if total_amount <= 2_000_000.0 {
        ProjectScale::Medium
    } else if total_amount <= 5_000_000.0 {
        ProjectScale::Large
    } else {
        ProjectScale::Xlarge
    }
}

pub fn determine_season(date: NaiveDate) -> Season {
    match date.month() {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationFactors {
    pub base_duration_days: i64,
    pub amount_factor: f64,
    pub scale_factor: f64,
    pub season_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationEstimate {
    pub duration_days: i64,
    pub factors: DurationFactors,
}

pub fn amount_factor(amount: f64) -> f64 {
    (amount / AMOUNT_UNIT).clamp(MIN_AMOUNT_FACTOR, MAX_AMOUNT_FACTOR)
}

/// `max(1, round(base * amount * scale * season))`.
///
/// Rounding is `f64::round`, i.e. half away from zero: 4.5 becomes 5.
pub fn estimate_duration(
    item: &WorkItem,
    category: &CategoryRule,
    scale: ProjectScale,
    season: Season,
) -> DurationEstimate {
    let factors = DurationFactors {
        base_duration_days: category.base_duration_days,
        amount_factor: amount_factor(item.amount),
        scale_factor: scale.factor(),
        season_factor: season.factor(),
    };
    let raw = factors.base_duration_days as f64
        * factors.amount_factor
        * factors.scale_factor
        * factors.season_factor;

    DurationEstimate {
        duration_days: (raw.round() as i64).max(1),
        factors,
    }
}
