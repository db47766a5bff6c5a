use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::intensity::{IntensityLevel, IntensityReport, VolumeSource};

pub const SCHEMA_VERSION: u32 = 1;

/// One calendar cell that must receive commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetDate {
    pub date: NaiveDate,
    /// Weekday offset, 0 = Sunday.
    pub row: u32,
    /// Week offset from the pattern start.
    pub column: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub word: String,
    pub anchor: NaiveDate,
    pub current_week_start: NaiveDate,
    pub window_start: NaiveDate,
    pub pattern_start: NaiveDate,
    pub word_width: u32,
    pub dropped_cells: usize,
    pub targets: Vec<TargetDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub commits_per_day: u32,
    pub intensity_level: IntensityLevel,
    pub source: VolumeSource,
    pub report: Option<IntensityReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmitSummary {
    pub days_total: usize,
    pub days_succeeded: usize,
    pub days_failed: usize,
    /// Commits actually created, including those of partially failed days.
    pub commits_created: usize,
    pub failed_dates: Vec<NaiveDate>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaintOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub word: String,
    pub anchor: NaiveDate,
    pub dry_run: bool,
    pub commits_per_day: u32,
    pub intensity_level: IntensityLevel,
    pub dropped_cells: usize,
    pub summary: EmitSummary,
}
