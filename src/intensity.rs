use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::PaintConfig;
use crate::error::Result;

pub const MIN_DERIVED_PER_DAY: u32 = 10;
pub const MAX_DERIVED_PER_DAY: u32 = 25;

/// Source of historical commit counts.
pub trait HistoryStore {
    /// Commits reachable from any reference whose commit time is at or after `since`.
    fn count_commits_since(&self, since: DateTime<Utc>) -> Result<usize>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityReport {
    pub total_commits: usize,
    pub window_days: u32,
    pub average_per_day: f64,
    pub multiplier: f64,
    pub recommended: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VolumeSource {
    Derived,
    AutoAdjustDisabled,
    NoHistory,
    QueryFailed { error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
}

impl IntensityLevel {
    pub fn for_volume(per_day: u32) -> Self {
        match per_day {
            0..=9 => IntensityLevel::Low,
            10..=19 => IntensityLevel::Medium,
            _ => IntensityLevel::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "low",
            IntensityLevel::Medium => "medium",
            IntensityLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeDecision {
    pub per_day: u32,
    pub source: VolumeSource,
    pub report: Option<IntensityReport>,
}

impl VolumeDecision {
    pub fn level(&self) -> IntensityLevel {
        IntensityLevel::for_volume(self.per_day)
    }
}

/// Clamp a multiplied daily average into the derived range.
pub fn recommend(average_per_day: f64, multiplier: f64) -> u32 {
    let raw = (average_per_day * multiplier).round();
    let raw = if raw.is_finite() && raw > 0.0 { raw as u32 } else { 0 };
    raw.clamp(MIN_DERIVED_PER_DAY, MAX_DERIVED_PER_DAY)
}

/// `Ok(None)` when the window holds no commits.
pub fn analyze_intensity(
    history: &dyn HistoryStore,
    window_days: u32,
    multiplier: f64,
    now: DateTime<Utc>,
) -> Result<Option<IntensityReport>> {
    let since = now - Duration::days(window_days as i64);
    let total_commits = history.count_commits_since(since)?;
    if total_commits == 0 || window_days == 0 {
        return Ok(None);
    }

    let average_per_day = total_commits as f64 / window_days as f64;
    Ok(Some(IntensityReport {
        total_commits,
        window_days,
        average_per_day,
        multiplier,
        recommended: recommend(average_per_day, multiplier),
    }))
}

/// Pick the commit volume for a run. History failures never escape; they
/// fall back to the manual value, which is returned unclamped.
pub fn resolve_volume(
    history: &dyn HistoryStore,
    config: &PaintConfig,
    now: DateTime<Utc>,
) -> VolumeDecision {
    let manual = |source: VolumeSource| VolumeDecision {
        per_day: config.commits_per_day,
        source,
        report: None,
    };

    if !config.auto_adjust {
        return manual(VolumeSource::AutoAdjustDisabled);
    }

    match analyze_intensity(
        history,
        config.history_window_days,
        config.intensity_multiplier,
        now,
    ) {
        Ok(Some(report)) => VolumeDecision {
            per_day: report.recommended,
            source: VolumeSource::Derived,
            report: Some(report),
        },
        Ok(None) => manual(VolumeSource::NoHistory),
        Err(e) => manual(VolumeSource::QueryFailed {
            error: e.to_string(),
        }),
    }
}

pub fn estimate_commits_per_day(
    history: &dyn HistoryStore,
    history_window_days: u32,
    manual_fallback: u32,
    multiplier: f64,
) -> u32 {
    let config = PaintConfig {
        auto_adjust: true,
        commits_per_day: manual_fallback,
        intensity_multiplier: multiplier,
        history_window_days,
        ..PaintConfig::default()
    };
    resolve_volume(history, &config, Utc::now()).per_day
}
