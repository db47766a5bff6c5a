use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::time::Instant;

use crate::error::Result;
use crate::model::EmitSummary;

/// Hours commits are spread over; indices past the end wrap around.
pub const COMMIT_HOURS: std::ops::RangeInclusive<u32> = 8..=23;

/// Prefix of every synthetic commit message.
pub const MESSAGE_PREFIX: &str = "RAZTOR";

/// Creates one empty commit whose author and committer time are both `when`.
pub trait CommitSink {
    fn create_empty_commit(&mut self, when: NaiveDateTime, message: &str) -> Result<()>;
}

/// Accepts every commit without touching a repository.
#[derive(Debug, Default)]
pub struct DryRun {
    pub accepted: usize,
}

impl CommitSink for DryRun {
    fn create_empty_commit(&mut self, _when: NaiveDateTime, _message: &str) -> Result<()> {
        self.accepted += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOutcome {
    pub date: NaiveDate,
    pub commits_created: usize,
    pub succeeded: bool,
    pub error: Option<String>,
}

/// Time of day for the `index`-th commit of a day.
pub fn commit_time(index: u32) -> NaiveTime {
    let hours = COMMIT_HOURS.end() - COMMIT_HOURS.start() + 1;
    let hour = COMMIT_HOURS.start() + index % hours;
    let minute = (index * 3) % 60;
    let second = (index * 7) % 60;
    NaiveTime::MIN + Duration::seconds((hour * 3600 + minute * 60 + second) as i64)
}

pub fn commit_timestamp(date: NaiveDate, index: u32) -> NaiveDateTime {
    date.and_time(commit_time(index))
}

pub fn commit_message(date: NaiveDate, index: u32) -> String {
    format!("{} {} #{}", MESSAGE_PREFIX, date.format("%Y-%m-%d"), index + 1)
}

/// Create up to `commits_per_day` commits for `date`, stopping at the first
/// failure. Commits made before a failure are kept.
pub fn run_day(sink: &mut dyn CommitSink, date: NaiveDate, commits_per_day: u32) -> DayOutcome {
    let mut created = 0;
    for i in 0..commits_per_day {
        let when = commit_timestamp(date, i);
        if let Err(e) = sink.create_empty_commit(when, &commit_message(date, i)) {
            return DayOutcome {
                date,
                commits_created: created,
                succeeded: false,
                error: Some(e.to_string()),
            };
        }
        created += 1;
    }

    DayOutcome {
        date,
        commits_created: created,
        succeeded: true,
        error: None,
    }
}

pub fn emit_day(sink: &mut dyn CommitSink, date: NaiveDate, commits_per_day: u32) -> bool {
    run_day(sink, date, commits_per_day).succeeded
}

/// Visit every date in order. A failed day is recorded and the run moves on.
pub fn emit_all<F>(
    sink: &mut dyn CommitSink,
    dates: &[NaiveDate],
    commits_per_day: u32,
    mut on_day: F,
) -> EmitSummary
where
    F: FnMut(usize, &DayOutcome),
{
    let started = Instant::now();
    let mut summary = EmitSummary {
        days_total: dates.len(),
        ..EmitSummary::default()
    };

    for (idx, &date) in dates.iter().enumerate() {
        let outcome = run_day(sink, date, commits_per_day);
        summary.commits_created += outcome.commits_created;
        if outcome.succeeded {
            summary.days_succeeded += 1;
        } else {
            summary.days_failed += 1;
            summary.failed_dates.push(date);
        }
        on_day(idx, &outcome);
    }

    summary.elapsed_ms = started.elapsed().as_millis() as u64;
    summary
}
