//! Maps the word's glyph cells onto calendar dates.
//!
//! The calendar renders 53 week columns ending with the week that contains
//! the anchor date. Column `c` and row `r` of the word land on
//! `pattern_start + c weeks + r days`, where `pattern_start` sits a fixed
//! number of weeks after the earliest rendered column.

use chrono::{Duration, NaiveDate};

use crate::glyph::{Word, GLYPH_HEIGHT};
use crate::model::TargetDate;
use crate::util::week_start;

/// Weeks between the anchor's week and the earliest rendered column.
pub const WINDOW_WEEKS: i64 = 52;

/// Blank weeks left before the first letter.
pub const DEFAULT_MARGIN_WEEKS: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub anchor: NaiveDate,
    pub current_week_start: NaiveDate,
    pub window_start: NaiveDate,
    pub pattern_start: NaiveDate,
    pub word_width: u32,
    /// Letter-major, then column-major, then row-major.
    pub targets: Vec<TargetDate>,
    /// Lit cells that fell outside `window_start..=anchor`.
    pub dropped_cells: usize,
}

impl LayoutPlan {
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.targets.iter().map(|t| t.date).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.targets.iter().any(|t| t.date == date)
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped_cells > 0
    }
}

/// Start of the earliest rendered week for `anchor`.
pub fn window_start(anchor: NaiveDate) -> NaiveDate {
    week_start(anchor) - Duration::weeks(WINDOW_WEEKS)
}

pub fn plan_layout(word: &Word, anchor: NaiveDate, margin_weeks: u32) -> LayoutPlan {
    let current_week_start = week_start(anchor);
    let window_start = current_week_start - Duration::weeks(WINDOW_WEEKS);
    let pattern_start = window_start + Duration::weeks(margin_weeks as i64);

    let mut targets = Vec::with_capacity(word.lit_cells());
    let mut dropped_cells = 0;
    let mut column_offset = 0usize;

    for glyph in &word.glyphs {
        for c in 0..glyph.width() {
            let column = column_offset + c;
            for r in 0..GLYPH_HEIGHT {
                if !glyph.is_lit(r, c) {
                    continue;
                }
                let candidate =
                    pattern_start + Duration::weeks(column as i64) + Duration::days(r as i64);
                if candidate < window_start || candidate > anchor {
                    dropped_cells += 1;
                    continue;
                }
                targets.push(TargetDate {
                    date: candidate,
                    row: r as u32,
                    column: column as u32,
                });
            }
        }
        column_offset += glyph.width() + word.gap;
    }

    LayoutPlan {
        anchor,
        current_week_start,
        window_start,
        pattern_start,
        word_width: word.width() as u32,
        targets,
        dropped_cells,
    }
}

/// Ordered target dates for `word` anchored at `anchor` with the default margin.
pub fn compute_target_dates(word: &Word, anchor: NaiveDate) -> Vec<NaiveDate> {
    plan_layout(word, anchor, DEFAULT_MARGIN_WEEKS).dates()
}
