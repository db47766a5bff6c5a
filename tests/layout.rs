use calpaint::glyph::{Glyph, Word, LETTER_A, LETTER_R, LETTER_T};
use calpaint::layout::{compute_target_dates, plan_layout, window_start, DEFAULT_MARGIN_WEEKS};
use calpaint::plan::{calendar_grid, CalendarCell};
use calpaint::util::week_start;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// 2024-06-15 is a Saturday
fn saturday() -> NaiveDate {
    date(2024, 6, 15)
}

const BLANK: &[u8] = &[0, 0, 0];

#[test]
fn window_starts_52_weeks_before_the_anchor_week() {
    let mut anchor = date(2023, 12, 20);
    for _ in 0..400 {
        let start = window_start(anchor);
        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(week_start(anchor) - start, Duration::weeks(52));
        assert!(week_start(anchor) <= anchor);
        assert!(anchor - week_start(anchor) < Duration::days(7));
        anchor += Duration::days(1);
    }
}

#[test]
fn saturday_anchor_uses_preceding_sunday() {
    let plan = plan_layout(&Word::raztor(), saturday(), DEFAULT_MARGIN_WEEKS);
    assert_eq!(plan.current_week_start, date(2024, 6, 9));
    assert_eq!(plan.window_start, date(2024, 6, 9) - Duration::days(364));
    assert_eq!(plan.window_start, date(2023, 6, 11));
    assert_eq!(plan.pattern_start, date(2023, 8, 6));
}

#[test]
fn sunday_anchor_is_its_own_week_start() {
    let sunday = date(2024, 6, 9);
    assert_eq!(week_start(sunday), sunday);
    assert_eq!(window_start(sunday), date(2023, 6, 11));
}

#[test]
fn raztor_fits_the_default_window() {
    let word = Word::raztor();
    let plan = plan_layout(&word, saturday(), DEFAULT_MARGIN_WEEKS);

    assert_eq!(word.text(), "RAZTOR");
    assert_eq!(word.width(), 35);
    assert_eq!(word.lit_cells(), 100);
    assert_eq!(plan.targets.len(), 100);
    assert_eq!(plan.dropped_cells, 0);
    assert!(!plan.is_truncated());
}

#[test]
fn first_column_of_r_fills_the_first_pattern_week() {
    let plan = plan_layout(&Word::raztor(), saturday(), DEFAULT_MARGIN_WEEKS);
    let first: Vec<NaiveDate> = plan.targets.iter().take(7).map(|t| t.date).collect();
    let expected: Vec<NaiveDate> = (0..7).map(|d| date(2023, 8, 6) + Duration::days(d)).collect();
    assert_eq!(first, expected);
    assert!(plan.targets.iter().take(7).all(|t| t.column == 0));
    assert_eq!(
        plan.targets.iter().take(7).map(|t| t.row).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn letters_advance_by_width_plus_gap() {
    let plan = plan_layout(&Word::raztor(), saturday(), DEFAULT_MARGIN_WEEKS);
    // 'A' starts at column 6; its first lit cells are rows 1..=6 of column 0
    let a_start = plan.targets.iter().find(|t| t.column == 6).unwrap();
    assert_eq!(a_start.row, 1);
    assert_eq!(a_start.date, date(2023, 8, 6) + Duration::weeks(6) + Duration::days(1));
    assert!(plan.targets.iter().all(|t| t.column % 6 != 5));
    assert_eq!(plan.targets.iter().map(|t| t.column).max(), Some(34));
}

#[test]
fn output_is_letter_then_column_then_row_major() {
    let plan = plan_layout(&Word::raztor(), saturday(), DEFAULT_MARGIN_WEEKS);
    for pair in plan.targets.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!((a.column, a.row) < (b.column, b.row));
        assert!(a.date < b.date);
    }
}

#[test]
fn every_target_lies_in_the_rendered_window() {
    let word = Word::raztor();
    let mut anchor = date(2024, 1, 1);
    for margin in [0, 8, 20, 40, 52, 60] {
        for _ in 0..10 {
            let plan = plan_layout(&word, anchor, margin);
            for t in &plan.targets {
                assert!(plan.window_start <= t.date && t.date <= anchor);
            }
            assert_eq!(plan.targets.len() + plan.dropped_cells, word.lit_cells());
            anchor += Duration::days(3);
        }
    }
}

#[test]
fn cells_past_the_anchor_are_dropped_and_counted() {
    // Wednesday; margin 52 puts the pattern on the current week
    let anchor = date(2024, 6, 12);
    let plan = plan_layout(&Word::raztor(), anchor, 52);

    assert_eq!(plan.pattern_start, date(2024, 6, 9));
    assert_eq!(
        plan.dates(),
        vec![date(2024, 6, 9), date(2024, 6, 10), date(2024, 6, 11), date(2024, 6, 12)]
    );
    assert_eq!(plan.dropped_cells, 96);
    assert!(plan.is_truncated());
}

#[test]
fn candidates_per_letter_match_lit_cells() {
    let anchor = saturday();
    for glyph in [LETTER_R, LETTER_A, LETTER_T] {
        let word = Word::new(vec![glyph], 1);
        let plan = plan_layout(&word, anchor, DEFAULT_MARGIN_WEEKS);
        assert_eq!(plan.targets.len() + plan.dropped_cells, glyph.lit_cells());
    }
}

#[test]
fn blank_letter_only_shifts_the_next_letter() {
    let blank = Glyph::new('_', [BLANK; 7]);
    assert_eq!(blank.lit_cells(), 0);

    let alone = plan_layout(&Word::new(vec![blank], 1), saturday(), DEFAULT_MARGIN_WEEKS);
    assert!(alone.targets.is_empty());
    assert_eq!(alone.dropped_cells, 0);

    let word = Word::new(vec![blank, LETTER_T], 1);
    let plan = plan_layout(&word, saturday(), DEFAULT_MARGIN_WEEKS);
    assert_eq!(plan.targets.len(), LETTER_T.lit_cells());
    // blank width 3 + gap 1
    assert_eq!(plan.targets[0].column, 4);
    assert_eq!(plan.targets[0].date, plan.pattern_start + Duration::weeks(4));
}

#[test]
fn layout_is_deterministic() {
    let word = Word::raztor();
    let first = compute_target_dates(&word, saturday());
    let second = compute_target_dates(&word, saturday());
    assert_eq!(first, second);
    assert_eq!(first, plan_layout(&word, saturday(), DEFAULT_MARGIN_WEEKS).dates());
}

#[test]
fn calendar_grid_marks_painted_and_future_cells() {
    let plan = plan_layout(&Word::raztor(), saturday(), DEFAULT_MARGIN_WEEKS);
    let grid = calendar_grid(&plan);

    assert_eq!(grid.len(), 7);
    assert!(grid.iter().all(|row| row.len() == 53));

    let painted = grid
        .iter()
        .flatten()
        .filter(|&&c| c == CalendarCell::Painted)
        .count();
    assert_eq!(painted, plan.targets.len());
    // anchor is a Saturday, so the last week is fully in the past
    assert!(grid.iter().flatten().all(|&c| c != CalendarCell::Future));

    let wednesday = plan_layout(&Word::raztor(), date(2024, 6, 12), DEFAULT_MARGIN_WEEKS);
    let grid = calendar_grid(&wednesday);
    assert_eq!(grid[3][52], CalendarCell::Empty);
    assert_eq!(grid[4][52], CalendarCell::Future);
}
