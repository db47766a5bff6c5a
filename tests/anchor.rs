use calpaint::util::{parse_anchor, week_start};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn plain_dates_parse() {
    let today = date(2024, 6, 15);
    assert_eq!(parse_anchor("2024-01-31", today), Some(date(2024, 1, 31)));
    assert_eq!(parse_anchor(" today ", today), Some(today));
}

#[test]
fn relative_expressions_count_back_from_today() {
    let today = date(2024, 6, 15);
    assert_eq!(parse_anchor("3 days ago", today), Some(date(2024, 6, 12)));
    assert_eq!(parse_anchor("2 weeks ago", today), Some(date(2024, 6, 1)));
    assert_eq!(parse_anchor("1 months ago", today), Some(date(2024, 5, 16)));
    assert_eq!(parse_anchor("10d", today), Some(date(2024, 6, 5)));
    assert_eq!(parse_anchor("1week", today), Some(date(2024, 6, 8)));
    // partial days round down
    assert_eq!(parse_anchor("36h", today), Some(date(2024, 6, 14)));
}

#[test]
fn garbage_is_rejected() {
    let today = date(2024, 6, 15);
    assert_eq!(parse_anchor("not-a-date", today), None);
    assert_eq!(parse_anchor("2024-13-01", today), None);
}

#[test]
fn weeks_start_on_sunday() {
    assert_eq!(week_start(date(2024, 6, 15)), date(2024, 6, 9));
    assert_eq!(week_start(date(2024, 6, 9)), date(2024, 6, 9));
    assert_eq!(week_start(date(2024, 6, 10)), date(2024, 6, 9));
}
