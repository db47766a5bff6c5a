use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

/// Timestamp layout git accepts in `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`.
pub const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sunday on or before `date`; contribution calendars start their weeks on Sunday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an anchor date relative to `today`.
///
/// Accepts RFC3339, `YYYY-MM-DD`, `N days|weeks|months ago` and humantime
/// durations (`3weeks`, `10d`) which are read as "that long ago".
pub fn parse_anchor(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("today") {
        return Some(today);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    let duration = parse_natural_duration(input)
        .or_else(|| humantime::parse_duration(input).ok())?;
    let days = (duration.as_secs() / 86_400) as i64;
    today.checked_sub_signed(Duration::days(days))
}

fn parse_natural_duration(input: &str) -> Option<std::time::Duration> {
    let input = input.trim().to_lowercase();

    if let Some(days) = input.strip_suffix(" days ago") {
        if let Ok(n) = days.trim().parse::<u64>() {
            return Some(std::time::Duration::from_secs(n * 86400));
        }
    }

    if let Some(weeks) = input.strip_suffix(" weeks ago") {
        if let Ok(n) = weeks.trim().parse::<u64>() {
            return Some(std::time::Duration::from_secs(n * 7 * 86400));
        }
    }

    if let Some(months) = input.strip_suffix(" months ago") {
        if let Ok(n) = months.trim().parse::<u64>() {
            return Some(std::time::Duration::from_secs(n * 30 * 86400));
        }
    }

    None
}
