use crate::cli::CommonArgs;
use crate::config::PaintConfig;
use crate::git::GitRepo;
use crate::glyph::GLYPH_HEIGHT;
use crate::layout::{plan_layout, LayoutPlan, WINDOW_WEEKS};
use crate::model::{PlanOutput, SCHEMA_VERSION};
use crate::util::{parse_anchor, today};
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use console::style;

const WEEKDAY_LABELS: [&str; GLYPH_HEIGHT] = ["   ", "Mon", "   ", "Wed", "   ", "Fri", "   "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Painted,
    Empty,
    /// After the anchor date; the calendar leaves these blank.
    Future,
}

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> Result<()> {
    let anchor = resolve_anchor(&common)?;
    let config = PaintConfig::default();
    let plan = plan_layout(&config.word, anchor, config.margin_weeks);

    if json {
        output_json(&plan, &config)?;
    } else if ndjson {
        output_ndjson(&plan)?;
    } else {
        output_calendar(&plan, &config);
    }

    Ok(())
}

/// Date expressions need no repository; revisions do.
pub fn resolve_anchor(common: &CommonArgs) -> Result<NaiveDate> {
    match common.anchor.as_deref() {
        None => Ok(today()),
        Some(input) => match parse_anchor(input, today()) {
            Some(date) => Ok(date),
            None => {
                let repo = GitRepo::open(common.repo.as_ref())
                    .context("Failed to open git repository")?;
                repo.resolve_anchor(Some(input))
                    .context("Failed to resolve anchor date")
            }
        },
    }
}

/// Rows are weekdays (Sunday first), columns the 53 rendered weeks.
pub fn calendar_grid(plan: &LayoutPlan) -> Vec<Vec<CalendarCell>> {
    let columns = WINDOW_WEEKS + 1;
    (0..GLYPH_HEIGHT as i64)
        .map(|row| {
            (0..columns)
                .map(|col| {
                    let date = plan.window_start + Duration::weeks(col) + Duration::days(row);
                    if date > plan.anchor {
                        CalendarCell::Future
                    } else if plan.contains(date) {
                        CalendarCell::Painted
                    } else {
                        CalendarCell::Empty
                    }
                })
                .collect()
        })
        .collect()
}

pub fn output_json(plan: &LayoutPlan, config: &PaintConfig) -> Result<()> {
    let output = PlanOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        word: config.word.text(),
        anchor: plan.anchor,
        current_week_start: plan.current_week_start,
        window_start: plan.window_start,
        pattern_start: plan.pattern_start,
        word_width: plan.word_width,
        dropped_cells: plan.dropped_cells,
        targets: plan.targets.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(plan: &LayoutPlan) -> Result<()> {
    for target in &plan.targets {
        println!("{}", serde_json::to_string(target)?);
    }
    Ok(())
}

pub fn output_calendar(plan: &LayoutPlan, config: &PaintConfig) {
    println!(
        "{} {}",
        style("Contribution Calendar Preview").bold(),
        style(config.word.text()).cyan()
    );
    println!("{}", "─".repeat(58));

    for (row, cells) in calendar_grid(plan).iter().enumerate() {
        let line: String = cells
            .iter()
            .map(|cell| match cell {
                CalendarCell::Painted => style("█").green().to_string(),
                CalendarCell::Empty => style("·").dim().to_string(),
                CalendarCell::Future => " ".to_string(),
            })
            .collect();
        println!("{} {}", WEEKDAY_LABELS[row], line);
    }

    println!();
    println!(
        "Window: {} to {}",
        style(plan.window_start).dim(),
        style(plan.anchor).dim()
    );
    println!("Pattern starts: {}", style(plan.pattern_start).cyan());
    println!("Days with pattern: {}", style(plan.targets.len()).cyan());

    if plan.is_truncated() {
        println!(
            "{} {} cells fall outside the calendar window and were dropped",
            style("warning:").yellow().bold(),
            plan.dropped_cells
        );
    }
}
