use crate::config::PaintConfig;
use crate::git::GitRepo;
use crate::intensity::VolumeDecision;
use crate::layout::LayoutPlan;
use crate::model::{EmitSummary, PaintOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::time::Duration;

pub fn output_json(
    summary: &EmitSummary,
    repo: &GitRepo,
    config: &PaintConfig,
    plan: &LayoutPlan,
    decision: &VolumeDecision,
    dry_run: bool,
) -> Result<()> {
    let output = PaintOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        word: config.word.text(),
        anchor: plan.anchor,
        dry_run,
        commits_per_day: decision.per_day,
        intensity_level: decision.level(),
        dropped_cells: plan.dropped_cells,
        summary: summary.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_summary(summary: &EmitSummary, dry_run: bool) {
    let title = if dry_run { "Dry Run Summary" } else { "Paint Summary" };
    println!("{}", style(title).bold());
    println!("{}", "─".repeat(50));

    println!(
        "Days completed: {}/{}",
        style(summary.days_succeeded).green(),
        summary.days_total
    );
    if summary.days_failed > 0 {
        println!("Days failed: {}", style(summary.days_failed).red());
        for date in &summary.failed_dates {
            println!("  {}", style(date).dim());
        }
    }

    let verb = if dry_run { "planned" } else { "created" };
    println!("Commits {}: {}", verb, style(summary.commits_created).cyan());
    println!(
        "Elapsed: {}",
        humantime::format_duration(Duration::from_millis(summary.elapsed_ms))
    );
}
