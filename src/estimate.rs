use crate::cli::CommonArgs;
use crate::config::PaintConfig;
use crate::git::GitRepo;
use crate::intensity::{resolve_volume, VolumeDecision, VolumeSource};
use crate::model::{EstimateOutput, SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, json: bool) -> Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let config = PaintConfig::default();
    let decision = resolve_volume(&repo, &config, Utc::now());

    if json {
        output_json(&decision, &repo)?;
    } else {
        print_decision(&decision, &config);
    }

    Ok(())
}

fn output_json(decision: &VolumeDecision, repo: &GitRepo) -> Result<()> {
    let output = EstimateOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        commits_per_day: decision.per_day,
        intensity_level: decision.level(),
        source: decision.source.clone(),
        report: decision.report.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Operator-facing diagnostics, written to stderr so stdout stays parseable.
pub fn print_decision(decision: &VolumeDecision, config: &PaintConfig) {
    if let Some(report) = &decision.report {
        eprintln!(
            "{} (last {} days)",
            style("Commit history analysis").bold(),
            report.window_days
        );
        eprintln!("  Total commits: {}", style(report.total_commits).cyan());
        eprintln!("  Average per day: {:.2}", report.average_per_day);
        eprintln!(
            "  Recommended: {} commits/day (average × {})",
            style(report.recommended).green(),
            report.multiplier
        );
    }

    match &decision.source {
        VolumeSource::Derived | VolumeSource::AutoAdjustDisabled => {}
        VolumeSource::NoHistory => {
            eprintln!(
                "{} no commits in the last {} days, cannot derive a volume",
                style("warning:").yellow().bold(),
                config.history_window_days
            );
        }
        VolumeSource::QueryFailed { error } => {
            eprintln!(
                "{} history query failed: {}",
                style("warning:").yellow().bold(),
                error
            );
        }
    }

    if decision.source != VolumeSource::Derived {
        eprintln!(
            "Using manual value: {} commits/day",
            style(decision.per_day).cyan()
        );
    }
    eprintln!("Intensity level: {}", style(decision.level().label()).bold());
}
