use super::{output_json, output_summary};
use crate::cli::CommonArgs;
use crate::config::PaintConfig;
use crate::emit::{emit_all, CommitSink, DryRun};
use crate::estimate::print_decision;
use crate::git::{GitCommitter, GitRepo};
use crate::intensity::resolve_volume;
use crate::layout::plan_layout;
use anyhow::Context;
use chrono::Utc;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn exec(common: CommonArgs, dry_run: bool, json: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let anchor = repo
        .resolve_anchor(common.anchor.as_deref())
        .context("Failed to resolve anchor date")?;
    let config = PaintConfig::default();

    let decision = resolve_volume(&repo, &config, Utc::now());
    if !json {
        print_decision(&decision, &config);
    }

    let plan = plan_layout(&config.word, anchor, config.margin_weeks);
    if plan.is_truncated() {
        eprintln!(
            "{} {} cells fall outside the calendar window and were dropped",
            style("warning:").yellow().bold(),
            plan.dropped_cells
        );
    }

    let dates = plan.dates();
    if dates.is_empty() {
        eprintln!(
            "{} no target dates fall inside the calendar window",
            style("warning:").yellow().bold()
        );
    } else if !json {
        eprintln!(
            "Painting {} on {} days × {} commits ({} to {})",
            style(config.word.text()).cyan(),
            dates.len(),
            decision.per_day,
            plan.targets.iter().map(|t| t.date).min().unwrap_or(anchor),
            plan.targets.iter().map(|t| t.date).max().unwrap_or(anchor),
        );
    }

    let pb = if json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(dates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.green}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    };

    let mut sink: Box<dyn CommitSink> = if dry_run {
        Box::new(DryRun::default())
    } else {
        Box::new(GitCommitter::new(repo.path()))
    };

    let summary = emit_all(sink.as_mut(), &dates, decision.per_day, |_, outcome| {
        pb.set_message(outcome.date.to_string());
        if let Some(err) = &outcome.error {
            pb.println(format!(
                "{} {} after {} commits: {}",
                style("✗").red(),
                outcome.date,
                outcome.commits_created,
                err
            ));
        }
        pb.inc(1);
    });
    pb.finish_and_clear();

    if json {
        output_json(&summary, &repo, &config, &plan, &decision, dry_run)?;
    } else {
        output_summary(&summary, dry_run);
    }

    Ok(())
}
