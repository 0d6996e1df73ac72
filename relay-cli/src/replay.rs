use crate::frames::{Frame, read_frames};
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use colored::Colorize;
use relay_ui::{
    ApplierConfig, CommandApplier, DuplicatePolicy, FailurePolicy, FrameError, MemorySurface,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Html,
    Json,
}

pub struct ReplayOptions {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub on_duplicate: Option<DuplicatePolicy>,
    pub keep_going: bool,
}

/// Totals over every replayed frame
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub fn run_replay(options: ReplayOptions) -> Result<()> {
    let config = load_config(&options)?;
    let frames = read_frames(&options.files)?;
    let keep_going = config.failure_policy == FailurePolicy::Continue;

    let mut applier = CommandApplier::with_config(MemorySurface::new(), config);
    let summary = replay(&mut applier, &frames, keep_going)?;

    match options.format {
        OutputFormat::Pretty => display_pretty(&applier, &summary),
        OutputFormat::Html => print!("{}", applier.surface().to_html()),
        OutputFormat::Json => display_json(&applier)?,
    }

    Ok(())
}

fn load_config(options: &ReplayOptions) -> Result<ApplierConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            ApplierConfig::from_json(&json)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => ApplierConfig::default(),
    };

    if let Some(policy) = options.on_duplicate {
        config.duplicate_policy = policy;
    }
    if options.keep_going {
        config.failure_policy = FailurePolicy::Continue;
    }

    Ok(config)
}

/// Apply `frames` in order; without `keep_going` the first failing frame stops the replay
pub fn replay(
    applier: &mut CommandApplier<MemorySurface>,
    frames: &[Frame],
    keep_going: bool,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for frame in frames {
        summary.frames += 1;
        match applier.apply_frame(&frame.json) {
            Ok(report) => {
                summary.applied += report.applied;
                summary.skipped += report.skipped.len();
                summary.failed += report.failures.len();
            }
            Err(FrameError::Batch(err)) if !keep_going => {
                bail!(
                    "{}: command {} failed: {}",
                    frame.location(),
                    err.index,
                    err.source
                );
            }
            Err(FrameError::Decode(err)) if !keep_going => {
                bail!("{}: {}", frame.location(), err);
            }
            Err(err) => {
                error!(frame = %frame.location(), "{err}");
                summary.failed += 1;
            }
        }
    }

    info!(
        frames = summary.frames,
        applied = summary.applied,
        skipped = summary.skipped,
        failed = summary.failed,
        "replay finished"
    );
    Ok(summary)
}

fn display_pretty(applier: &CommandApplier<MemorySurface>, summary: &ReplaySummary) {
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "{} {}",
        "Relay Replay:".bold().cyan(),
        format!(
            "{} frame(s), {} applied, {} skipped, {} failed",
            summary.frames, summary.applied, summary.skipped, summary.failed
        )
        .yellow()
    );
    println!("{}", "─".repeat(60).dimmed());

    if applier.is_empty() {
        println!("  {}", "(no nodes)".dimmed());
    }

    for id in applier.registry().ids() {
        let Some(element) = applier
            .element(id)
            .and_then(|&handle| applier.surface().element(handle))
        else {
            continue;
        };

        let text = if element.text.is_empty() {
            String::new()
        } else {
            format!(" {:?}", element.text)
        };
        println!(
            "  {} {}{}",
            id.to_string().yellow(),
            format!("<{}>", element.tag).bright_white(),
            text.green()
        );
        for (name, value) in &element.style {
            println!("      {}: {}", name.dimmed(), value);
        }
    }

    println!("{}", "─".repeat(60).dimmed());
}

fn display_json(applier: &CommandApplier<MemorySurface>) -> Result<()> {
    let nodes: Vec<_> = applier
        .registry()
        .ids()
        .into_iter()
        .filter_map(|id| {
            let handle = applier.element(id)?;
            let element = applier.surface().element(*handle)?;
            Some(json!({ "node": id, "element": element }))
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&nodes)?);
    Ok(())
}
