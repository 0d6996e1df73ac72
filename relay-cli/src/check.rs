use crate::frames::{Frame, read_frames};
use anyhow::Result;
use colored::Colorize;
use relay_ui::command::{FrameEntry, decode_frame};
use std::path::PathBuf;

/// A decoded frame entry worth reporting
#[derive(Debug, PartialEq, Eq)]
pub enum Issue {
    /// The frame itself is not a JSON array of records
    BadFrame { reason: String },
    Unknown { index: usize, kind: String },
    Invalid {
        index: usize,
        kind: String,
        reason: String,
    },
}

impl Issue {
    pub fn is_error(&self) -> bool {
        !matches!(self, Issue::Unknown { .. })
    }
}

/// Returns `false` when any frame holds an invalid entry
pub fn run_check(files: &[PathBuf]) -> Result<bool> {
    let frames = read_frames(files)?;

    let mut commands = 0;
    let mut errors = 0;
    let mut warnings = 0;

    for frame in &frames {
        let (count, issues) = check_frame(frame);
        commands += count;
        for issue in &issues {
            if issue.is_error() {
                errors += 1;
            } else {
                warnings += 1;
            }
            display_issue(frame, issue);
        }
    }

    println!("{}", "─".repeat(60).dimmed());
    let summary = format!(
        "{} frame(s), {} command(s), {} error(s), {} warning(s)",
        frames.len(),
        commands,
        errors,
        warnings
    );
    if errors == 0 {
        println!("{} {}", "✓".green(), summary);
    } else {
        println!("{} {}", "✗".red(), summary.red());
    }

    Ok(errors == 0)
}

/// Decoded command count plus every unknown or invalid entry
pub fn check_frame(frame: &Frame) -> (usize, Vec<Issue>) {
    let entries = match decode_frame(&frame.json) {
        Ok(entries) => entries,
        Err(err) => {
            return (
                0,
                vec![Issue::BadFrame {
                    reason: err.to_string(),
                }],
            );
        }
    };

    let mut commands = 0;
    let mut issues = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match entry {
            FrameEntry::Command(_) => commands += 1,
            FrameEntry::Unknown { kind } => issues.push(Issue::Unknown { index, kind }),
            FrameEntry::Invalid { kind, reason } => {
                issues.push(Issue::Invalid {
                    index,
                    kind,
                    reason,
                });
            }
        }
    }
    (commands, issues)
}

fn display_issue(frame: &Frame, issue: &Issue) {
    let location = frame.location();
    match issue {
        Issue::BadFrame { reason } => {
            println!("  {} {} - {}", "✗".red(), location.bright_white(), reason);
        }
        Issue::Unknown { index, kind } => {
            let what = if kind.is_empty() {
                "record without `type`".to_string()
            } else {
                format!("unknown command `{kind}`")
            };
            println!(
                "  {} {} [{}] - {}",
                "⚠".yellow(),
                location.bright_white(),
                index.to_string().yellow(),
                what
            );
        }
        Issue::Invalid {
            index,
            kind,
            reason,
        } => {
            println!(
                "  {} {} [{}] - invalid `{}`: {}",
                "✗".red(),
                location.bright_white(),
                index.to_string().yellow(),
                kind,
                reason
            );
        }
    }
}
