use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// One frame read from a file, with the line it starts on
pub struct Frame {
    pub file: PathBuf,
    pub line: usize,
    pub json: String,
}

pub fn read_frames(files: &[PathBuf]) -> Result<Vec<Frame>> {
    let mut frames = Vec::new();
    for file in files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read file: {}", file.display()))?;
        frames.extend(split_frames(file, &content));
    }
    Ok(frames)
}

/// A file that is a single JSON array is one frame; otherwise every non-empty line is
fn split_frames(file: &Path, content: &str) -> Vec<Frame> {
    if let Ok(Value::Array(_)) = serde_json::from_str::<Value>(content) {
        let line = content
            .lines()
            .position(|line| !line.trim().is_empty())
            .map_or(1, |index| index + 1);
        return vec![Frame {
            file: file.to_path_buf(),
            line,
            json: content.to_string(),
        }];
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Frame {
            file: file.to_path_buf(),
            line: index + 1,
            json: line.to_string(),
        })
        .collect()
}

impl Frame {
    pub fn location(&self) -> String {
        format!("{}:{}", self.file.display(), self.line)
    }
}
