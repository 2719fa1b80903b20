//! File I/O for native CLI

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use highlighter_core::Highlight;

/// A text file loaded for highlighting
#[derive(Debug, Clone)]
pub struct LoadedText {
    pub title: String,
    pub content: String,
}

/// Load a text file
pub fn load_text(path: &str) -> Result<LoadedText> {
    let path = Path::new(path);
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let content = fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))?;

    let title = canonical
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    Ok(LoadedText { title, content })
}

/// Load a JSON array of highlights, e.g. `[{"startIndex": 4, "numChars": 3}]`
pub fn load_highlights(path: &str) -> Result<Vec<Highlight>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read highlights: {}", path))?;
    highlighter_core::highlights_from_json(&json)
        .with_context(|| format!("Invalid highlights in {}", path))
}

/// Get the ~/.highlighter directory path, creating it if needed
pub fn highlighter_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let dir = home.join(".highlighter");

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    Ok(dir)
}
