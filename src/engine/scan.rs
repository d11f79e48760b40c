use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions the staging directory is filtered to, lowercase, no dot.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("Path is invalid, please double check: {0:?}")]
    InvalidDirectory(PathBuf),
    #[error("No valid fonts in folder")]
    NoMatches,
}

/// Lists the candidate font files in `dir`, bare names only (no directory
/// component). Order follows filesystem enumeration and is not stable
/// across platforms.
pub fn scan_fonts(dir: &Path) -> Result<Vec<String>, ScanError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Err(ScanError::InvalidDirectory(dir.to_path_buf())),
    };

    let mut names = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !has_font_extension(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        return Err(ScanError::NoMatches);
    }
    Ok(names)
}

/// The OTF-only / TTF-only views the selection widgets consume.
pub fn filter_by_extension(names: &[String], ext: &str) -> Vec<String> {
    let want = ext.trim_start_matches('.').to_ascii_lowercase();
    names
        .iter()
        .filter(|name| {
            Path::new(name)
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(&want))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            FONT_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_case_insensitive_and_dot_tolerant() {
        let names = vec![
            "a.ttf".to_string(),
            "B.TTF".to_string(),
            "c.otf".to_string(),
        ];
        let ttf = filter_by_extension(&names, ".ttf");
        assert_eq!(ttf, vec!["a.ttf".to_string(), "B.TTF".to_string()]);
        let otf = filter_by_extension(&names, "otf");
        assert_eq!(otf, vec!["c.otf".to_string()]);
    }
}
