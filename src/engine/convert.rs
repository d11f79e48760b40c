use crate::engine::scan::scan_fonts;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Location of the external converter. The default layout ships the tool
/// and its driver script together under the content root.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub executable: PathBuf,
    pub script: PathBuf,
}

impl ConverterConfig {
    pub fn from_content_root(content_root: &Path) -> Self {
        let bin = content_root.join("Python").join("FontForge").join("bin");
        let executable = if cfg!(windows) {
            bin.join("fontforge.exe")
        } else {
            bin.join("fontforge")
        };
        Self {
            executable,
            script: bin.join("convert_otf_ttf.py"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversionOutcome {
    Converted,
    /// The converted file is already there; the tool is not invoked and the
    /// existing file is left untouched.
    SkippedAlreadyExists,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderConversionReport {
    pub attempted: usize,
    pub failed: usize,
}

impl FolderConversionReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// The conversion target: same directory, extension swapped between the
/// two supported formats. Anything else is not convertible.
pub fn swap_extension(path: &Path) -> Option<PathBuf> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())?;
    let new_ext = match ext.as_str() {
        "ttf" => "otf",
        "otf" => "ttf",
        _ => return None,
    };
    Some(path.with_extension(new_ext))
}

pub struct ConversionDriver<'a> {
    config: &'a ConverterConfig,
    content_root: &'a Path,
}

impl<'a> ConversionDriver<'a> {
    pub fn new(config: &'a ConverterConfig, content_root: &'a Path) -> Self {
        Self {
            config,
            content_root,
        }
    }

    /// Converts one font file in place next to its source. The run is
    /// synchronous: the child process is waited on with its output drained
    /// to end-of-stream, and success additionally requires a zero exit
    /// status and the output file actually existing afterwards.
    pub fn convert_file(&self, source: &Path) -> ConversionOutcome {
        // Relative paths are retried under the content root.
        let source = if source.exists() {
            source.to_path_buf()
        } else {
            self.content_root.join(source)
        };

        let Some(output_path) = swap_extension(&source) else {
            log::error!("File conversion failed: unsupported extension for {}", source.display());
            return ConversionOutcome::Failed;
        };

        if output_path.exists() {
            log::warn!("File already exists in directory: {}", output_path.display());
            return ConversionOutcome::SkippedAlreadyExists;
        }

        log::info!("Converting font to {}", output_path.display());

        let result = Command::new(&self.config.executable)
            .arg("-lang=py")
            .arg("-script")
            .arg(&self.config.script)
            .arg(&source)
            .arg(&output_path)
            .output();

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                log::error!(
                    "Failed to launch converter {}: {}",
                    self.config.executable.display(),
                    e
                );
                return ConversionOutcome::Failed;
            }
        };

        if !output.stdout.is_empty() {
            log::debug!("Converter: {}", String::from_utf8_lossy(&output.stdout).trim());
        }
        if !output.stderr.is_empty() {
            log::debug!("Converter: {}", String::from_utf8_lossy(&output.stderr).trim());
        }

        if !output.status.success() {
            log::error!("Converter exited with {}", output.status);
            return ConversionOutcome::Failed;
        }
        if !output_path.exists() {
            log::error!(
                "Converter finished but {} was not created",
                output_path.display()
            );
            return ConversionOutcome::Failed;
        }

        log::info!("Successfully converted font: {}", source.display());
        ConversionOutcome::Converted
    }

    /// Converts every font file in `dir`, counting failures instead of
    /// stopping on them. A directory that does not exist, or holds no
    /// convertible fonts, yields an empty report.
    pub fn convert_folder(&self, dir: &Path) -> FolderConversionReport {
        let mut report = FolderConversionReport::default();

        if !dir.is_dir() {
            return report;
        }
        let files = match scan_fonts(dir) {
            Ok(files) => files,
            Err(_) => return report,
        };

        for name in files {
            let path = dir.join(&name);
            if !path.is_file() {
                continue;
            }
            report.attempted += 1;
            if self.convert_file(&path) == ConversionOutcome::Failed {
                report.failed += 1;
            }
        }

        if report.is_clean() {
            log::info!("Converted folder {} ({} files)", dir.display(), report.attempted);
        } else {
            log::error!(
                "Some files may have failed to convert. Encountered {} errors.",
                report.failed
            );
        }
        report
    }
}
