use crate::data::settings::{ensure_staging_dir, FontPaths, FontSettingsStore};
use crate::data::slots::{all_slots, FontSlot, FONT_PATH_KEY};
use serde::Serialize;
use std::fs;
use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seam to the host renderer: invoked after every successful install or
/// reset so the new font files become visible.
pub trait RenderCache {
    fn flush_font_cache(&self, reason: &str);
}

/// For hosts that redraw on their own schedule, and for headless use.
pub struct NoopRenderCache;

impl RenderCache for NoopRenderCache {
    fn flush_font_cache(&self, _reason: &str) {}
}

const FLUSH_REASON: &str = "Fonts have been updated.";

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Destination path is invalid: {0:?}")]
    PathInvalid(PathBuf),
    #[error("Failed to delete installed font {path:?}: {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to copy {from:?} to {to:?}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a bulk reset. Bulk reset is best-effort: individual slot
/// failures are counted, never aborting the remaining slots.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSummary {
    pub attempted: usize,
    pub failures: usize,
}

impl ResetSummary {
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

/// Replaces one installed font file in place: delete the destination, then
/// copy the source over it. A destination that was already absent is the
/// success path; a destination that refuses deletion while still present is
/// a genuine failure and the copy is not attempted.
fn replace_file(dest: &Path, source: &Path) -> Result<(), InstallError> {
    match fs::remove_file(dest) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(InstallError::DeleteFailed {
                path: dest.to_path_buf(),
                source: err,
            })
        }
    }

    match fs::copy(source, dest) {
        Ok(_) => Ok(()),
        Err(err) => Err(InstallError::CopyFailed {
            from: source.to_path_buf(),
            to: dest.to_path_buf(),
            source: err,
        }),
    }
}

/// Applies and reverts font selections. Holds no state of its own; the
/// store remains the single point of truth for bindings and lock state.
/// Lock checks live with the caller, this engine does not re-check them.
pub struct InstallEngine<'a> {
    settings: &'a FontSettingsStore,
    paths: &'a FontPaths,
    render_cache: &'a dyn RenderCache,
}

impl<'a> InstallEngine<'a> {
    pub fn new(
        settings: &'a FontSettingsStore,
        paths: &'a FontPaths,
        render_cache: &'a dyn RenderCache,
    ) -> Self {
        Self {
            settings,
            paths,
            render_cache,
        }
    }

    fn destination_file(&self, slot: &FontSlot) -> Result<PathBuf, InstallError> {
        let dest_dir = self.paths.destination_dir(slot.category);
        if !dest_dir.is_dir() {
            return Err(InstallError::PathInvalid(dest_dir.to_path_buf()));
        }
        Ok(dest_dir.join(slot.default_file))
    }

    /// Installs `new_file` from the staging directory into the slot's
    /// destination. On failure the slot is rolled back to its backed-up
    /// default before the error is returned.
    pub fn install_font(&self, slot: &FontSlot, new_file: &str) -> Result<(), InstallError> {
        let dest = self.destination_file(slot)?;
        let source = Path::new(&self.settings.font_path()).join(new_file);

        if let Err(err) = replace_file(&dest, &source) {
            log::warn!("Font slot {} failed to change: {}", slot.key, err);
            if let Err(reset_err) = self.reset_slot(slot) {
                log::warn!("Rollback of slot {} also failed: {}", slot.key, reset_err);
            }
            return Err(err);
        }

        self.render_cache.flush_font_cache(FLUSH_REASON);
        if let Err(e) = self.settings.set_bound_file(slot.key, new_file) {
            log::warn!("Failed to persist binding for {}: {}", slot.key, e);
        }
        log::info!("Font changed successfully: {} = {}", slot.key, new_file);
        Ok(())
    }

    /// Restores one slot's installed file from the defaults backup and
    /// clears its binding. Also the rollback path of `install_font`.
    pub fn reset_slot(&self, slot: &FontSlot) -> Result<(), InstallError> {
        if let Err(e) = self.settings.set_bound_file(slot.key, "") {
            log::warn!("Failed to clear binding for {}: {}", slot.key, e);
        }

        let dest = self.destination_file(slot)?;
        let source = self.paths.defaults_dir.join(slot.default_file);

        replace_file(&dest, &source).map_err(|err| {
            log::warn!("Property failed to reset: {}", slot.key);
            err
        })?;

        self.render_cache.flush_font_cache(FLUSH_REASON);
        log::info!("{} property reset", slot.key);
        Ok(())
    }

    /// Resets every unlocked slot to its backed-up default. The staging
    /// directory setting is itself resettable: unlocked, it is restored to
    /// the canonical default location and recreated. Failures are counted
    /// rather than aborting, and the render cache is flushed once at the
    /// end regardless.
    pub fn reset_all(&self) -> ResetSummary {
        let mut summary = ResetSummary::default();

        if self.settings.is_editable(FONT_PATH_KEY) {
            let default_dir = self.paths.temp_fonts_dir.to_string_lossy().into_owned();
            if let Err(e) = self.settings.set_font_path(&default_dir) {
                log::warn!("Failed to reset font path: {}", e);
            }
            ensure_staging_dir(self.settings.settings_editable(), &self.settings.font_path());
        }

        for slot in all_slots() {
            if !self.settings.is_editable(slot.key) {
                continue;
            }
            summary.attempted += 1;

            if let Err(e) = self.settings.set_bound_file(slot.key, "") {
                log::warn!("Failed to clear binding for {}: {}", slot.key, e);
            }

            let dest = match self.destination_file(slot) {
                Ok(dest) => dest,
                Err(err) => {
                    log::warn!("Property failed to reset: {} ({})", slot.key, err);
                    summary.failures += 1;
                    continue;
                }
            };
            let source = self.paths.defaults_dir.join(slot.default_file);

            if let Err(err) = replace_file(&dest, &source) {
                log::warn!("Property failed to reset: {} ({})", slot.key, err);
                summary.failures += 1;
            }
        }

        log::info!("Encountered {} errors.", summary.failures);
        self.render_cache.flush_font_cache(FLUSH_REASON);
        summary
    }
}
