mod data;
mod engine;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use data::settings::{
    default_temp_fonts_dir, ensure_staging_dir, normalize_dir, settings_file_path,
    FontPaths, FontSettingsStore,
};
pub use data::slots::{
    all_slots, slot, visible_slots, DestinationCategory, FontSlot, SlotView, FONT_PATH_KEY,
    SLOT_TABLE,
};
pub use engine::convert::{
    swap_extension, ConversionDriver, ConversionOutcome, ConverterConfig, FolderConversionReport,
};
pub use engine::defaults::ensure_defaults_seeded;
pub use engine::install::{InstallEngine, InstallError, NoopRenderCache, RenderCache, ResetSummary};
pub use engine::scan::{filter_by_extension, scan_fonts, ScanError, FONT_EXTENSIONS};

/// Everything the host has to supply: where the plugin content lives and
/// where the two installed-font directories are. There is no process-wide
/// default; whoever builds the manager owns this.
pub struct FontManagerConfig {
    pub content_root: PathBuf,
    pub normal_dest_dir: PathBuf,
    pub alternate_dest_dir: PathBuf,
    /// Overrides the converter shipped under the content root.
    pub converter: Option<ConverterConfig>,
}

/// Composition root: owns the settings store, the resolved paths and the
/// converter config, and exposes the operation set the settings panel
/// calls into.
pub struct FontManager {
    content_root: PathBuf,
    settings: FontSettingsStore,
    paths: FontPaths,
    converter: ConverterConfig,
    render_cache: Box<dyn RenderCache>,
}

impl FontManager {
    pub fn new(config: FontManagerConfig) -> Self {
        Self::with_render_cache(config, Box::new(NoopRenderCache))
    }

    pub fn with_render_cache(config: FontManagerConfig, render_cache: Box<dyn RenderCache>) -> Self {
        let paths = FontPaths::resolve(
            &config.content_root,
            &config.normal_dest_dir,
            &config.alternate_dest_dir,
        );
        let settings = FontSettingsStore::new(
            settings_file_path(&config.content_root),
            &paths.temp_fonts_dir.to_string_lossy(),
        );
        let converter = config
            .converter
            .unwrap_or_else(|| ConverterConfig::from_content_root(&config.content_root));

        let manager = Self {
            content_root: config.content_root,
            settings,
            paths,
            converter,
            render_cache,
        };
        manager.prepare_workspace();
        manager
    }

    /// Creates the staging and defaults directories and seeds the defaults
    /// backup, all gated on the master edit lock and a non-empty staging
    /// path. Runs at construction and again whenever the staging path
    /// changes.
    fn prepare_workspace(&self) {
        let editable = self.settings.settings_editable();
        let font_path = self.settings.font_path();
        ensure_staging_dir(editable, &font_path);

        if editable && !font_path.is_empty() {
            match ensure_defaults_seeded(
                &self.paths.defaults_dir,
                &self.paths.normal_dest_dir,
                &self.paths.alternate_dest_dir,
            ) {
                Ok(true) => log::info!("Defaults backup seeded at {}", self.paths.defaults_dir.display()),
                Ok(false) => {}
                Err(e) => log::error!("{}", e),
            }
        }
    }

    pub fn settings(&self) -> &FontSettingsStore {
        &self.settings
    }

    pub fn paths(&self) -> &FontPaths {
        &self.paths
    }

    fn engine(&self) -> InstallEngine<'_> {
        InstallEngine::new(&self.settings, &self.paths, self.render_cache.as_ref())
    }

    fn driver(&self) -> ConversionDriver<'_> {
        ConversionDriver::new(&self.converter, &self.content_root)
    }

    // ---- candidate fonts ----

    /// Scans the staging directory, optionally filtered to one extension.
    pub fn list_candidate_fonts(&self, ext: Option<&str>) -> Result<Vec<String>, ScanError> {
        let names = scan_fonts(Path::new(&self.settings.font_path()))?;
        Ok(match ext {
            Some(ext) => filter_by_extension(&names, ext),
            None => names,
        })
    }

    /// TTF-only view for the selection widgets; empty when the scan fails.
    pub fn ttf_fonts(&self) -> Vec<String> {
        self.list_candidate_fonts(Some("ttf")).unwrap_or_default()
    }

    /// OTF-only view for the selection widgets; empty when the scan fails.
    pub fn otf_fonts(&self) -> Vec<String> {
        self.list_candidate_fonts(Some("otf")).unwrap_or_default()
    }

    // ---- lock state & bindings ----

    pub fn is_editable(&self, slot_key: &str) -> bool {
        self.settings.is_editable(slot_key)
    }

    pub fn set_editable(&self, slot_key: &str, editable: bool) -> Result<(), String> {
        self.settings.set_editable(slot_key, editable)
    }

    pub fn bound_file(&self, slot_key: &str) -> String {
        self.settings.bound_file(slot_key)
    }

    pub fn settings_editable(&self) -> bool {
        self.settings.settings_editable()
    }

    pub fn set_settings_editable(&self, editable: bool) -> Result<(), String> {
        self.settings.set_settings_editable(editable)?;
        self.prepare_workspace();
        Ok(())
    }

    pub fn edit_localized_fonts(&self) -> bool {
        self.settings.edit_localized_fonts()
    }

    pub fn set_edit_localized_fonts(&self, enabled: bool) -> Result<(), String> {
        self.settings.set_edit_localized_fonts(enabled)
    }

    pub fn font_path(&self) -> String {
        self.settings.font_path()
    }

    pub fn set_font_path(&self, path: &str) -> Result<(), String> {
        self.settings.set_font_path(path)?;
        self.prepare_workspace();
        Ok(())
    }

    /// Raw section/key/value dump of the persisted state, for the
    /// settings panel's diagnostics view.
    pub fn all_settings(&self) -> Result<HashMap<String, HashMap<String, String>>, String> {
        self.settings.get_all()
    }

    /// Per-slot snapshots for the settings panel, honoring the
    /// localized-fonts visibility flag.
    pub fn slot_views(&self) -> Vec<SlotView> {
        visible_slots(self.settings.edit_localized_fonts())
            .into_iter()
            .map(|s| SlotView {
                key: s.key.to_string(),
                default_file: s.default_file.to_string(),
                category: s.category,
                localized: s.localized,
                tooltip: s.tooltip.to_string(),
                bound_file: self.settings.bound_file(s.key),
                editable: self.settings.is_editable(s.key),
            })
            .collect()
    }

    // ---- install / reset ----

    /// Installs a staged font into a slot. Lock state is not re-checked
    /// here; the panel disables the control, and programmatic callers are
    /// expected to consult `is_editable` first.
    pub fn install_font(&self, slot_key: &str, file_name: &str) -> Result<(), String> {
        let slot = slot(slot_key).ok_or_else(|| format!("Unknown font slot: {}", slot_key))?;
        self.engine()
            .install_font(slot, file_name)
            .map_err(|e| e.to_string())
    }

    pub fn reset_slot(&self, slot_key: &str) -> Result<(), String> {
        let slot = slot(slot_key).ok_or_else(|| format!("Unknown font slot: {}", slot_key))?;
        self.engine().reset_slot(slot).map_err(|e| e.to_string())
    }

    /// Best-effort bulk reset of every unlocked slot. Refused while the
    /// master edit lock is off.
    pub fn reset_all(&self) -> Result<ResetSummary, String> {
        if !self.settings.settings_editable() {
            log::warn!("Settings are locked; reset to defaults skipped.");
            return Err("Settings are locked.".to_string());
        }
        let summary = self.engine().reset_all();
        if summary.is_clean() {
            log::info!("Successfully reset to default fonts.");
        }
        Ok(summary)
    }

    // ---- conversion ----

    pub fn convert_file(&self, path: &Path) -> ConversionOutcome {
        self.driver().convert_file(path)
    }

    pub fn convert_folder(&self, path: &Path) -> FolderConversionReport {
        self.driver().convert_folder(path)
    }
}
