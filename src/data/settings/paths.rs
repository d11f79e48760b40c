const SETTINGS_FILE_NAME: &str = "EditorFontSettings.ini";
const TEMP_FONTS_DIR_NAME: &str = "TempFonts";
const DEFAULTS_DIR_NAME: &str = "Defaults";

/// The working directories every engine operation resolves against.
#[derive(Debug, Clone)]
pub struct FontPaths {
    /// Default staging directory; the live value is the store's `FontPath`
    /// setting, which starts here and may be repointed by the user.
    pub temp_fonts_dir: PathBuf,
    pub defaults_dir: PathBuf,
    pub normal_dest_dir: PathBuf,
    pub alternate_dest_dir: PathBuf,
}

impl FontPaths {
    pub fn resolve(content_root: &Path, normal_dest: &Path, alternate_dest: &Path) -> Self {
        Self {
            temp_fonts_dir: default_temp_fonts_dir(content_root),
            defaults_dir: content_root.join(DEFAULTS_DIR_NAME),
            normal_dest_dir: normal_dest.to_path_buf(),
            alternate_dest_dir: alternate_dest.to_path_buf(),
        }
    }

    pub fn destination_dir(&self, category: DestinationCategory) -> &Path {
        match category {
            DestinationCategory::Normal => &self.normal_dest_dir,
            DestinationCategory::Alternate => &self.alternate_dest_dir,
        }
    }
}

pub fn settings_file_path(content_root: &Path) -> PathBuf {
    content_root.join(SETTINGS_FILE_NAME)
}

pub fn default_temp_fonts_dir(content_root: &Path) -> PathBuf {
    content_root.join(TEMP_FONTS_DIR_NAME)
}

/// Creates the staging directory if absent. Skipped entirely while the
/// master edit lock is off or the staging path is unset. The defaults
/// directory is not handled here: its creation belongs to the one-time
/// backup seed.
pub fn ensure_staging_dir(settings_editable: bool, font_path: &str) {
    if !settings_editable || font_path.is_empty() {
        return;
    }

    let dir = Path::new(font_path);
    if dir.is_dir() {
        log::debug!("Folder found at {}", dir.display());
        return;
    }
    match fs::create_dir_all(dir) {
        Ok(()) => log::info!("Folder created at {}", dir.display()),
        Err(e) => log::error!("Folder failed to be created at {}: {}", dir.display(), e),
    }
}
