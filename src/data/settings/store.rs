const GENERAL_SECTION: &str = "General";
const FONTS_SECTION: &str = "Fonts";
const LOCKS_SECTION: &str = "Locks";

/// Persistent slot state: global flags, per-slot file bindings and the
/// per-entry lock map, all in one flat INI file rewritten after every
/// mutating operation.
pub struct FontSettingsStore {
    ini: Mutex<IniFile>,
    file_path: PathBuf,
}

impl FontSettingsStore {
    /// `default_font_path` seeds the staging-directory setting on first run.
    pub fn new(file_path: PathBuf, default_font_path: &str) -> Self {
        let ini = if file_path.exists() {
            IniFile::load(&file_path)
        } else {
            IniFile::new()
        };

        let store = Self {
            ini: Mutex::new(ini),
            file_path,
        };

        store.apply_defaults(default_font_path);
        store
    }

    fn apply_defaults(&self, default_font_path: &str) {
        let mut ini = match self.ini.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };

        let defaults: &[(&str, &str)] = &[
            ("SettingsEditable", "false"),
            ("EditLocalizedFonts", "false"),
        ];

        let general = ini.section(GENERAL_SECTION);
        for (key, value) in defaults {
            if !general.exists(key) {
                general.set(key, value);
            }
        }
        if !general.exists(FONT_PATH_KEY) {
            general.set(FONT_PATH_KEY, default_font_path);
        }

        ini.section(FONTS_SECTION);
        ini.section(LOCKS_SECTION);

        drop(ini);
        let _ = self.save();
    }

    pub fn save(&self) -> Result<(), String> {
        let ini = self.ini.lock().map_err(|e| e.to_string())?;
        ini.save(&self.file_path)
    }

    pub fn get_all(&self) -> Result<HashMap<String, HashMap<String, String>>, String> {
        let ini = self.ini.lock().map_err(|e| e.to_string())?;
        Ok(ini.to_map())
    }

    fn get(&self, section: &str, key: &str) -> Result<Option<String>, String> {
        let ini = self.ini.lock().map_err(|e| e.to_string())?;
        Ok(ini
            .get_section(section)
            .and_then(|s| s.get(key))
            .map(|v| v.to_string()))
    }

    fn set(&self, section: &str, key: &str, value: &str) -> Result<(), String> {
        let mut ini = self.ini.lock().map_err(|e| e.to_string())?;
        ini.section(section).set(key, value);
        drop(ini);
        self.save()
    }

    fn get_bool(&self, section: &str, key: &str) -> bool {
        self.get(section, key)
            .ok()
            .flatten()
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn settings_editable(&self) -> bool {
        self.get_bool(GENERAL_SECTION, "SettingsEditable")
    }

    pub fn set_settings_editable(&self, editable: bool) -> Result<(), String> {
        self.set(
            GENERAL_SECTION,
            "SettingsEditable",
            if editable { "true" } else { "false" },
        )
    }

    pub fn edit_localized_fonts(&self) -> bool {
        self.get_bool(GENERAL_SECTION, "EditLocalizedFonts")
    }

    pub fn set_edit_localized_fonts(&self, enabled: bool) -> Result<(), String> {
        self.set(
            GENERAL_SECTION,
            "EditLocalizedFonts",
            if enabled { "true" } else { "false" },
        )
    }

    /// The staging directory scanned for candidate fonts. Empty when unset.
    pub fn font_path(&self) -> String {
        self.get(GENERAL_SECTION, FONT_PATH_KEY)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    pub fn set_font_path(&self, path: &str) -> Result<(), String> {
        self.set(GENERAL_SECTION, FONT_PATH_KEY, &normalize_dir(path))
    }

    /// Lock state for a slot (or the `FontPath` pseudo-entry). Absent
    /// entries default to editable, and the first read records an explicit
    /// `true` so later bulk operations see the same answer the caller did.
    pub fn is_editable(&self, key: &str) -> bool {
        let stored = self
            .get(LOCKS_SECTION, key)
            .ok()
            .flatten()
            .map(|v| v.eq_ignore_ascii_case("true"));

        match stored {
            Some(editable) => editable,
            None => {
                let _ = self.set_editable(key, true);
                true
            }
        }
    }

    pub fn set_editable(&self, key: &str, editable: bool) -> Result<(), String> {
        self.set(LOCKS_SECTION, key, if editable { "true" } else { "false" })
    }

    /// Bound file name for a slot; empty when the slot has no selection.
    pub fn bound_file(&self, key: &str) -> String {
        self.get(FONTS_SECTION, key).ok().flatten().unwrap_or_default()
    }

    /// An empty `file_name` clears the binding.
    pub fn set_bound_file(&self, key: &str, file_name: &str) -> Result<(), String> {
        if file_name.trim().is_empty() {
            let mut ini = self.ini.lock().map_err(|e| e.to_string())?;
            ini.section(FONTS_SECTION).remove(key);
            drop(ini);
            return self.save();
        }
        self.set(FONTS_SECTION, key, file_name)
    }
}

/// Trims trailing path separators the way directory pickers tend to hand
/// paths back.
pub fn normalize_dir(path: &str) -> String {
    let trimmed = path.trim();
    trimmed.trim_end_matches(['/', '\\']).to_string()
}
