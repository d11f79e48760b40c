use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Seeds the defaults backup directory with the currently installed fonts,
/// once. An existing backup is never refreshed: it is the canonical
/// original state every reset restores.
///
/// The normal destination is copied as a tree (never overwriting a file
/// already present), then every file directly inside the alternate
/// destination is copied flat into the backup. Individual copy failures are
/// logged and skipped. Returns whether seeding actually ran.
pub fn ensure_defaults_seeded(
    defaults_dir: &Path,
    normal_src: &Path,
    alternate_src: &Path,
) -> Result<bool, String> {
    if defaults_dir.exists() {
        return Ok(false);
    }

    fs::create_dir_all(defaults_dir)
        .map_err(|e| format!("Failed to create defaults folder: {}", e))?;

    copy_tree_no_overwrite(normal_src, defaults_dir);
    copy_files_flat(alternate_src, defaults_dir);

    Ok(true)
}

fn copy_tree_no_overwrite(src: &Path, dest_root: &Path) {
    if !src.is_dir() {
        log::warn!("Source folder missing, nothing to back up: {}", src.display());
        return;
    }

    for entry in WalkDir::new(src).into_iter().filter_map(|e| e.ok()) {
        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue,
        };
        let dest = dest_root.join(rel);

        if entry.file_type().is_dir() {
            if let Err(e) = fs::create_dir_all(&dest) {
                log::error!("Failed to create folder {}: {}", dest.display(), e);
            }
            continue;
        }
        if dest.exists() {
            continue;
        }
        match fs::copy(entry.path(), &dest) {
            Ok(_) => log::info!("Copied file: {}", entry.path().display()),
            Err(e) => log::error!("Failed to copy file {}: {}", entry.path().display(), e),
        }
    }
}

fn copy_files_flat(src: &Path, dest_root: &Path) {
    let entries = match fs::read_dir(src) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Source folder missing, nothing to back up: {} ({})", src.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_root.join(name);
        match fs::copy(&path, &dest) {
            Ok(_) => log::info!("Copied file: {}", path.display()),
            Err(e) => log::error!("Failed to copy file {}: {}", path.display(), e),
        }
    }
}
