use editor_font_manager::{ConversionDriver, ConversionOutcome, ConverterConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn config_with(executable: PathBuf, tmp: &TempDir) -> ConverterConfig {
    let script = tmp.path().join("convert_otf_ttf.py");
    fs::write(&script, "# converter driver script\n").unwrap();
    ConverterConfig { executable, script }
}

/// A stand-in converter honoring the real argument contract:
/// `<exe> -lang=py -script <script> <input> <output>`.
#[cfg(unix)]
fn fake_converter(tmp: &TempDir, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = tmp.path().join("fontforge");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn existing_output_is_skipped_without_running_the_tool() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // Deliberately bogus executable: it must never be invoked.
    let config = config_with(tmp.path().join("does-not-exist"), &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let source = tmp.path().join("foo.ttf");
    let collision = tmp.path().join("foo.otf");
    fs::write(&source, b"source").unwrap();
    fs::write(&collision, b"already-here").unwrap();

    assert_eq!(
        driver.convert_file(&source),
        ConversionOutcome::SkippedAlreadyExists
    );
    assert_eq!(
        fs::read(&collision).unwrap(),
        b"already-here",
        "existing output must be left untouched"
    );
}

#[test]
fn unsupported_extension_fails_without_running_the_tool() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config_with(tmp.path().join("does-not-exist"), &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let source = tmp.path().join("notes.txt");
    fs::write(&source, b"text").unwrap();

    assert_eq!(driver.convert_file(&source), ConversionOutcome::Failed);
}

#[test]
fn unlaunchable_converter_reports_failure() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config_with(tmp.path().join("does-not-exist"), &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let source = tmp.path().join("foo.ttf");
    fs::write(&source, b"source").unwrap();

    assert_eq!(driver.convert_file(&source), ConversionOutcome::Failed);
    assert!(!tmp.path().join("foo.otf").exists());
}

#[cfg(unix)]
#[test]
fn conversion_swaps_the_extension_in_place() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exe = fake_converter(&tmp, r#"cp "$4" "$5""#);
    let config = config_with(exe, &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let source = tmp.path().join("foo.ttf");
    fs::write(&source, b"glyphs").unwrap();

    assert_eq!(driver.convert_file(&source), ConversionOutcome::Converted);
    assert_eq!(fs::read(tmp.path().join("foo.otf")).unwrap(), b"glyphs");
}

#[cfg(unix)]
#[test]
fn relative_sources_are_resolved_under_the_content_root() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exe = fake_converter(&tmp, r#"cp "$4" "$5""#);
    let config = config_with(exe, &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let staging = tmp.path().join("TempFonts");
    fs::create_dir_all(&staging).unwrap();
    fs::write(staging.join("rel.otf"), b"rel-glyphs").unwrap();

    assert_eq!(
        driver.convert_file(Path::new("TempFonts/rel.otf")),
        ConversionOutcome::Converted
    );
    assert_eq!(fs::read(staging.join("rel.ttf")).unwrap(), b"rel-glyphs");
}

#[cfg(unix)]
#[test]
fn nonzero_exit_status_is_a_failure() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exe = fake_converter(&tmp, "exit 3");
    let config = config_with(exe, &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let source = tmp.path().join("foo.ttf");
    fs::write(&source, b"source").unwrap();

    assert_eq!(driver.convert_file(&source), ConversionOutcome::Failed);
}

#[cfg(unix)]
#[test]
fn missing_output_after_a_clean_exit_is_a_failure() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exe = fake_converter(&tmp, "exit 0");
    let config = config_with(exe, &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let source = tmp.path().join("foo.ttf");
    fs::write(&source, b"source").unwrap();

    assert_eq!(driver.convert_file(&source), ConversionOutcome::Failed);
}

#[cfg(unix)]
#[test]
fn folder_conversion_counts_failures_and_keeps_going() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exe = fake_converter(
        &tmp,
        r#"case "$4" in *bad*) exit 1;; esac
cp "$4" "$5""#,
    );
    let config = config_with(exe, &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let dir = tmp.path().join("batch");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("a.ttf"), b"a").unwrap();
    fs::write(dir.join("bad.ttf"), b"b").unwrap();
    fs::write(dir.join("c.otf"), b"c").unwrap();
    fs::write(dir.join("ignored.txt"), b"x").unwrap();

    let report = driver.convert_folder(&dir);

    assert_eq!(report.attempted, 3, "only font files count as attempted");
    assert_eq!(report.failed, 1);
    assert!(!report.is_clean());
    assert!(dir.join("a.otf").exists());
    assert!(dir.join("c.ttf").exists());
    assert!(!dir.join("bad.otf").exists());
}

#[test]
fn missing_folder_yields_an_empty_report() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config_with(tmp.path().join("does-not-exist"), &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let report = driver.convert_folder(&tmp.path().join("nowhere"));
    assert_eq!(report.attempted, 0);
    assert_eq!(report.failed, 0);
    assert!(report.is_clean());
}

#[test]
fn fontless_folder_yields_an_empty_report() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config_with(tmp.path().join("does-not-exist"), &tmp);
    let driver = ConversionDriver::new(&config, tmp.path());

    let dir = tmp.path().join("empty");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("readme.txt"), b"no fonts").unwrap();

    let report = driver.convert_folder(&dir);
    assert_eq!(report.attempted, 0);
    assert!(report.is_clean());
}
