use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::ScanReport;
use crate::scan::LayerFonts;
use crate::utils::naming::clean_name;

/// Read a whole source file into memory
///
/// A path that does not name a readable file is [`Error::InputNotFound`].
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            Error::InputNotFound(path.to_path_buf())
        }
        _ => Error::Io(e),
    })
}

/// Read a token list: one token per line, blank lines and `#` comments skipped
pub fn read_token_list(path: &Path) -> Result<Vec<String>> {
    let raw = read_source(path)?;
    let content = String::from_utf8_lossy(&raw);
    Ok(content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Read structured layer fonts: a JSON array of `{"text", "fonts"}` objects
pub fn read_layer_hints(path: &Path) -> Result<Vec<LayerFonts>> {
    let raw = read_source(path)?;
    let layers: Vec<LayerFonts> = serde_json::from_slice(&raw)?;
    log::debug!("Loaded {} layer hints from {}", layers.len(), path.display());
    Ok(layers)
}

/// Font files directly inside `dir`, sorted by path
pub fn find_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_font = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_lowercase().as_str(), "ttf" | "otf"))
            .unwrap_or(false);
        if is_font {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        log::debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Default report location: `<stem>_fonts.json` next to the source
pub fn default_report_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{}_fonts.json", clean_name(&stem));
    match source.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write a report as pretty JSON, creating parent directories
pub fn write_report(path: &Path, report: &ScanReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }
    fs::write(path, report.to_json_pretty()?)?;
    log::debug!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.psd");
        assert!(matches!(read_source(&missing), Err(Error::InputNotFound(p)) if p == missing));
        // a directory is not a readable file either
        assert!(matches!(read_source(dir.path()), Err(Error::InputNotFound(_))));
    }

    #[test]
    fn token_list_skips_comments_and_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("texts.txt");
        fs::write(&list, "# layers\nWOQM TESTE DE FONT\n\n  LIGHT  \n#WOQM\n").unwrap();
        assert_eq!(read_token_list(&list).unwrap(), vec!["WOQM TESTE DE FONT", "LIGHT"]);
    }

    #[test]
    fn layer_hints_load_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layers.json");
        fs::write(&path, r#"[{"text": "LIGHT", "fonts": ["AvianoSansThin"]}]"#).unwrap();
        assert_eq!(
            read_layer_hints(&path).unwrap(),
            vec![LayerFonts {
                text: "LIGHT".to_string(),
                fonts: vec!["AvianoSansThin".to_string()],
            }]
        );

        fs::write(&path, "not json").unwrap();
        assert!(matches!(read_layer_hints(&path), Err(Error::Json(_))));
    }

    #[test]
    fn font_files_are_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.OTF", "a.ttf", "c.woff", "notes.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let names: Vec<String> = find_font_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ttf", "b.OTF"]);
    }

    #[test]
    fn report_path_sits_next_to_source() {
        assert_eq!(
            default_report_path(Path::new("designs/case.psd")),
            PathBuf::from("designs/case_fonts.json")
        );
    }
}
