use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use ttf_parser::{name_id, Face};

use super::weight::{determine_weight, is_italic_font};
use crate::error::{Error, Result};
use crate::models::{FontEntry, TokenVocabulary};
use crate::utils::file::find_font_files;

/// Check if a file is a TrueType or OpenType font by extension and magic
pub fn is_valid_font_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "ttf" && ext != "otf" {
        return false;
    }

    let mut header = [0u8; 4];
    match fs::File::open(path).and_then(|mut file| file.read_exact(&mut header)) {
        Ok(()) => {
            header == [0x00, 0x01, 0x00, 0x00] || // TTF
            header == [0x4F, 0x54, 0x54, 0x4F] // OTF
        }
        Err(_) => false,
    }
}

fn name_string(face: &Face<'_>, ids: &[u16]) -> Option<String> {
    ids.iter().find_map(|&id| {
        face.names()
            .into_iter()
            .filter(|name| name.name_id == id)
            .find_map(|name| name.to_string())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

/// Read the naming and style data of one font file
pub fn read_font_entry(path: &Path) -> Result<FontEntry> {
    let data = fs::read(path)?;
    let face = Face::parse(&data, 0)
        .map_err(|e| Error::Font(format!("Failed to parse {}: {}", path.display(), e)))?;

    let family = name_string(&face, &[name_id::TYPOGRAPHIC_FAMILY, name_id::FAMILY])
        .ok_or_else(|| Error::Font(format!("Empty family name: {}", path.display())))?;
    let subfamily = name_string(&face, &[name_id::TYPOGRAPHIC_SUBFAMILY, name_id::SUBFAMILY])
        .unwrap_or_else(|| "Regular".to_string());
    let postscript_name = name_string(&face, &[name_id::POST_SCRIPT_NAME])
        .unwrap_or_else(|| format!("{}-{}", family, subfamily).replace(' ', ""));

    let weight = match face.weight().to_number() {
        400 => determine_weight(&subfamily),
        n => n,
    };

    Ok(FontEntry {
        postscript_name,
        family,
        subfamily: subfamily.clone(),
        weight,
        is_italic: face.is_italic() || is_italic_font(&subfamily),
        path: Some(path.to_path_buf()),
    })
}

/// Fonts available to the correlator, read from a directory of font files
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    entries: Vec<FontEntry>,
}

impl FontLibrary {
    /// Parse every font file directly inside `dir`
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Font(format!("Not a font directory: {}", dir.display())));
        }

        let files: Vec<PathBuf> = find_font_files(dir)?
            .into_iter()
            .filter(|path| is_valid_font_file(path))
            .collect();

        let entries: Vec<FontEntry> = files
            .par_iter()
            .filter_map(|path| match read_font_entry(path) {
                Ok(entry) => {
                    log::debug!(
                        "Font {}: family={}, subfamily={}, weight={}, italic={}",
                        entry.postscript_name,
                        entry.family,
                        entry.subfamily,
                        entry.weight,
                        entry.is_italic
                    );
                    Some(entry)
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        log::debug!("Loaded {} fonts from {}", entries.len(), dir.display());
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<FontEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FontEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// PostScript names first, then family names not already listed
    pub fn vocabulary(&self) -> TokenVocabulary {
        let mut vocab = TokenVocabulary::fonts(Vec::<String>::new());
        for entry in &self.entries {
            vocab.push_unique(entry.postscript_name.as_str());
        }
        for entry in &self.entries {
            vocab.push_unique(entry.family.as_str());
        }
        vocab
    }
}
