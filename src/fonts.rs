//! Process-wide font registry.
//!
//! Families are registered once at startup, from the fonts bundled into the
//! binary and optionally from a directory of `.ttf`/`.otf` files. File names
//! follow `Family-Weight.ttf` (`Roboto-Bold.ttf`, `OpenSans-Regular.ttf`).
//!
//! Lookups never fail: an unknown family resolves to [`DEFAULT_FAMILY`], and a
//! family without a bold face resolves to its regular face.

use ab_glyph::FontArc;
use include_dir::{include_dir, Dir};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::error::CountdownError;

/// Fonts embedded at compile time.
static BUNDLED_FONTS: Dir = include_dir!("$CARGO_MANIFEST_DIR/fonts");

static REGISTRY: OnceLock<FontRegistry> = OnceLock::new();

/// Family used when the requested one is not registered.
pub const DEFAULT_FAMILY: &str = "DejaVuSans";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    /// Map a file-name weight suffix. Styles we don't render return `None`.
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "" | "regular" | "medium" | "book" => Some(FontWeight::Regular),
            "bold" | "semibold" | "extrabold" | "black" | "heavy" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

#[derive(Default)]
struct FontFamily {
    regular: Option<FontArc>,
    bold: Option<FontArc>,
}

/// Registered font families, keyed by normalized family name.
#[derive(Default)]
pub struct FontRegistry {
    families: HashMap<String, FontFamily>,
}

/// Normalize a family name for lookup: `"Open Sans"` and `"OpenSans"` match.
fn family_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split a font file stem into family and weight.
///
/// `"Roboto-Bold"` → `("Roboto", Bold)`, `"Lato"` → `("Lato", Regular)`.
pub fn parse_font_file_stem(stem: &str) -> Option<(String, FontWeight)> {
    let (family, suffix) = match stem.rsplit_once('-') {
        Some((family, suffix)) => (family, suffix),
        None => (stem, ""),
    };
    if family.is_empty() {
        return None;
    }
    FontWeight::from_suffix(suffix).map(|weight| (family.to_string(), weight))
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "ttf" | "otf"))
        .unwrap_or(false)
}

impl FontRegistry {
    /// Registry holding only the fonts embedded in the binary.
    pub fn bundled() -> Result<Self, CountdownError> {
        let mut registry = Self::default();
        for file in BUNDLED_FONTS.files() {
            if !is_font_file(file.path()) {
                continue;
            }
            let font = FontArc::try_from_slice(file.contents()).map_err(|e| {
                CountdownError::Font(format!("{}: {}", file.path().display(), e))
            })?;
            registry.register_file(file.path(), font);
        }
        Ok(registry)
    }

    /// Register every font file in `dir` on top of the current set.
    ///
    /// Returns the number of faces registered. Unreadable or unparsable files
    /// are skipped with a warning.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, CountdownError> {
        let mut count = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !is_font_file(&path) {
                continue;
            }
            let font = match std::fs::read(&path)
                .map_err(|e| e.to_string())
                .and_then(|bytes| FontArc::try_from_vec(bytes).map_err(|e| e.to_string()))
            {
                Ok(font) => font,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping font file");
                    continue;
                }
            };
            if self.register_file(&path, font) {
                count += 1;
            }
        }
        Ok(count)
    }

    fn register_file(&mut self, path: &Path, font: FontArc) -> bool {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return false;
        };
        let Some((family, weight)) = parse_font_file_stem(stem) else {
            debug!(path = %path.display(), "skipping unsupported font style");
            return false;
        };
        self.register(&family, weight, font);
        true
    }

    pub fn register(&mut self, family: &str, weight: FontWeight, font: FontArc) {
        let entry = self.families.entry(family_key(family)).or_default();
        match weight {
            FontWeight::Regular => entry.regular = Some(font),
            FontWeight::Bold => entry.bold = Some(font),
        }
        debug!(family, ?weight, "registered font");
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(&family_key(family))
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Resolve a face, falling back to the default family and then to
    /// whichever weight exists.
    pub fn face(&self, family: &str, weight: FontWeight) -> Option<&FontArc> {
        let fam = self
            .families
            .get(&family_key(family))
            .or_else(|| self.families.get(&family_key(DEFAULT_FAMILY)))?;

        let (preferred, other) = match weight {
            FontWeight::Regular => (&fam.regular, &fam.bold),
            FontWeight::Bold => (&fam.bold, &fam.regular),
        };
        preferred.as_ref().or(other.as_ref())
    }
}

/// Initialize the process-wide registry. Call once before serving traffic.
pub fn init(fonts_dir: Option<&Path>) -> Result<&'static FontRegistry, CountdownError> {
    let mut fonts = FontRegistry::bundled()?;
    if let Some(dir) = fonts_dir {
        let count = fonts.load_dir(dir)?;
        info!(dir = %dir.display(), count, "loaded fonts from directory");
    }
    info!(families = fonts.family_count(), "font registry ready");

    REGISTRY
        .set(fonts)
        .map_err(|_| CountdownError::Font("font registry already initialized".to_string()))?;
    Ok(registry())
}

/// The process-wide registry, lazily holding only bundled fonts if
/// [`init`] was never called.
pub fn registry() -> &'static FontRegistry {
    REGISTRY.get_or_init(|| {
        FontRegistry::bundled().unwrap_or_else(|e| {
            warn!(error = %e, "bundled fonts unavailable, text will not be drawn");
            FontRegistry::default()
        })
    })
}
