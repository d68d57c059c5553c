//! Text measurement backends.
//!
//! Everything downstream (truncation, snippet assembly) depends on a single
//! contract: the single-line pixel width a rendering engine would allocate to
//! a string in a given font. Two backends implement it:
//!
//! - [`GlyphMeasurer`]: real glyph advances (plus kerning) from a loaded
//!   TrueType face via `ab_glyph`.
//! - [`HeuristicMeasurer`]: a deterministic per-character advance table
//!   matching Arial metrics, available everywhere.
//!
//! Measurers are explicitly constructed and passed to consumers, so tests can
//! substitute a canned-width double.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Font descriptor sufficient to reproduce identical measurements across runs.
///
/// Two value-equal specs always yield the same width for the same string on
/// the same measurer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name, e.g. `"Arial"` or `"sans-serif"`. Distinguishes
    /// otherwise-equal descriptors; [`GlyphMeasurer`] measures every family
    /// with its single loaded face.
    pub family: String,
    /// Size in CSS pixels.
    pub size: f32,
    /// Optional weight keyword (`"bold"`). Carried for value identity and
    /// serialization only; the shipped backends measure regular-weight
    /// metrics.
    #[serde(default)]
    pub weight: Option<String>,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: None,
        }
    }

    /// The family every Google SERP text style uses.
    pub fn arial(size: f32) -> Self {
        Self::new("Arial", size)
    }
}

/// Measurement failure. The only expected case is an environment with no
/// usable font face; callers must propagate it rather than treat unmeasured
/// text as validated.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("no text measurement surface available: {0}")]
    EnvironmentUnavailable(String),
}

/// The measurement contract (§ "width oracle").
///
/// Empty input must measure to `0.0`. Implementations hold no mutable state
/// observable through this call, so a `&dyn TextMeasurer` can be shared
/// freely across callers.
pub trait TextMeasurer {
    /// Rendered single-line pixel width of `text` in `font`, ignoring
    /// wrapping.
    fn measure(&self, text: &str, font: &FontSpec) -> Result<f32, MeasureError>;
}

/// Candidate faces probed by [`GlyphMeasurer::from_system_fonts`], most
/// Arial-like first.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Glyph-advance measurer backed by a loaded TrueType face.
///
/// Width is the sum of horizontal advances plus pair kerning, scaled to the
/// requested pixel size. Every [`FontSpec`] is measured with the single
/// loaded face, the way a renderer substitutes one physical sans-serif for
/// every requested family. The face is immutable after construction, so the
/// measurer is `Send + Sync` and per-call state cannot leak between callers.
#[derive(Debug)]
pub struct GlyphMeasurer {
    face: FontVec,
}

impl GlyphMeasurer {
    /// Build a measurer from raw TrueType/OpenType bytes.
    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<Self, MeasureError> {
        let face = FontVec::try_from_vec(bytes)
            .map_err(|e| MeasureError::EnvironmentUnavailable(e.to_string()))?;
        Ok(Self { face })
    }

    /// Load a face from a file on disk.
    pub fn from_font_file(path: impl AsRef<Path>) -> Result<Self, MeasureError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            MeasureError::EnvironmentUnavailable(format!("{}: {e}", path.display()))
        })?;
        Self::from_font_bytes(bytes)
    }

    /// Probe well-known system font locations for a sans-serif face.
    ///
    /// `ab_glyph` does not discover OS fonts, so this is the moral
    /// equivalent of registering a fallback "sans-serif" face up front.
    pub fn from_system_fonts() -> Result<Self, MeasureError> {
        for path in SYSTEM_FONT_PATHS {
            if let Ok(bytes) = std::fs::read(path) {
                if let Ok(m) = Self::from_font_bytes(bytes) {
                    log::debug!("loaded measurement face from {path}");
                    return Ok(m);
                }
            }
        }
        Err(MeasureError::EnvironmentUnavailable(
            "no sans-serif font face found on this system".into(),
        ))
    }
}

impl TextMeasurer for GlyphMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<f32, MeasureError> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let scaled = self.face.as_scaled(PxScale::from(font.size));
        let mut width = 0.0f32;
        let mut prev = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        Ok(width)
    }
}

/// Deterministic fallback measurer using Arial advance widths.
///
/// Never fails and never disagrees with itself, so it is safe anywhere a
/// degraded-but-stable approximation beats an `EnvironmentUnavailable`
/// error. No kerning; width is strictly increasing in prefix length.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

/// Arial advance width in 1/1000 em for one character.
fn advance_milliem(ch: char) -> u32 {
    match ch {
        'i' | 'j' | 'l' => 222,
        'f' | 't' => 278,
        'r' => 333,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'm' => 833,
        'w' => 722,
        'a'..='z' => 556,
        'I' => 278,
        'J' => 500,
        'L' => 556,
        'F' | 'T' | 'Z' => 611,
        'C' | 'D' | 'G' | 'H' | 'N' | 'O' | 'Q' | 'R' | 'U' => 722,
        'M' => 833,
        'W' => 944,
        'A'..='Z' => 667,
        '0'..='9' => 556,
        ' ' | '!' | ',' | '.' | '/' | ':' | ';' | '[' | '\\' | ']' => 278,
        '"' => 355,
        '\'' => 191,
        '(' | ')' | '-' | '`' => 333,
        '*' => 389,
        '+' | '<' | '=' | '>' | '^' | '~' | '|' => 584,
        '#' | '$' | '?' | '_' => 556,
        '%' => 889,
        '&' => 667,
        '@' => 1015,
        '{' | '}' => 334,
        _ => 600,
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<f32, MeasureError> {
        let units: u32 = text.chars().map(advance_milliem).sum();
        Ok(units as f32 * font.size / 1000.0)
    }
}

/// Runtime-selected measurer: real glyph metrics when a face is available,
/// the Arial heuristic otherwise.
pub enum Measurer {
    Glyph(GlyphMeasurer),
    Heuristic(HeuristicMeasurer),
}

impl Measurer {
    /// Pick the best backend the environment supports. The fallback is taken
    /// loudly (a warning is logged), never silently.
    pub fn detect() -> Self {
        match GlyphMeasurer::from_system_fonts() {
            Ok(g) => Measurer::Glyph(g),
            Err(e) => {
                log::warn!("{e}; falling back to Arial-metric heuristic");
                Measurer::Heuristic(HeuristicMeasurer)
            }
        }
    }
}

impl TextMeasurer for Measurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<f32, MeasureError> {
        match self {
            Measurer::Glyph(g) => g.measure(text, font),
            Measurer::Heuristic(h) => h.measure(text, font),
        }
    }
}
