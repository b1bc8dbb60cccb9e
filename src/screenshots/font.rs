//! Text rendering with a TrueType font or the built-in 8×8 bitmap font

use crate::error::{PrepError, Result};
use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use std::path::{Path, PathBuf};

/// Bitmap glyph edge (px) before scaling
const GLYPH_SIZE: i32 = 8;

pub enum Typeface {
    TrueType { font: FontVec, path: PathBuf },
    Builtin,
}

impl Typeface {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| PrepError::Font(format!("{}: {}", path.display(), e)))?;
        Ok(Typeface::TrueType { font, path: path.to_path_buf() })
    }

    /// First candidate that loads, otherwise the built-in font
    pub fn load(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match Self::from_file(path) {
                Ok(typeface) => {
                    tracing::debug!(font = %path.display(), "using TrueType font");
                    return typeface;
                }
                Err(e) => tracing::debug!(error = %e, "font unavailable"),
            }
        }
        tracing::debug!("no TrueType font loaded, using built-in bitmap font");
        Typeface::Builtin
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }

    pub fn describe(&self) -> String {
        match self {
            Typeface::TrueType { path, .. } => path.display().to_string(),
            Typeface::Builtin => "built-in 8x8".to_string(),
        }
    }

    /// Draws `text` with its top-left corner at `origin`
    pub fn draw(&self, canvas: &mut RgbImage, origin: (i32, i32), size: f32, color: Rgb<u8>, text: &str) {
        match self {
            Typeface::TrueType { font, .. } => {
                draw_text_mut(canvas, color, origin.0, origin.1, PxScale::from(size), font, text);
            }
            Typeface::Builtin => draw_bitmap_text(canvas, origin, size, color, text),
        }
    }
}

/// Integer scale so the 8px glyphs roughly match `size`
fn bitmap_scale(size: f32) -> i32 {
    ((size / GLYPH_SIZE as f32).round() as i32).max(1)
}

/// Latin Extended-A letters missing from font8x8, drawn as their base letter
fn fold_extended(ch: char) -> char {
    match ch {
        'ğ' => 'g',
        'Ğ' => 'G',
        'ş' => 's',
        'Ş' => 'S',
        'ı' => 'i',
        'İ' => 'I',
        other => other,
    }
}

fn glyph(ch: char) -> [u8; 8] {
    let ch = fold_extended(ch);
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap_text(canvas: &mut RgbImage, origin: (i32, i32), size: f32, color: Rgb<u8>, text: &str) {
    let scale = bitmap_scale(size);
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);

    for (index, ch) in text.chars().enumerate() {
        let glyph_x = origin.0 + index as i32 * GLYPH_SIZE * scale;
        if glyph_x >= width {
            break;
        }

        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = glyph_x + col * scale;
                let py = origin.1 + row as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (x, y) = (px + dx, py + dy);
                        if x >= 0 && y >= 0 && x < width && y < height {
                            canvas.put_pixel(x as u32, y as u32, color);
                        }
                    }
                }
            }
        }
    }
}
