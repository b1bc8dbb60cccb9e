//! Placeholder screenshot generator
//!
//! Renders one PNG per [`ScreenshotSpec`] and a README manifest into the
//! output directory. Existing files are overwritten.

pub mod font;
pub mod manifest;
pub mod render;

pub use font::Typeface;
pub use render::render_screenshot;

use crate::error::Result;
use competitor_lens_common::ScreenshotSpec;
use image::ImageFormat;
use rand::Rng;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub files: Vec<PathBuf>,
    pub manifest: PathBuf,
}

pub fn generate_all<R: Rng>(
    output_dir: &Path,
    specs: &[ScreenshotSpec],
    typeface: &Typeface,
    rng: &mut R,
) -> Result<GenerationSummary> {
    std::fs::create_dir_all(output_dir)?;

    println!("Generating crypto exchange screenshots... (font: {})", typeface.describe());

    let mut files = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = output_dir.join(spec.file_name());
        println!("- Generating: {}", spec.file_name());

        let canvas = render_screenshot(spec, typeface, rng);
        canvas.save_with_format(&path, ImageFormat::Png)?;
        tracing::debug!(path = %path.display(), "saved screenshot");
        files.push(path);
    }

    println!("\n✅ {} screenshots generated!", files.len());
    println!("📁 Location: {}", output_dir.display());

    let manifest = manifest::write_manifest(output_dir, specs)?;
    println!("📝 README created: {}", manifest.display());

    Ok(GenerationSummary {
        files,
        manifest,
    })
}
