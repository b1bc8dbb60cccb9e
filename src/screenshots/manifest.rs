//! README manifest listing the generated screenshots

use crate::error::Result;
use competitor_lens_common::ScreenshotSpec;
use std::path::{Path, PathBuf};

pub const MANIFEST_NAME: &str = "README.md";

pub fn build_manifest(specs: &[ScreenshotSpec]) -> String {
    let mut doc = String::new();
    doc.push_str("# Crypto Exchange Screenshots\n\n");
    doc.push_str("This folder contains sample crypto exchange screenshots.\n\n");
    doc.push_str("## Files\n\n");

    for spec in specs {
        doc.push_str(&format!("- **{}**: {}\n", spec.file_name(), spec.caption));
    }

    doc.push_str("\n## Usage\n\n");
    doc.push_str("These images can be used on the feature detail pages of the CompetitorLens platform.\n");
    doc.push_str("In the real project they should be replaced with actual exchange screenshots.\n");
    doc
}

pub fn write_manifest(output_dir: &Path, specs: &[ScreenshotSpec]) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_NAME);
    std::fs::write(&path, build_manifest(specs))?;
    Ok(path)
}
