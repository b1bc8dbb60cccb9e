//! CompetitorLens Prep Common Library
//!
//! Static tables shared by the workbook inspector and the screenshot generator

pub mod types;
pub mod layout;
pub mod palette;
pub mod error;

pub use types::{ScreenshotSpec, VariantKind, REQUIRED_COLUMNS, SCREENSHOTS};
pub use layout::{CanvasLayout, PanelRect};
pub use palette::{Rgb, background_for, parse_hex_color};
pub use error::{Error, Result};
