use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Workbook has no sheets: {0}")]
    EmptyWorkbook(String),

    #[error("Workbook read error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font load error: {0}")]
    Font(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] competitor_lens_common::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
