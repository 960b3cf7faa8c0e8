use std::path::Path;

use encoding_rs::Encoding;
use thiserror::Error;
use tracing::{info, warn};

use crate::lead::RawLead;
use crate::settings::Settings;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// Load every (title, body) pair from a CSV export, in file order.
pub fn read_rows(path: &Path, settings: &Settings) -> Result<Vec<RawLead>, IngestError> {
    let bytes = std::fs::read(path)?;
    let rows = parse_rows(&bytes, settings)?;
    info!(path = %path.display(), rows = rows.len(), "loaded input rows");
    Ok(rows)
}

pub fn parse_rows(bytes: &[u8], settings: &Settings) -> Result<Vec<RawLead>, IngestError> {
    let encoding = Encoding::for_label(settings.encoding.as_bytes())
        .ok_or_else(|| IngestError::UnknownEncoding(settings.encoding.clone()))?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(
            encoding = used.name(),
            "input contained undecodable bytes; replaced with U+FFFD"
        );
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
    };
    let title_idx = column(&settings.title_column)?;
    let body_idx = column(&settings.body_column)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(RawLead::new(
            record.get(title_idx).unwrap_or_default(),
            record.get(body_idx).unwrap_or_default(),
        ));
    }
    Ok(rows)
}
