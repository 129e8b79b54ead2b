use crate::core::ExportDocument;
use crate::utils::error::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::io::Write;

pub const GZIP_SUFFIX: &str = ".gz";

/// Pretty JSON with four-space indentation.
pub fn to_json_bytes(document: &ExportDocument) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

pub fn gzip_filename(json_filename: &str) -> String {
    format!("{}{}", json_filename, GZIP_SUFFIX)
}
