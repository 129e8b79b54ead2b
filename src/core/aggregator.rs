use crate::core::{Entry, ExportDocument, ReleaseMetadata};
use crate::utils::error::{ExportError, Result};

/// Wraps all entries with the release metadata.
///
/// `total_count` is the number of records the fetcher saw; it has to match
/// the entries built from them.
pub fn assemble(
    entries: Vec<Entry>,
    total_count: usize,
    release: &ReleaseMetadata,
) -> Result<ExportDocument> {
    if entries.len() != total_count {
        return Err(ExportError::CountMismatch {
            fetched: total_count,
            entries: entries.len(),
        });
    }

    Ok(ExportDocument {
        entry_count: total_count,
        name: release.name.clone(),
        release: release.release.clone(),
        release_date: release.release_date.clone(),
        entries,
    })
}
