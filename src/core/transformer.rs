use crate::core::{Entry, Field, RawRecord};
use crate::utils::error::{ExportError, Result};

/// Reshapes one record into an EBI Search entry, one field per column in
/// column order. Keys the record carries beyond `columns` are dropped.
pub fn format_entry(record: &RawRecord, columns: &[String]) -> Result<Entry> {
    let fields = columns
        .iter()
        .map(|column| {
            record
                .get(column)
                .map(|value| Field {
                    name: column.clone(),
                    value: value.clone(),
                })
                .ok_or_else(|| ExportError::MissingField {
                    column: column.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Entry {
        cross_references: Vec::new(),
        fields,
    })
}

pub fn format_page(records: &[RawRecord], columns: &[String]) -> Result<Vec<Entry>> {
    records
        .iter()
        .map(|record| format_entry(record, columns))
        .collect()
}
