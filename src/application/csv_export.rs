use crate::domain::{
    errors::{AppError, ExportResult},
    sales::{DISPLAYED_COLUMNS, Transaction},
};

pub const EXPORT_FILE_NAME: &str = "transactions_export.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// A generated export, ready to hand to a [`DownloadSink`]
#[derive(Debug, Clone, PartialEq)]
pub struct CsvArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

/// Delivers an artifact to the user, e.g. as a browser download
pub trait DownloadSink {
    fn download(&self, artifact: &CsvArtifact) -> Result<(), AppError>;
}

/// Serialize transactions as CSV text.
///
/// One header line plus one line per row, joined by `\n` with no trailing
/// newline. Customer names are always quoted but embedded quotes are written
/// as-is, so a name containing `"` yields a malformed field.
pub fn render_csv(rows: &[Transaction]) -> ExportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(DISPLAYED_COLUMNS.iter().map(|column| column.header()))
        .map_err(|e| AppError::ExportError(e.to_string()))?;

    for row in rows {
        writer
            .write_record(DISPLAYED_COLUMNS.iter().map(|column| column.csv_field(row)))
            .map_err(|e| AppError::ExportError(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::ExportError(e.error().to_string()))?;
    let mut content =
        String::from_utf8(bytes).map_err(|e| AppError::ExportError(e.to_string()))?;

    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}

/// Build the export artifact, or `None` when there is nothing to export.
pub fn export_csv(rows: &[Transaction]) -> ExportResult<Option<CsvArtifact>> {
    if rows.is_empty() {
        return Ok(None);
    }

    Ok(Some(CsvArtifact {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        content: render_csv(rows)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_for_no_rows() {
        assert_eq!(render_csv(&[]).unwrap(), "Order ID,Customer,Amount,Status,Date");
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        let rows = [Transaction::new("ORD-7", "Bob \"Bobby\" Lee", 10.0, "failed", "2024-03-01")];
        let csv = render_csv(&rows).unwrap();
        assert!(csv.ends_with("ORD-7,\"Bob \"Bobby\" Lee\",$10,failed,2024-03-01"));
    }
}
