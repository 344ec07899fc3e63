use crate::{error::upload::UploadError, service::csv::EXPECTED_HEADER};

/// A raw upload as handed over by the HTTP layer.
pub struct RawUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A validated CSV document whose header has been checked.
///
/// Holds the decoded text so callers can take fresh row iterators positioned
/// after the header as often as they need.
pub struct CsvDocument {
    text: String,
}

impl CsvDocument {
    /// Returns an iterator over the data rows, skipping the header.
    ///
    /// The reader is flexible so ragged rows surface as records for the row
    /// parser to reject rather than as reader errors.
    pub fn rows(&self) -> csv::StringRecordsIntoIter<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(self.text.as_bytes())
            .into_records()
    }
}

/// Validates an upload's shape before it is admitted into the pipeline.
///
/// Checks run in a fixed order and short-circuit on the first failure:
/// missing file, non-CSV filename/content type, empty file, undecodable
/// bytes, missing header, wrong header, header without data rows.
pub fn validate(upload: Option<&RawUpload>) -> Result<CsvDocument, UploadError> {
    let Some(upload) = upload else {
        return Err(UploadError::NoFileUploaded);
    };

    // The .csv extension is mandatory; a declared content type may only
    // reject further, never admit a wrongly named file.
    let name_is_csv = upload.filename.to_ascii_lowercase().ends_with(".csv");
    let declared_type_is_csv = matches!(
        upload.content_type.as_deref(),
        None | Some("text/csv") | Some("application/csv")
    );
    if !name_is_csv || !declared_type_is_csv {
        return Err(UploadError::WrongFormat);
    }

    if upload.bytes.is_empty() {
        return Err(UploadError::EmptyFile);
    }

    let text = std::str::from_utf8(&upload.bytes)
        .map_err(|e| UploadError::ReadError(e.to_string()))?
        .to_owned();

    let header_line = text.lines().next().unwrap_or("").trim_end_matches('\r');
    if header_line.trim().is_empty() {
        return Err(UploadError::MissingHeader);
    }

    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();
    if header != EXPECTED_HEADER {
        return Err(UploadError::InvalidHeader);
    }

    let document = CsvDocument { text };
    if document.rows().next().is_none() {
        return Err(UploadError::HeaderOnly);
    }

    Ok(document)
}
