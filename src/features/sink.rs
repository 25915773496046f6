//! Append-only CSV output, flushed after every row

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::OutputRecord;
use crate::errors::ExportError;

pub const HEADER: [&str; 3] = ["timestamp", "user", "message"];

/// Destination for flattened records.
pub trait RecordSink {
    /// # Errors
    ///
    /// Returns an error if the record could not be written or flushed.
    fn write_record(&mut self, record: &OutputRecord) -> Result<(), ExportError>;
}

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create (or truncate) `path` and write the header row.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::CreateFile` if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, ExportError> {
        let file = File::create(path).map_err(|source| ExportError::CreateFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    /// # Errors
    ///
    /// Returns an error if the header row cannot be written.
    pub fn new(inner: W) -> Result<Self, ExportError> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &OutputRecord) -> Result<(), ExportError> {
        self.writer
            .write_record([&record.timestamp, &record.user, &record.text])?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: &str, text: &str) -> OutputRecord {
        OutputRecord {
            timestamp: "1970-01-01T00:16:40Z".into(),
            user: user.into(),
            text: text.into(),
        }
    }

    fn contents(sink: &CsvSink<Vec<u8>>) -> String {
        String::from_utf8(sink.get_ref().clone()).unwrap()
    }

    #[test]
    fn test_header_written_on_creation() {
        let sink = CsvSink::new(Vec::new()).unwrap();
        assert_eq!(contents(&sink), "timestamp,user,message\n");
    }

    #[test]
    fn test_rows_are_flushed_immediately() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.write_record(&record("U1", "hi")).unwrap();

        assert_eq!(
            contents(&sink),
            "timestamp,user,message\n1970-01-01T00:16:40Z,U1,hi\n"
        );
    }

    #[test]
    fn test_fields_are_quoted() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.write_record(&record("U1", "a, \"quoted\" word")).unwrap();

        assert!(contents(&sink).ends_with("U1,\"a, \"\"quoted\"\" word\"\n"));
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = CsvSink::create(&path).err().unwrap();
        assert!(matches!(err, ExportError::CreateFile { .. }));
        assert!(err.to_string().contains("out.csv"));
    }
}
