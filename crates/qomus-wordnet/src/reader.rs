use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter};

use crate::error::CorpusError;
use crate::record::{PartOfSpeech, SynsetRecord};

/// Streaming reader over one corpus file
///
/// Yields one item per data row. Malformed rows come out as errors and
/// reading continues; an IO error ends the stream.
pub struct CorpusReader<R> {
    records: StringRecordsIntoIter<R>,
    default_pos: Option<PartOfSpeech>,
    done: bool,
}

impl CorpusReader<File> {
    pub fn open(
        path: &Path,
        delimiter: char,
        default_pos: Option<PartOfSpeech>,
    ) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        tracing::info!("Reading synset corpus from: {}", path.display());
        Self::new(file, delimiter, default_pos)
    }
}

impl<R: Read> CorpusReader<R> {
    pub fn new(
        reader: R,
        delimiter: char,
        default_pos: Option<PartOfSpeech>,
    ) -> Result<Self, CorpusError> {
        if !delimiter.is_ascii() {
            return Err(CorpusError::InvalidDelimiter(delimiter));
        }

        // Headers are detected per row, short rows are reported per row
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter as u8)
            .from_reader(reader)
            .into_records();

        Ok(Self {
            records,
            default_pos,
            done: false,
        })
    }
}

impl<R: Read> Iterator for CorpusReader<R> {
    type Item = Result<SynsetRecord, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    let error = CorpusError::from(e);
                    self.done = !error.is_malformed_row();
                    return Some(Err(error));
                }
            };

            let line = record.position().map_or(0, |p| p.line() as usize);
            match SynsetRecord::from_record(line, &record, self.default_pos) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}
