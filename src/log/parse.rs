use crate::Result;
use crate::error::ConvertError;
use crate::log::line::{LineClassifier, LineKind};
use crate::log::record::{Record, RecordStore};
use crate::textio;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Running state threaded from one line to the next.
///
/// Only the allocation fields persist; technique and time live for the
/// single line that produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    pub allocation_count: u64,
    pub allocation_size: u64,
}

/// Parses a benchmark log into a [`RecordStore`], placing every record in
/// one section.
#[derive(Debug, Clone)]
pub struct LogParser {
    classifier: LineClassifier,
    section: String,
    source_name: String,
}

impl LogParser {
    /// `source_name` only appears in error messages.
    pub fn new(section: &str, source_name: &str) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new()?,
            section: section.to_string(),
            source_name: source_name.to_string(),
        })
    }

    /// Apply one line to `store` and return the state for the next line.
    ///
    /// A timed-result line appends a record seeded with the current
    /// allocation fields. A detail line replaces those fields and backfills
    /// every record already in the section, so after the last line all
    /// records carry the values of the last detail line.
    pub fn read_log_line(
        &self,
        lno: usize,
        line: &str,
        state: ParserState,
        store: &mut RecordStore,
    ) -> Result<ParserState> {
        store.ensure_section(&self.section);

        match self.classifier.classify(line) {
            LineKind::TimedResult { technique, time } => {
                let record = Record {
                    technique: technique.to_string(),
                    time: self.time_ms(lno, time)?,
                    allocation_count: state.allocation_count,
                    allocation_size: state.allocation_size,
                };
                debug!(line = lno, technique, time = record.time, "record");
                store.push(&self.section, record);
                Ok(state)
            }
            LineKind::Detail { count, size } => {
                let next = ParserState {
                    allocation_count: self.number(lno, "allocation count", count)?,
                    allocation_size: self.number(lno, "allocation size", size)?,
                };
                let section = store.ensure_section(&self.section);
                debug!(
                    line = lno,
                    count = next.allocation_count,
                    size = next.allocation_size,
                    backfilled = section.records.len(),
                    "allocation details"
                );
                section.backfill_allocations(next.allocation_count, next.allocation_size);
                Ok(next)
            }
            LineKind::Other => Ok(state),
        }
    }

    /// Parse a whole log held in memory. Lines are split on `\n`.
    pub fn parse_text(&self, text: &str) -> Result<RecordStore> {
        let mut store = RecordStore::new();
        let mut lines = 0usize;
        text.split('\n')
            .enumerate()
            .try_fold(ParserState::default(), |state, (lineno, line)| {
                lines += 1;
                self.read_log_line(lineno + 1, line, state, &mut store)
            })?;

        info!(
            source = %self.source_name,
            lines,
            records = store.record_count(),
            sections = store.sections().len(),
            "parsed log"
        );
        Ok(store)
    }

    /// Durations must be finite; `NaN` and `inf` parse as `f64` but are rejected.
    fn time_ms(&self, lno: usize, text: &str) -> Result<f64> {
        let v: f64 = self.number(lno, "time", text)?;
        if !v.is_finite() {
            return Err(self.malformed(lno, "time", text).into());
        }
        Ok(v)
    }

    fn number<T: FromStr>(&self, lno: usize, field: &'static str, text: &str) -> Result<T> {
        text.trim()
            .parse()
            .map_err(|_| self.malformed(lno, field, text).into())
    }

    fn malformed(&self, lno: usize, field: &'static str, text: &str) -> ConvertError {
        ConvertError::MalformedNumber {
            source_name: self.source_name.clone(),
            line: lno,
            field,
            text: text.to_string(),
        }
    }
}

/// Read and parse a benchmark log file, newline-normalized.
pub fn parse_log_file(path: &Path, section: &str) -> Result<RecordStore> {
    let text = textio::read_text(path)?;
    LogParser::new(section, &path.display().to_string())?.parse_text(&text)
}
