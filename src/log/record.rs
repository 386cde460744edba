use crate::render::TableRow;

/// Name of the implicit section every record of a benchmark log belongs to.
pub const DEFAULT_SECTION: &str = "all";

/// One timed trial and the allocation statistics associated with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub technique: String,
    /// Milliseconds.
    pub time: f64,
    pub allocation_count: u64,
    /// Bytes per allocation.
    pub allocation_size: u64,
}

impl TableRow for Record {
    const COLUMNS: &'static [&'static str] =
        &["technique", "time", "allocation_count", "allocation_size"];

    fn values(&self) -> Vec<String> {
        vec![
            self.technique.clone(),
            self.time.to_string(),
            self.allocation_count.to_string(),
            self.allocation_size.to_string(),
        ]
    }
}

/// A named, ordered group of records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub name: String,
    pub records: Vec<Record>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: Vec::new(),
        }
    }

    /// Overwrite the allocation fields of every record collected so far.
    pub fn backfill_allocations(&mut self, allocation_count: u64, allocation_size: u64) {
        for r in &mut self.records {
            r.allocation_count = allocation_count;
            r.allocation_size = allocation_size;
        }
    }
}

/// Sections keyed by name, in order of first appearance.
///
/// Sections are few (one per log in practice), so lookup is a linear scan
/// over a `Vec` that keeps insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordStore {
    sections: Vec<Section>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the named section, creating it empty on first use.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(i) => i,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    pub fn push(&mut self, section: &str, record: Record) {
        self.ensure_section(section).records.push(record);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All records, section-major, then in encounter order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.sections.iter().flat_map(|s| s.records.iter())
    }

    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }
}
