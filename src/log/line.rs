//! Line classification for benchmark logs.
//!
//! Two line shapes are recognized, tried in this order:
//!
//! ```text
//! FixedArenaAllocator.allocate: 12.500 ms
//! Performed 4194304 allocations of 64 bytes each.
//! ```
//!
//! Anything else is ignored by the parser.

use crate::Result;
use regex::Regex;

/// Raw captures of one recognized line. Numbers are left as text so the
/// parser can report the offending line when they fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `<technique>: <time> ms`
    TimedResult { technique: &'a str, time: &'a str },
    /// `Performed <count> allocations of <size> bytes each.`
    Detail { count: &'a str, size: &'a str },
    Other,
}

#[derive(Debug, Clone)]
pub struct LineClassifier {
    result_re: Regex,
    detail_re: Regex,
}

impl LineClassifier {
    pub fn new() -> Result<Self> {
        // Both patterns are anchored to the whole input and `.` never crosses
        // a newline, so a match cannot span lines.
        let result_re = Regex::new(r"^(.+?): (.+?) ms$")?;
        let detail_re = Regex::new(r"^Performed (.+?) allocations of (.+?) bytes each\.$")?;
        Ok(Self {
            result_re,
            detail_re,
        })
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(caps) = self.result_re.captures(line) {
            if let (Some(technique), Some(time)) = (caps.get(1), caps.get(2)) {
                return LineKind::TimedResult {
                    technique: technique.as_str(),
                    time: time.as_str(),
                };
            }
        }
        if let Some(caps) = self.detail_re.captures(line) {
            if let (Some(count), Some(size)) = (caps.get(1), caps.get(2)) {
                return LineKind::Detail {
                    count: count.as_str(),
                    size: size.as_str(),
                };
            }
        }
        LineKind::Other
    }
}
