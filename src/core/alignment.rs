/// One alignment row selected from the aligner's tabular output.
///
/// `query_start` and `query_end` come from the 0-based whitespace columns 15 and 16
/// of a PSL line, which hold the aligned interval on the sequin sequence.
/// Start is 0-based, end is exclusive in PSL terms, but containment is tested
/// with inclusive bounds on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub query_name: String,
    pub target_name: String,
    pub query_start: i64,
    pub query_end: i64,
}

impl AlignmentRecord {
    /// Whether `position` lies within `[query_start, query_end]`, both bounds inclusive
    #[must_use]
    pub fn spans(&self, position: i64) -> bool {
        self.query_start <= position && position <= self.query_end
    }
}
