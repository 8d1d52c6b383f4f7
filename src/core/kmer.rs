/// Sequence written for every k-mer. FASTA body lines are never read.
pub const PLACEHOLDER_SEQUENCE: &str = "????";

/// A named k-mer probe from a sequin k-mer file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerRecord {
    /// Header text after `>`, trimmed
    pub name: String,

    /// Always [`PLACEHOLDER_SEQUENCE`]
    pub sequence: String,
}

impl KmerRecord {
    /// Create a record carrying the placeholder sequence
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: PLACEHOLDER_SEQUENCE.to_string(),
        }
    }
}
