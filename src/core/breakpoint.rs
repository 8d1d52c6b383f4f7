use serde::Serialize;

/// A known fusion breakpoint pair for one sequin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakpointRecord {
    /// Sequin (or chromosome) name, the key used for lookups
    pub name: String,

    /// First breakpoint coordinate. The only one checked during classification.
    pub position1: i64,

    /// Second breakpoint coordinate. Loaded but not used for classification.
    pub position2: i64,
}

impl BreakpointRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, position1: i64, position2: i64) -> Self {
        Self {
            name: name.into(),
            position1,
            position2,
        }
    }
}
