//! Traffic-pattern destination builders.

mod hotspot;
mod rent;

pub use hotspot::*;
pub use rent::*;

/// Per-source destination table, the RENT pattern's output artifact.
///
/// One row of exactly `size` destination ids per source router, rows in
/// ascending source id. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTable {
    radix: usize,
    rows: Vec<Vec<u32>>,
}

impl DestinationTable {
    pub(crate) fn new(radix: usize, rows: Vec<Vec<u32>>) -> Self { DestinationTable { radix, rows } }

    /// Mesh edge length the table was generated for.
    pub fn radix(&self) -> usize { self.radix }

    /// Length of each destination row.
    pub fn size(&self) -> usize { self.rows.first().map_or(0, Vec::len) }

    /// Destination rows, indexed by source node id.
    pub fn rows(&self) -> &[Vec<u32>] { &self.rows }
}

/// Shared destination array, the hotspot pattern's output artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationList {
    radix: usize,
    entries: Vec<u32>,
}

impl DestinationList {
    pub(crate) fn new(radix: usize, entries: Vec<u32>) -> Self { DestinationList { radix, entries } }

    /// Mesh edge length the array was generated for.
    pub fn radix(&self) -> usize { self.radix }

    /// Destination entries.
    pub fn entries(&self) -> &[u32] { &self.entries }
}
