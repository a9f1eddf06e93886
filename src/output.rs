//! Output types for a generation run.

use serde::{Deserialize, Serialize};

/// Result of a full generation run, kept in memory.
///
/// [`crate::generate_to_files`] writes the two artifacts and returns only
/// the [`GenerateStats`]; this type is for callers that want the bytes
/// themselves.
pub struct GenerateOutput {
    /// The complete markup document, byte-for-byte what the HTML artifact
    /// contains.
    pub html: String,
    /// The paginated document.
    pub pdf: Vec<u8>,
    pub stats: GenerateStats,
}

/// Timing and size information for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateStats {
    pub html_bytes: usize,
    pub pdf_bytes: usize,
    pub pdf_pages: usize,
    pub load_duration_ms: u64,
    pub html_duration_ms: u64,
    pub pdf_duration_ms: u64,
    pub total_duration_ms: u64,
}
