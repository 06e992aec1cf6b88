//! Chord placements anchored to lyric positions
//!
//! A placement projects a chord symbol onto a specific character column of a
//! specific lyric line. Placements are what the interactive editor
//! manipulates when the user clicks a character to anchor a chord; the
//! paired-line text format in `crate::alignment` is their serialized form.

use serde::{Deserialize, Serialize};

/// A chord anchored to a character column of a lyric line.
///
/// `char_index` counts characters, not bytes, and may equal the line length
/// (a trailing placement past the last character).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordPlacement {
    /// Index of the lyric line the chord sits above (0-based)
    pub line_index: usize,

    /// Character column within that line (0-based)
    pub char_index: usize,

    /// The chord symbol text (e.g. "Am7", "D/F#")
    pub chord: String,
}

impl ChordPlacement {
    pub fn new(line_index: usize, char_index: usize, chord: impl Into<String>) -> Self {
        Self {
            line_index,
            char_index,
            chord: chord.into(),
        }
    }
}

/// One lyric text plus the chord placements anchored to it.
///
/// This is the unit round-tripped through the paired chord-line/lyric-line
/// text format. Within one line, placements serialize in ascending
/// `char_index` order; placements sharing a column keep insertion order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct SectionBlock {
    /// Lyric lines in order
    pub lines: Vec<String>,

    /// Chord placements anchored to those lines
    pub placements: Vec<ChordPlacement>,
}
