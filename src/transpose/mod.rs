//! Transposition module
//!
//! Shifts chord symbols between keys using pitch-class arithmetic, applies
//! the shift across whole text blocks without disturbing layout, and derives
//! the capo/interval description shown in the transpose dialog.

pub mod chord;
pub mod interval;
pub mod text;

pub use chord::{transpose_chord, transpose_chord_by};
pub use interval::{semitone_interval, TransposeInfo};
pub use text::{transpose_chord_lines, transpose_text};
