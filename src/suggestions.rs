//! Chord suggestions for a key
//!
//! A thin derived view over the chromatic scale model: the diatonic chords
//! the editor offers in its chord picker, built from the major-scale degrees
//! of the selected key. Several editor surfaces used to re-derive these
//! lists independently; this module is the single home for that arithmetic.

use serde::{Deserialize, Serialize};

use crate::models::scale::{is_flat_key, FLAT_SCALE, SHARP_SCALE};

/// Semitone offsets of the major scale degrees (I through vii)
const MAJOR_SCALE_INTERVALS: [usize; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Diatonic chord lists for the picker, grouped the way the UI displays them
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ChordSuggestions {
    /// I, IV, V
    pub major: Vec<String>,

    /// ii, iii, vi
    pub minor: Vec<String>,

    /// Imaj7, iim7, IVmaj7, V7, vim7
    pub seventh: Vec<String>,

    /// Added-tone and suspended colors on I, IV and V
    pub extended: Vec<String>,
}

/// Build the diatonic chord suggestions for a key.
///
/// The key is looked up in the spelling table it conventionally belongs to
/// (flat table for flat-named keys and F, sharp table otherwise), so
/// suggestions come back spelled consistently with the key name. An unknown
/// key yields empty lists.
pub fn chords_in_key(key: &str) -> ChordSuggestions {
    let table: &[&str; 12] = if is_flat_key(key) {
        &FLAT_SCALE
    } else {
        &SHARP_SCALE
    };

    let Some(key_index) = table.iter().position(|name| *name == key) else {
        return ChordSuggestions::default();
    };

    let scale: Vec<&str> = MAJOR_SCALE_INTERVALS
        .iter()
        .map(|interval| table[(key_index + interval) % 12])
        .collect();

    ChordSuggestions {
        major: vec![scale[0].to_string(), scale[3].to_string(), scale[4].to_string()],
        minor: vec![
            format!("{}m", scale[1]),
            format!("{}m", scale[2]),
            format!("{}m", scale[5]),
        ],
        seventh: vec![
            format!("{}maj7", scale[0]),
            format!("{}m7", scale[1]),
            format!("{}maj7", scale[3]),
            format!("{}7", scale[4]),
            format!("{}m7", scale[5]),
        ],
        extended: vec![
            format!("{}add9", scale[0]),
            format!("{}sus4", scale[0]),
            format!("{}sus4", scale[4]),
            format!("{}m7", scale[1]),
            format!("{}add9", scale[3]),
            format!("{}7sus4", scale[4]),
        ],
    }
}
