//! Chromatic scale model
//!
//! Pitch classes are integers 0-11, one semitone apart, with all arithmetic
//! modulo 12. A pitch class renders back to a display name through one of two
//! canonical 12-entry spelling tables (sharp-preferred or flat-preferred),
//! and any accepted enharmonic spelling resolves back to its pitch class
//! through a reverse lookup table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sharp-preferred display names, indexed by pitch class
pub const SHARP_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferred display names, indexed by pitch class
pub const FLAT_SCALE: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Reverse lookup from any accepted key spelling to its pitch class.
///
/// Case-sensitive. Contains the 12 sharp-scale names plus the 5 common flat
/// names, so both "C#" and "Db" resolve to pitch class 1.
static KEY_TO_PITCH_CLASS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (pc, name) in SHARP_SCALE.iter().enumerate() {
        map.insert(*name, pc as u8);
    }
    for (pc, name) in FLAT_SCALE.iter().enumerate() {
        map.insert(*name, pc as u8);
    }
    map
});

/// Which spelling table to use when rendering a pitch class as a display name
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharps,
    Flats,
}

impl Spelling {
    /// Convert the editor's `preferSharps` flag into a spelling preference
    pub fn from_prefer_sharps(prefer_sharps: bool) -> Self {
        if prefer_sharps {
            Spelling::Sharps
        } else {
            Spelling::Flats
        }
    }

    /// The spelling table selected by this preference
    pub fn table(&self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharps => &SHARP_SCALE,
            Spelling::Flats => &FLAT_SCALE,
        }
    }
}

/// Resolve a key name to its pitch class (0-11).
///
/// Unknown names yield `None`, never an error: callers treat `None` as
/// "cannot transpose, pass through unchanged".
pub fn key_to_pitch_class(name: &str) -> Option<u8> {
    KEY_TO_PITCH_CLASS.get(name).copied()
}

/// Render a pitch class as a display name under the given spelling preference
pub fn pitch_class_to_name(pc: u8, spelling: Spelling) -> &'static str {
    spelling.table()[(pc % 12) as usize]
}

/// The enharmonic alias of a sharp or flat spelling (e.g. "C#" -> "Db",
/// "Bb" -> "A#"). Natural names have no alias.
pub fn enharmonic_equivalent(name: &str) -> Option<&'static str> {
    let pc = key_to_pitch_class(name)? as usize;
    if SHARP_SCALE[pc] == FLAT_SCALE[pc] {
        return None;
    }
    if name == SHARP_SCALE[pc] {
        Some(FLAT_SCALE[pc])
    } else {
        Some(SHARP_SCALE[pc])
    }
}

/// Whether a key conventionally prefers flat spellings.
///
/// Flat-named keys and F major (one flat in its signature) read better with
/// the flat table; everything else defaults to sharps.
pub fn is_flat_key(name: &str) -> bool {
    name.contains('b') || name == "F"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_are_enharmonic() {
        for pc in 0..12 {
            assert_eq!(
                key_to_pitch_class(SHARP_SCALE[pc]),
                Some(pc as u8),
                "sharp name {} should resolve to {}",
                SHARP_SCALE[pc],
                pc
            );
            assert_eq!(
                key_to_pitch_class(FLAT_SCALE[pc]),
                Some(pc as u8),
                "flat name {} should resolve to {}",
                FLAT_SCALE[pc],
                pc
            );
        }
    }

    #[test]
    fn test_key_to_pitch_class_enharmonics() {
        assert_eq!(key_to_pitch_class("C#"), Some(1));
        assert_eq!(key_to_pitch_class("Db"), Some(1));
        assert_eq!(key_to_pitch_class("A#"), Some(10));
        assert_eq!(key_to_pitch_class("Bb"), Some(10));
    }

    #[test]
    fn test_key_to_pitch_class_unknown() {
        assert_eq!(key_to_pitch_class("H"), None);
        assert_eq!(key_to_pitch_class("c"), None); // case-sensitive
        assert_eq!(key_to_pitch_class(""), None);
        assert_eq!(key_to_pitch_class("C##"), None);
    }

    #[test]
    fn test_pitch_class_to_name() {
        assert_eq!(pitch_class_to_name(1, Spelling::Sharps), "C#");
        assert_eq!(pitch_class_to_name(1, Spelling::Flats), "Db");
        assert_eq!(pitch_class_to_name(0, Spelling::Sharps), "C");
        assert_eq!(pitch_class_to_name(0, Spelling::Flats), "C");
        // Wraps modulo 12
        assert_eq!(pitch_class_to_name(13, Spelling::Sharps), "C#");
    }

    #[test]
    fn test_enharmonic_equivalent() {
        assert_eq!(enharmonic_equivalent("C#"), Some("Db"));
        assert_eq!(enharmonic_equivalent("Db"), Some("C#"));
        assert_eq!(enharmonic_equivalent("Bb"), Some("A#"));
        assert_eq!(enharmonic_equivalent("C"), None);
        assert_eq!(enharmonic_equivalent("X"), None);
    }

    #[test]
    fn test_is_flat_key() {
        assert!(is_flat_key("Bb"));
        assert!(is_flat_key("Eb"));
        assert!(is_flat_key("F"));
        assert!(!is_flat_key("C"));
        assert!(!is_flat_key("F#"));
    }
}
