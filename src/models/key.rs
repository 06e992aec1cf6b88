//! Key centers offered by the arrangement editor
//!
//! The engine's string-keyed functions deliberately accept arbitrary strings
//! and degrade to "leave unchanged" when a name does not resolve. `Key` is
//! the stricter model used at the API boundary: it enumerates the 17
//! spellings the key picker offers and gives the UI a typed parse error for
//! anything else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::scale::{key_to_pitch_class, pitch_class_to_name, Spelling};

/// Enumeration of the key centers selectable in the editor:
/// 7 naturals, 5 sharps, and 5 flats.
///
/// Enharmonic equivalents are listed separately (e.g. C# and Db) because the
/// user's choice between them carries the spelling preference for the whole
/// arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

impl Key {
    /// Convert the key to its display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::C => "C",
            Key::Cs => "C#",
            Key::Db => "Db",
            Key::D => "D",
            Key::Ds => "D#",
            Key::Eb => "Eb",
            Key::E => "E",
            Key::F => "F",
            Key::Fs => "F#",
            Key::Gb => "Gb",
            Key::G => "G",
            Key::Gs => "G#",
            Key::Ab => "Ab",
            Key::A => "A",
            Key::As => "A#",
            Key::Bb => "Bb",
            Key::B => "B",
        }
    }

    /// The pitch class (0-11) of this key center
    pub fn pitch_class(&self) -> u8 {
        // Every variant's display string is in the lookup table
        key_to_pitch_class(self.as_str()).unwrap_or(0)
    }

    /// Re-render this key under a spelling preference (e.g. `Key::Cs`
    /// becomes "Db" under flats). This is what the picker shows as the
    /// current key when the user flips notation.
    pub fn spelled(&self, spelling: Spelling) -> &'static str {
        pitch_class_to_name(self.pitch_class(), spelling)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not one of the 17 selectable keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key: '{0}' (expected one of: C, C#, Db, D, D#, Eb, E, F, F#, Gb, G, G#, Ab, A, A#, Bb, B)")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive parsing; Unicode accidentals normalize to ASCII
        match s.to_uppercase().as_str() {
            "C" => Ok(Key::C),
            "C#" | "C♯" => Ok(Key::Cs),
            "DB" | "D♭" => Ok(Key::Db),
            "D" => Ok(Key::D),
            "D#" | "D♯" => Ok(Key::Ds),
            "EB" | "E♭" => Ok(Key::Eb),
            "E" => Ok(Key::E),
            "F" => Ok(Key::F),
            "F#" | "F♯" => Ok(Key::Fs),
            "GB" | "G♭" => Ok(Key::Gb),
            "G" => Ok(Key::G),
            "G#" | "G♯" => Ok(Key::Gs),
            "AB" | "A♭" => Ok(Key::Ab),
            "A" => Ok(Key::A),
            "A#" | "A♯" => Ok(Key::As),
            "BB" | "B♭" => Ok(Key::Bb),
            "B" => Ok(Key::B),
            _ => Err(ParseKeyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_naturals() {
        assert_eq!("C".parse::<Key>().unwrap(), Key::C);
        assert_eq!("D".parse::<Key>().unwrap(), Key::D);
        assert_eq!("E".parse::<Key>().unwrap(), Key::E);
        assert_eq!("F".parse::<Key>().unwrap(), Key::F);
        assert_eq!("G".parse::<Key>().unwrap(), Key::G);
        assert_eq!("A".parse::<Key>().unwrap(), Key::A);
        assert_eq!("B".parse::<Key>().unwrap(), Key::B);
    }

    #[test]
    fn test_from_str_accidentals() {
        assert_eq!("C#".parse::<Key>().unwrap(), Key::Cs);
        assert_eq!("Db".parse::<Key>().unwrap(), Key::Db);
        assert_eq!("Bb".parse::<Key>().unwrap(), Key::Bb);
        assert_eq!("F♯".parse::<Key>().unwrap(), Key::Fs);
        assert_eq!("B♭".parse::<Key>().unwrap(), Key::Bb);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("c".parse::<Key>().unwrap(), Key::C);
        assert_eq!("f#".parse::<Key>().unwrap(), Key::Fs);
        assert_eq!("bb".parse::<Key>().unwrap(), Key::Bb);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("H".parse::<Key>().is_err());
        assert!("C##".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
        let err = "X".parse::<Key>().unwrap_err();
        assert_eq!(err, ParseKeyError("X".to_string()));
    }

    #[test]
    fn test_pitch_class() {
        assert_eq!(Key::C.pitch_class(), 0);
        assert_eq!(Key::Cs.pitch_class(), 1);
        assert_eq!(Key::Db.pitch_class(), 1);
        assert_eq!(Key::B.pitch_class(), 11);
    }

    #[test]
    fn test_spelled() {
        assert_eq!(Key::Cs.spelled(Spelling::Flats), "Db");
        assert_eq!(Key::Db.spelled(Spelling::Sharps), "C#");
        assert_eq!(Key::C.spelled(Spelling::Flats), "C");
    }

    #[test]
    fn test_serde_roundtrip() {
        let key = Key::Fs;
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"F#\"");

        let parsed: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Key::Fs);
    }
}
