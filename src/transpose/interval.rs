//! Interval and capo calculation
//!
//! The transpose dialog shows two derived descriptions for a key change:
//! the interval as the shortest direction ("2 semitones up", "3 semitones
//! down") and the capo fret that lets a player keep the original shapes.

use serde::{Deserialize, Serialize};

use crate::models::scale::key_to_pitch_class;

/// Semitone distance from one key up to another, in `0..=11`.
///
/// `None` when either key fails to resolve.
pub fn semitone_interval(from_key: &str, to_key: &str) -> Option<u8> {
    let from = key_to_pitch_class(from_key)?;
    let to = key_to_pitch_class(to_key)?;
    Some(((to as i32) - (from as i32)).rem_euclid(12) as u8)
}

/// Human-readable summary of a key change, as shown in the transpose dialog
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransposeInfo {
    /// Raw upward interval in semitones (0-11)
    pub semitones: u8,

    /// Interval described in the shorter direction
    pub interval_name: String,

    /// Capo instruction using the raw upward interval
    pub capo_text: String,
}

impl TransposeInfo {
    /// Build the dialog text for a key change. Unresolvable keys read as a
    /// zero interval.
    pub fn for_keys(from_key: &str, to_key: &str) -> TransposeInfo {
        let semitones = semitone_interval(from_key, to_key).unwrap_or(0);

        let interval_name = match semitones {
            0 => "same key".to_string(),
            1 => "1 semitone up".to_string(),
            11 => "1 semitone down".to_string(),
            n if n <= 6 => format!("{} semitones up", n),
            n => format!("{} semitones down", 12 - n),
        };

        let capo_text = if semitones == 0 {
            "no capo needed".to_string()
        } else {
            format!("capo fret {}", semitones)
        };

        TransposeInfo {
            semitones,
            interval_name,
            capo_text,
        }
    }
}
