//! Parsed chord symbol representation

use serde::{Deserialize, Serialize};

use super::scale::{pitch_class_to_name, Spelling};

/// A chord symbol decomposed into its transposable parts.
///
/// The quality suffix ("m7", "sus4", "add9", ...) is an opaque string copied
/// through unchanged; only the root and the optional slash bass move when a
/// chord is transposed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Chord {
    /// Root pitch class (0-11)
    pub root: u8,

    /// Quality/extension suffix, carried verbatim
    pub quality: String,

    /// Bass pitch class, present only for slash chords
    pub bass: Option<u8>,
}

impl Chord {
    /// Shift root (and bass, if present) by a semitone delta
    pub fn transposed(&self, delta: u8) -> Chord {
        Chord {
            root: (self.root + delta) % 12,
            quality: self.quality.clone(),
            bass: self.bass.map(|b| (b + delta) % 12),
        }
    }

    /// Render back to chord symbol text under a spelling preference
    pub fn render(&self, spelling: Spelling) -> String {
        let root = pitch_class_to_name(self.root, spelling);
        match self.bass {
            Some(bass) => format!(
                "{}{}/{}",
                root,
                self.quality,
                pitch_class_to_name(bass, spelling)
            ),
            None => format!("{}{}", root, self.quality),
        }
    }
}
