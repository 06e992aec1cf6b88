//! Single chord symbol transposition

use crate::models::scale::{key_to_pitch_class, Spelling};
use crate::parse::chord_symbol::{is_pass_through_symbol, parse_chord};

/// Transpose one chord token from one key to another.
///
/// The delta is the semitone distance between the two keys; root and slash
/// bass both move by it, the quality suffix never changes. If either key
/// fails to resolve, or the token is not a chord, the original text comes
/// back unchanged.
pub fn transpose_chord(token: &str, from_key: &str, to_key: &str, spelling: Spelling) -> String {
    let (Some(from), Some(to)) = (key_to_pitch_class(from_key), key_to_pitch_class(to_key))
    else {
        return token.to_string();
    };

    transpose_chord_by(token, (to as i32) - (from as i32), spelling)
}

/// Transpose one chord token by a raw semitone delta.
///
/// This is the entry point the chord-grid uses per beat. Rest and repeat
/// symbols pass through, as does anything that fails to parse as a chord.
/// A zero delta returns the token untouched, preserving its original
/// enharmonic spelling.
pub fn transpose_chord_by(token: &str, semitones: i32, spelling: Spelling) -> String {
    let delta = semitones.rem_euclid(12) as u8;
    if delta == 0 || is_pass_through_symbol(token) {
        return token.to_string();
    }

    match parse_chord(token) {
        Some(chord) => chord.transposed(delta).render(spelling),
        None => token.to_string(),
    }
}
