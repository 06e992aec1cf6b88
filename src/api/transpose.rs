//! Transposition API
//!
//! JavaScript-facing wrappers over the transposition engine. The editor
//! calls these once per text block (lyrics, chords, free-form content) when
//! the user picks a new key, and per beat for chord-grid arrangements.

use wasm_bindgen::prelude::*;

use crate::models::scale::{key_to_pitch_class, Spelling, FLAT_SCALE, SHARP_SCALE};
use crate::transpose::{self, TransposeInfo};
use crate::{wasm_info, wasm_warn};

use super::helpers::serialize;

/// Transpose every chord token in a text block from one key to another.
///
/// # Parameters
/// - `text`: Multi-line song text (chords, lyrics, or mixed)
/// - `from_key` / `to_key`: Key names as shown in the picker ("C", "F#", "Bb")
/// - `prefer_sharps`: Whether transposed chords use sharp or flat spellings
///
/// # Returns
/// The transposed text. Unknown keys leave the text unchanged.
#[wasm_bindgen(js_name = transposeText)]
pub fn transpose_text(text: &str, from_key: &str, to_key: &str, prefer_sharps: bool) -> String {
    wasm_info!("transposeText called: {} -> {}", from_key, to_key);

    transpose::transpose_text(
        text,
        from_key,
        to_key,
        Spelling::from_prefer_sharps(prefer_sharps),
    )
}

/// Transpose a stored paired-format block (chord lines above lyric lines),
/// touching only the even-indexed chord lines unless `all_lines` is set
/// (instrumental sections carry chords on every line).
#[wasm_bindgen(js_name = transposeChordLines)]
pub fn transpose_chord_lines(
    text: &str,
    from_key: &str,
    to_key: &str,
    prefer_sharps: bool,
    all_lines: bool,
) -> String {
    wasm_info!(
        "transposeChordLines called: {} -> {}, all_lines={}",
        from_key,
        to_key,
        all_lines
    );

    transpose::transpose_chord_lines(
        text,
        from_key,
        to_key,
        Spelling::from_prefer_sharps(prefer_sharps),
        all_lines,
    )
}

/// Transpose a single chord token by a raw semitone delta.
///
/// Rests, repeat marks and non-chord tokens come back unchanged.
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(token: &str, semitones: i32, prefer_sharps: bool) -> String {
    transpose::transpose_chord_by(token, semitones, Spelling::from_prefer_sharps(prefer_sharps))
}

/// Semitone distance from one key up to another, in 0-11.
///
/// Unknown keys read as a zero interval (the UI treats that as "nothing to
/// transpose").
#[wasm_bindgen(js_name = semitoneInterval)]
pub fn semitone_interval(from_key: &str, to_key: &str) -> u32 {
    match transpose::semitone_interval(from_key, to_key) {
        Some(interval) => interval as u32,
        None => {
            wasm_warn!(
                "semitoneInterval: unresolvable key pair '{}' -> '{}'",
                from_key,
                to_key
            );
            0
        }
    }
}

/// Interval and capo description for the transpose dialog.
///
/// # Returns
/// `{ semitones, interval_name, capo_text }`
#[wasm_bindgen(js_name = getTransposeInfo)]
pub fn get_transpose_info(from_key: &str, to_key: &str) -> Result<JsValue, JsValue> {
    serialize(
        &TransposeInfo::for_keys(from_key, to_key),
        "Failed to serialize transpose info",
    )
}

/// Pitch class (0-11) of a key name, or `undefined` for unknown names
#[wasm_bindgen(js_name = keyToPitchClass)]
pub fn key_to_pitch_class_js(name: &str) -> Option<u32> {
    key_to_pitch_class(name).map(|pc| pc as u32)
}

/// The sharp-preferred spelling table, indexed by pitch class
#[wasm_bindgen(js_name = sharpScale)]
pub fn sharp_scale() -> js_sys::Array {
    SHARP_SCALE.iter().map(|name| JsValue::from_str(name)).collect()
}

/// The flat-preferred spelling table, indexed by pitch class
#[wasm_bindgen(js_name = flatScale)]
pub fn flat_scale() -> js_sys::Array {
    FLAT_SCALE.iter().map(|name| JsValue::from_str(name)).collect()
}
