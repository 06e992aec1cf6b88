//! Chord picker API

use wasm_bindgen::prelude::*;

use crate::suggestions::chords_in_key;

use super::helpers::serialize;

/// Diatonic chord suggestions for a key, grouped for the chord picker.
///
/// # Returns
/// `{ major, minor, seventh, extended }`, each an array of chord names.
/// Unknown keys yield empty arrays.
#[wasm_bindgen(js_name = chordsInKey)]
pub fn chords_in_key_js(key: &str) -> Result<JsValue, JsValue> {
    serialize(
        &chords_in_key(key),
        "Failed to serialize chord suggestions",
    )
}
