//! Key picker API
//!
//! Validation and re-spelling for the key selection dialog. Unlike the
//! transposition functions, which silently pass through anything they cannot
//! resolve, the picker wants a hard error for a key name it should never
//! have offered.

use wasm_bindgen::prelude::*;

use crate::models::key::Key;
use crate::models::scale::{pitch_class_to_name, key_to_pitch_class, Spelling};

use super::helpers::validation_error;

/// Validate a key name from the picker, returning its canonical spelling.
///
/// Accepts the 17 selectable keys case-insensitively (Unicode accidentals
/// included) and errors on anything else.
#[wasm_bindgen(js_name = validateKey)]
pub fn validate_key(name: &str) -> Result<String, JsValue> {
    name.parse::<Key>()
        .map(|key| key.as_str().to_string())
        .map_err(|e| validation_error(e.to_string()))
}

/// Re-render a key name under a spelling preference (e.g. "C#" becomes "Db"
/// under flats). Unknown names come back unchanged, so the picker can always
/// display something.
#[wasm_bindgen(js_name = spellKey)]
pub fn spell_key(name: &str, prefer_sharps: bool) -> String {
    match key_to_pitch_class(name) {
        Some(pc) => {
            pitch_class_to_name(pc, Spelling::from_prefer_sharps(prefer_sharps)).to_string()
        }
        None => name.to_string(),
    }
}
