//! Alignment API
//!
//! JavaScript-facing wrappers over the chord-lyric paired-format converter.
//! The interactive editor parses the stored text into positional placements
//! when a section opens, and renders placements back to text on every edit.

use wasm_bindgen::prelude::*;

use crate::alignment;
use crate::models::placement::SectionBlock;
use crate::wasm_info;

use super::helpers::{deserialize, serialize};

/// Parse paired chord-line/lyric-line text into lyric lines and placements.
///
/// # Returns
/// `{ lines: string[], placements: { line_index, char_index, chord }[] }`
#[wasm_bindgen(js_name = parseChordLyricBlock)]
pub fn parse_chord_lyric_block(text: &str) -> Result<JsValue, JsValue> {
    wasm_info!("parseChordLyricBlock called: {} chars", text.len());

    serialize(
        &alignment::parse_chord_lyric_block(text),
        "Failed to serialize section block",
    )
}

/// Render lyric lines and placements back into the paired text format.
///
/// # Parameters
/// - `block_js`: A `{ lines, placements }` object, the inverse of
///   [`parse_chord_lyric_block`]
#[wasm_bindgen(js_name = renderChordLyricBlock)]
pub fn render_chord_lyric_block(block_js: JsValue) -> Result<String, JsValue> {
    let block: SectionBlock = deserialize(block_js, "Failed to deserialize section block")?;

    wasm_info!(
        "renderChordLyricBlock called: {} lines, {} placements",
        block.lines.len(),
        block.placements.len()
    );

    Ok(alignment::render_chord_lyric_block(
        &block.lines,
        &block.placements,
    ))
}
