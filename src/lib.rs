//! Worship Song Arrangement Engine WASM Module
//!
//! This is the WASM module behind the arrangement editor. It provides the
//! music-notation transposition engine: chord symbol parsing, pitch-class
//! arithmetic over the 12-tone chromatic scale, bulk text transposition,
//! capo/interval calculation, and the chord-line/lyric-line alignment format.
//!
//! Everything here is a pure function over its inputs: the editor UI hands in
//! plain strings plus a key/spelling selection and gets fresh strings or
//! structures back. The engine holds no state between calls.

pub mod models;
pub mod parse;
pub mod transpose;
pub mod alignment;
pub mod suggestions;
pub mod api;

// Re-export commonly used types
pub use models::scale::{Spelling, FLAT_SCALE, SHARP_SCALE};
pub use models::chord::Chord;
pub use models::key::Key;
pub use models::placement::{ChordPlacement, SectionBlock};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Arrangement engine WASM module initialized");
}
