//! Arrangement Engine WASM API
//!
//! This module provides the JavaScript-facing API for the arrangement
//! editor. It includes shared utilities for serialization, validation, and
//! error handling, as well as the engine functions organized by functional
//! domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `transpose`: Transposition operations (text, chord tokens, interval/capo)
//! - `alignment`: Chord-lyric paired-format conversion
//! - `keys`: Key validation and spelling for the key picker
//! - `suggestions`: Diatonic chord suggestions for the chord picker

pub mod helpers;
pub mod transpose;
pub mod alignment;
pub mod keys;
pub mod suggestions;

// Re-export all public functions to keep a flat wasm surface
pub use transpose::*;
pub use alignment::*;
pub use keys::*;
pub use suggestions::*;
