//! Parsing module for the arrangement engine
//!
//! Chord symbol tokens are the only grammar this engine reads; everything
//! else in a song text is passed through untouched.

pub mod chord_symbol;

pub use chord_symbol::{is_pass_through_symbol, parse_chord};
