//! Bulk text transposition
//!
//! Applies the chord parser and transposer across an arbitrary multi-line
//! block. Whitespace runs are reproduced exactly so the column alignment
//! between a chord line and the lyric line beneath it survives; only token
//! content changes, and only for tokens that parse as chords.

use crate::models::scale::{key_to_pitch_class, Spelling};

use super::chord::transpose_chord_by;

/// Transpose every chord token in a text block from one key to another.
///
/// Non-chord tokens and all whitespace are left exactly as they were. If
/// either key fails to resolve, or the keys share a pitch class, the input
/// comes back unchanged.
pub fn transpose_text(text: &str, from_key: &str, to_key: &str, spelling: Spelling) -> String {
    let (Some(from), Some(to)) = (key_to_pitch_class(from_key), key_to_pitch_class(to_key))
    else {
        return text.to_string();
    };

    let delta = ((to as i32) - (from as i32)).rem_euclid(12);
    if delta == 0 {
        return text.to_string();
    }

    text.split('\n')
        .map(|line| transpose_line(line, delta, spelling))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transpose a stored paired-format block, touching chord lines only.
///
/// In the paired format even-indexed lines carry chords and odd-indexed
/// lines carry lyrics. Instrumental sections (intro, outro, interlude, solo)
/// hold chords on every line; callers pass `all_lines` for those.
pub fn transpose_chord_lines(
    text: &str,
    from_key: &str,
    to_key: &str,
    spelling: Spelling,
    all_lines: bool,
) -> String {
    let (Some(from), Some(to)) = (key_to_pitch_class(from_key), key_to_pitch_class(to_key))
    else {
        return text.to_string();
    };

    let delta = ((to as i32) - (from as i32)).rem_euclid(12);
    if delta == 0 {
        return text.to_string();
    }

    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            if all_lines || i % 2 == 0 {
                transpose_line(line, delta, spelling)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transpose the tokens of one line, reproducing its whitespace runs exactly
fn transpose_line(line: &str, delta: i32, spelling: Spelling) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while !rest.is_empty() {
        let token_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        out.push_str(&rest[..token_start]);
        rest = &rest[token_start..];

        if rest.is_empty() {
            break;
        }

        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        out.push_str(&transpose_chord_by(&rest[..token_end], delta, spelling));
        rest = &rest[token_end..];
    }

    out
}
