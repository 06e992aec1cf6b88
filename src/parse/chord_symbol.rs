//! Chord symbol token parser
//!
//! Decomposes one whitespace-delimited token into root pitch class, opaque
//! quality suffix, and optional slash-bass pitch class. Tokens that do not
//! match the root-letter-leading shape are rejected with `None`, which is
//! what lets the bulk transposer run uniformly over mixed lyric/chord text
//! without corrupting ordinary words.
//!
//! Known limitation: an ordinary word that starts with a capital A-G is
//! indistinguishable from a chord at the token level (the article "A", a
//! lyric line opening with "Dm", even "Go" which reads as G plus quality
//! "o"). The editor accepts this ambiguity rather than guessing with a
//! dictionary; see the tests at the bottom.

use crate::models::chord::Chord;

/// Grid symbols that look chord-adjacent but must never be transposed:
/// rests (whole/half/quarter/eighth/sixteenth, plain and dotted), the repeat
/// mark, and beat slashes.
const PASS_THROUGH_SYMBOLS: [&str; 14] = [
    "WR", "HR", "QR", "ER", "SR", "WR.", "HR.", "QR.", "ER.", "SR.", "%", "//", "/.", "/",
];

/// Whether a token is a rest or repeat symbol from the chord-grid notation
pub fn is_pass_through_symbol(token: &str) -> bool {
    PASS_THROUGH_SYMBOLS.contains(&token)
}

/// Parse one token as a chord symbol.
///
/// A chord token begins with exactly one letter A-G, optionally followed by
/// a single `#` or `b`. The remainder up to an optional `/` is the quality
/// suffix, copied verbatim and never interpreted. Text after a `/` must
/// itself be a bare root plus optional accidental (no nested slash) to
/// become the bass; otherwise the whole token is not a chord.
pub fn parse_chord(token: &str) -> Option<Chord> {
    let (root, rest) = parse_root(token)?;

    match rest.split_once('/') {
        Some((quality, bass_text)) => {
            let (bass, leftover) = parse_root(bass_text)?;
            if !leftover.is_empty() {
                return None;
            }
            Some(Chord {
                root,
                quality: quality.to_string(),
                bass: Some(bass),
            })
        }
        None => Some(Chord {
            root,
            quality: rest.to_string(),
            bass: None,
        }),
    }
}

/// Parse a leading note name (letter A-G plus optional single accidental),
/// returning its pitch class and the unconsumed remainder.
fn parse_root(text: &str) -> Option<(u8, &str)> {
    let mut chars = text.chars();
    let base = match chars.next()? {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    match chars.next() {
        Some('#') => Some(((base + 1) % 12, &text[2..])),
        Some('b') => Some(((base + 11) % 12, &text[2..])),
        _ => Some((base, &text[1..])),
    }
}
