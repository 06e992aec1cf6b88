//! Chord-lyric alignment format
//!
//! The editor stores each section as paired lines: a chord line directly
//! above the lyric line it accompanies, aligned by character column in a
//! monospace view. This module converts between that text format and the
//! positional [`ChordPlacement`] records the interactive editor works with.
//!
//! Columns count characters, not bytes. Two placements may share a column
//! (stacked chords); serialization keeps their insertion order and emits the
//! second immediately after the first, which can shift later columns on that
//! line. That collision behavior is part of the stored format and is left
//! as-is rather than re-spaced.

use crate::models::placement::{ChordPlacement, SectionBlock};

/// Serialize lyric lines and their chord placements into the paired format.
///
/// For every lyric line, in order: a chord line built by padding with spaces
/// to each placement's column and appending its chord text, then the lyric
/// line itself. Lines without placements still get an (empty) chord line so
/// the pairing stays 1:1.
pub fn render_chord_lyric_block(lines: &[String], placements: &[ChordPlacement]) -> String {
    let mut output: Vec<String> = Vec::with_capacity(lines.len() * 2);

    for (line_index, line) in lines.iter().enumerate() {
        let mut line_placements: Vec<&ChordPlacement> = placements
            .iter()
            .filter(|p| p.line_index == line_index)
            .collect();
        // Stable: placements sharing a column keep insertion order
        line_placements.sort_by_key(|p| p.char_index);

        let mut chord_line = String::new();
        let mut cursor = 0usize;
        for placement in line_placements {
            let padding = placement.char_index.saturating_sub(cursor);
            chord_line.extend(std::iter::repeat(' ').take(padding));
            chord_line.push_str(&placement.chord);
            cursor = placement.char_index + placement.chord.chars().count();
        }

        output.push(chord_line);
        output.push(line.clone());
    }

    output.join("\n")
}

/// Parse the paired format back into lyric lines and placements.
///
/// Lines are read in pairs: even-indexed lines are chord lines, odd-indexed
/// lines are lyric lines (a trailing unpaired chord line gets an empty lyric
/// line). Each maximal non-whitespace run on a chord line becomes a
/// placement at the run's starting column, clamped to the lyric line's
/// character length.
pub fn parse_chord_lyric_block(text: &str) -> SectionBlock {
    let all_lines: Vec<&str> = text.split('\n').collect();

    let mut lines: Vec<String> = Vec::new();
    let mut placements: Vec<ChordPlacement> = Vec::new();

    for (pair_index, pair) in all_lines.chunks(2).enumerate() {
        let chord_line = pair[0];
        let lyric_line = pair.get(1).copied().unwrap_or("");
        lines.push(lyric_line.to_string());

        let lyric_len = lyric_line.chars().count();
        for (column, chord) in non_whitespace_runs(chord_line) {
            placements.push(ChordPlacement {
                line_index: pair_index,
                char_index: column.min(lyric_len),
                chord,
            });
        }
    }

    SectionBlock { lines, placements }
}

/// Maximal non-whitespace runs of a line as (starting column, text) pairs
fn non_whitespace_runs(line: &str) -> Vec<(usize, String)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (column, ch) in line.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some(run) = current.take() {
                runs.push(run);
            }
        } else {
            current
                .get_or_insert_with(|| (column, String::new()))
                .1
                .push(ch);
        }
    }
    if let Some(run) = current {
        runs.push(run);
    }

    runs
}
