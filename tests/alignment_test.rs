// Test the chord-lyric paired-line format: rendering placements above lyric
// lines, parsing stored text back, and the interplay with transposition.

use arranger_wasm::alignment::{parse_chord_lyric_block, render_chord_lyric_block};
use arranger_wasm::models::placement::ChordPlacement;
use arranger_wasm::models::scale::Spelling;
use arranger_wasm::transpose::transpose_chord_lines;

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_single_placement_renders_two_line_block() {
    let block = render_chord_lyric_block(
        &lines(&["Amazing grace"]),
        &[ChordPlacement::new(0, 0, "C")],
    );
    assert_eq!(block, "C\nAmazing grace");
}

#[test]
fn test_placements_align_to_character_columns() {
    let block = render_chord_lyric_block(
        &lines(&["how sweet the sound"]),
        &[
            ChordPlacement::new(0, 0, "C"),
            ChordPlacement::new(0, 10, "F"),
            ChordPlacement::new(0, 14, "G"),
        ],
    );
    let rendered: Vec<&str> = block.split('\n').collect();
    assert_eq!(rendered[0], "C         F   G");
    assert_eq!(rendered[1], "how sweet the sound");

    // Each chord starts exactly at its column
    assert_eq!(rendered[0].chars().position(|c| c == 'F'), Some(10));
    assert_eq!(rendered[0].chars().position(|c| c == 'G'), Some(14));
}

#[test]
fn test_every_lyric_line_gets_a_chord_line() {
    let block = render_chord_lyric_block(
        &lines(&["verse one", "verse two", "verse three"]),
        &[ChordPlacement::new(2, 0, "Dm")],
    );
    assert_eq!(block, "\nverse one\n\nverse two\nDm\nverse three");
}

#[test]
fn test_parse_reads_line_pairs() {
    let block = parse_chord_lyric_block("C       F\nAmazing grace\n\nhow sweet");
    assert_eq!(block.lines, vec!["Amazing grace", "how sweet"]);
    assert_eq!(
        block.placements,
        vec![
            ChordPlacement::new(0, 0, "C"),
            ChordPlacement::new(0, 8, "F"),
        ]
    );
}

#[test]
fn test_round_trip_without_collisions() {
    let original_lines = lines(&["Amazing grace how sweet the sound", "that saved a wretch like me"]);
    let original_placements = vec![
        ChordPlacement::new(0, 0, "G"),
        ChordPlacement::new(0, 12, "G7/B"),
        ChordPlacement::new(0, 22, "C"),
        ChordPlacement::new(1, 0, "G"),
        ChordPlacement::new(1, 12, "Em"),
        ChordPlacement::new(1, 21, "D"),
    ];

    let text = render_chord_lyric_block(&original_lines, &original_placements);
    let parsed = parse_chord_lyric_block(&text);

    assert_eq!(parsed.lines, original_lines);
    assert_eq!(parsed.placements, original_placements);
}

#[test]
fn test_trailing_placement_at_line_length() {
    let lyric = "go";
    let block = render_chord_lyric_block(
        &lines(&[lyric]),
        &[ChordPlacement::new(0, 2, "D7")],
    );
    assert_eq!(block, "  D7\ngo");

    let parsed = parse_chord_lyric_block(&block);
    assert_eq!(parsed.placements, vec![ChordPlacement::new(0, 2, "D7")]);
}

#[test]
fn test_parse_clamps_columns_beyond_lyric_length() {
    let parsed = parse_chord_lyric_block("          Am\nshort");
    assert_eq!(parsed.placements, vec![ChordPlacement::new(0, 5, "Am")]);
}

#[test]
fn test_stacked_chords_shift_later_columns() {
    // Two placements on one column is accepted editor input; the second is
    // emitted immediately after the first and later columns shift right.
    // Parsing then reads the merged run as a single chord token.
    let block = render_chord_lyric_block(
        &lines(&["hold on"]),
        &[
            ChordPlacement::new(0, 0, "C"),
            ChordPlacement::new(0, 0, "G"),
            ChordPlacement::new(0, 5, "Am"),
        ],
    );
    // The cursor tracks intended columns, not emitted width, so Am pads
    // from column 1 and lands at column 6 instead of 5
    assert_eq!(block, "CG    Am\nhold on");

    let parsed = parse_chord_lyric_block(&block);
    assert_eq!(
        parsed.placements,
        vec![
            ChordPlacement::new(0, 0, "CG"),
            ChordPlacement::new(0, 6, "Am"),
        ]
    );
}

#[test]
fn test_stored_block_transposes_without_touching_lyrics() {
    let stored = "G           G7/B      C\nAmazing grace how sweet the sound\nG           Em       D\nthat saved a wretch like me";
    let transposed = transpose_chord_lines(stored, "G", "A", Spelling::Sharps, false);
    assert_eq!(
        transposed,
        "A           A7/C#      D\nAmazing grace how sweet the sound\nA           F#m       E\nthat saved a wretch like me"
    );

    // The lyric lines parse back unchanged
    let parsed = parse_chord_lyric_block(&transposed);
    assert_eq!(
        parsed.lines,
        vec!["Amazing grace how sweet the sound", "that saved a wretch like me"]
    );
}
