use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use shiu::EditCommand;

/// Left/Right step over multi-byte characters as a unit
#[test]
fn test_arrows_over_multibyte() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("a😀é").unwrap();
    assert_eq!(harness.cursor_position(), 7);

    let mut positions = Vec::new();
    for _ in 0..4 {
        harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
        positions.push(harness.cursor_position());
    }
    assert_eq!(positions, vec![5, 1, 0, 0]);

    positions.clear();
    for _ in 0..4 {
        harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
        positions.push(harness.cursor_position());
    }
    assert_eq!(positions, vec![1, 5, 7, 7]);
    harness.assert_buffer_content("a😀é");
}

/// A raw move into the middle of a character snaps back to its start
#[test]
fn test_move_into_character_snaps() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("x😀y").unwrap();
    for target in 2..=4 {
        harness.apply(EditCommand::move_to(target)).unwrap();
        assert_eq!(harness.cursor_position(), 1, "target {target}");
    }
    harness.type_text("!").unwrap();
    harness.assert_buffer_content("x!😀y");
}

/// Out-of-range moves clamp to the end of the text
#[test]
fn test_move_past_end_clamps() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("abc").unwrap();
    harness.apply(EditCommand::move_to(0)).unwrap();
    harness.apply(EditCommand::move_to(usize::MAX)).unwrap();
    assert_eq!(harness.cursor_position(), 3);
}

/// Home/End and Up/Down navigate lines
#[test]
fn test_line_navigation() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("first\nsecond line\nend").unwrap();

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position(), 18);

    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position(), 6);

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position(), 17);

    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    // "first" is shorter: clamps to its end
    assert_eq!(harness.cursor_position(), 5);

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position(), 11);

    harness.type_text("_").unwrap();
    harness.assert_buffer_content("first\nsecon_d line\nend");
}
