use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// The screen shows the text and the caret sits after the typed character
#[test]
fn test_render_text_and_caret() {
    let mut harness = EditorTestHarness::new(30, 6).unwrap();
    harness.type_text("Shiu\neditor").unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.render().unwrap();

    assert_eq!(harness.screen_row(0), "Shiu");
    assert_eq!(harness.screen_row(1), "editor");
    assert_eq!(harness.screen_cursor_position(), (5, 1));
    assert!(harness.screen_row(5).starts_with(" Ln 2, Col 6 | byte 10/11"));
}

/// Wide characters move the caret by their display width
#[test]
fn test_render_caret_after_wide_text() {
    let mut harness = EditorTestHarness::new(30, 6).unwrap();
    harness.type_text("日本語").unwrap();
    harness.render().unwrap();
    assert_eq!(harness.screen_cursor_position(), (6, 0));
}

/// Ctrl+G shows the gap layout in the status line
#[test]
fn test_gap_debug_toggle() {
    let mut harness = EditorTestHarness::with_capacity(60, 4, 8).unwrap();
    harness.type_text("abc").unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();

    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();
    harness.render().unwrap();
    assert!(harness.screen_row(3).contains("cap 8 gap [2, 7) free 5"));

    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();
    harness.render().unwrap();
    assert!(!harness.screen_row(3).contains("cap"));
}
