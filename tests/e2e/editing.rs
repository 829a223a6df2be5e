use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use shiu::EditCommand;

/// Typed text lands in the buffer with the cursor at its end
#[test]
fn test_type_text() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("hello world").unwrap();
    harness.assert_buffer_content("hello world");
    assert_eq!(harness.cursor_position(), 11);
}

/// Enter inserts a newline through the regular insert path
#[test]
fn test_enter_inserts_newline() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("ab").unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("a\nb");
    assert_eq!(harness.cursor_position(), 2);
}

/// Insert in the middle of existing text
#[test]
fn test_insert_after_cursor_move() {
    let mut harness = EditorTestHarness::with_capacity(40, 10, 4).unwrap();
    harness.type_text("ab").unwrap();
    harness.apply(EditCommand::move_to(1)).unwrap();
    harness.type_text("X").unwrap();
    harness.assert_buffer_content("aXb");
    assert_eq!(harness.cursor_position(), 2);
}

/// Backspace removes whole characters and stops at the start
#[test]
fn test_backspace_to_start() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("añ😀").unwrap();

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("añ");
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("a");
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("");
    assert_eq!(harness.cursor_position(), 0);
}

/// Typing well past the initial capacity keeps all text in order
#[test]
fn test_long_typing_grows_buffer() {
    let mut harness = EditorTestHarness::with_capacity(40, 10, 2).unwrap();
    let line = "the quick brown fox jumps over the lazy dog\n";
    let text = line.repeat(20);
    harness.type_text(&text).unwrap();
    harness.assert_buffer_content(&text);
    assert!(harness.editor().debug_layout().capacity >= text.len());

    // Edit near the start after growth, then check both sides survived.
    harness.apply(EditCommand::move_to(4)).unwrap();
    harness.type_text("very ").unwrap();
    assert!(harness.snapshot().text().starts_with("the very quick"));
    assert!(harness.snapshot().text().ends_with("lazy dog\n"));
    assert_eq!(harness.snapshot().text().len(), text.len() + 5);
}

/// A bracketed paste is applied as one insert command
#[test]
fn test_paste_inserts_block() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("[]").unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    let commands_before = harness.editor().commands_applied();
    harness.paste("pasted\ntext").unwrap();
    harness.assert_buffer_content("[pasted\ntext]");
    assert_eq!(harness.cursor_position(), 12);
    assert_eq!(harness.editor().commands_applied(), commands_before + 1);
}

/// Ctrl+Q asks to quit without touching the text
#[test]
fn test_quit_key() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("keep").unwrap();
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.quit_requested());
    harness.assert_buffer_content("keep");
}
