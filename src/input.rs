//! Key translation: turns crossterm key events into editor commands.
//!
//! Cursor targets are computed here, against a read-only view of the
//! buffer, so every movement the editor receives is already a whole code
//! point step:
//!
//! - Left/Right: one code point
//! - Home/End: start/end of the current line
//! - Up/Down: same code point column on the neighbouring line, clamped to
//!   its length
//! - Enter inserts `"\n"`, Tab inserts `"\t"`
//! - Ctrl+Q quits, Ctrl+G toggles the gap debug view
//!
//! A bracketed paste arrives as a single event and becomes one insert.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::EditCommand;
use crate::gap_buffer::GapBuffer;

/// What a key press asks the front end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Edit(EditCommand),
    ToggleGapDebug,
    Quit,
}

/// Translate one terminal event. Key events go through [`translate_key`];
/// a paste inserts its whole text at once. Everything else is ignored.
pub fn translate_event(event: &Event, buffer: &GapBuffer) -> Option<InputAction> {
    match event {
        Event::Key(key) => translate_key(key, buffer),
        Event::Paste(text) if !text.is_empty() => {
            Some(InputAction::Edit(EditCommand::insert(text.as_str())))
        }
        _ => None,
    }
}

/// Translate one key event. Returns `None` for keys with no binding and for
/// key releases.
pub fn translate_key(key: &KeyEvent, buffer: &GapBuffer) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let cursor = buffer.cursor();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let action = match key.code {
        KeyCode::Char('q') if ctrl => InputAction::Quit,
        KeyCode::Char('g') if ctrl => InputAction::ToggleGapDebug,
        KeyCode::Char(_) if ctrl || alt => return None,
        KeyCode::Char(c) => InputAction::Edit(EditCommand::insert(c)),
        KeyCode::Enter => InputAction::Edit(EditCommand::insert('\n')),
        KeyCode::Tab => InputAction::Edit(EditCommand::insert('\t')),
        KeyCode::Backspace => InputAction::Edit(EditCommand::Backspace),
        KeyCode::Left => move_to(buffer.prev_boundary(cursor)),
        KeyCode::Right => move_to(buffer.next_boundary(cursor)),
        KeyCode::Home => move_to(buffer.line_start(cursor)),
        KeyCode::End => move_to(buffer.line_end(cursor)),
        KeyCode::Up => move_to(vertical_target(buffer, Direction::Up)),
        KeyCode::Down => move_to(vertical_target(buffer, Direction::Down)),
        _ => return None,
    };
    Some(action)
}

fn move_to(position: usize) -> InputAction {
    InputAction::Edit(EditCommand::move_to(position))
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Offset on the line above or below the cursor at the same code point
/// column. Stays put on the first/last line.
fn vertical_target(buffer: &GapBuffer, direction: Direction) -> usize {
    let cursor = buffer.cursor();
    let line_start = buffer.line_start(cursor);
    let column = count_code_points(buffer, line_start, cursor);

    let target_line_start = match direction {
        Direction::Up => {
            if line_start == 0 {
                return cursor;
            }
            buffer.line_start(line_start - 1)
        }
        Direction::Down => {
            let line_end = buffer.line_end(cursor);
            if line_end == buffer.len() {
                return cursor;
            }
            line_end + 1
        }
    };

    let target_line_end = buffer.line_end(target_line_start);
    let mut pos = target_line_start;
    for _ in 0..column {
        if pos >= target_line_end {
            break;
        }
        pos = buffer.next_boundary(pos);
    }
    pos
}

fn count_code_points(buffer: &GapBuffer, from: usize, to: usize) -> usize {
    let mut count = 0;
    let mut pos = from;
    while pos < to {
        pos = buffer.next_boundary(pos);
        count += 1;
    }
    count
}
