//! Edit commands accepted by the editor and the snapshot it hands back.

use serde::{Deserialize, Serialize};

/// One discrete edit, as produced by input translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditCommand {
    /// Insert text at the cursor. Typed characters and newlines both use this.
    Insert { text: String },
    /// Insert raw bytes at the cursor; rejected unless they are valid UTF-8.
    InsertBytes { bytes: Vec<u8> },
    /// Move the cursor to a logical byte offset (clamped and snapped).
    MoveCursor { position: usize },
    /// Delete the code point before the cursor.
    Backspace,
}

impl EditCommand {
    pub fn insert(text: impl Into<String>) -> Self {
        EditCommand::Insert { text: text.into() }
    }

    pub fn move_to(position: usize) -> Self {
        EditCommand::MoveCursor { position }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            EditCommand::Insert { .. } => "insert",
            EditCommand::InsertBytes { .. } => "insert_bytes",
            EditCommand::MoveCursor { .. } => "move_cursor",
            EditCommand::Backspace => "backspace",
        }
    }
}

/// Renderable copy of the document: the logical text and the cursor's byte
/// offset into it. Never aliases the buffer's storage.
///
/// The cursor always sits on a code point boundary within `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    text: String,
    cursor: usize,
}

impl Snapshot {
    /// Build a snapshot, clamping `cursor` to the text and snapping it back
    /// to the start of the code point it falls in.
    pub fn new(text: String, cursor: usize) -> Self {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor as a byte offset into [`Snapshot::text`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// Text from the cursor on.
    pub fn after_cursor(&self) -> &str {
        &self.text[self.cursor..]
    }
}

impl From<(String, usize)> for Snapshot {
    fn from((text, cursor): (String, usize)) -> Self {
        Self::new(text, cursor)
    }
}
