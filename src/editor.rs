//! Editing session: one gap buffer driven by a stream of commands.
//!
//! The editor is the command dispatcher between input translation and
//! rendering. It applies each [`EditCommand`] to its buffer and returns a
//! fresh [`Snapshot`]. Errors from the buffer go straight back to the caller;
//! the editor itself never retries.

use crate::command::{EditCommand, Snapshot};
use crate::config::Config;
use crate::error::GapBufferError;
use crate::gap_buffer::{GapBuffer, GapLayout};

pub struct Editor {
    buffer: GapBuffer,
    /// Commands applied successfully, cursor moves included.
    commands_applied: u64,
}

impl Editor {
    /// Create an editor whose buffer starts at the configured capacity.
    pub fn new(config: &Config) -> Result<Self, GapBufferError> {
        Self::with_capacity(config.initial_capacity)
    }

    pub fn with_capacity(initial_capacity: usize) -> Result<Self, GapBufferError> {
        let buffer = GapBuffer::with_capacity(initial_capacity)?;
        tracing::info!("Editor created with initial capacity {}", initial_capacity);
        Ok(Self {
            buffer,
            commands_applied: 0,
        })
    }

    /// Apply one command and return the resulting snapshot.
    pub fn apply(&mut self, command: EditCommand) -> Result<Snapshot, GapBufferError> {
        let result = match &command {
            EditCommand::Insert { text } => self.buffer.insert(text),
            EditCommand::InsertBytes { bytes } => self.buffer.insert_bytes(bytes),
            EditCommand::MoveCursor { position } => {
                self.buffer.move_cursor(*position);
                Ok(())
            }
            EditCommand::Backspace => {
                self.buffer.backspace();
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::warn!("Rejected {} command: {}", command.name(), e);
            return Err(e);
        }

        self.commands_applied += 1;
        tracing::trace!(
            "{} applied, cursor at {} of {}",
            command.name(),
            self.buffer.cursor(),
            self.buffer.len()
        );
        Ok(self.snapshot())
    }

    /// Current text and cursor, without applying anything.
    pub fn snapshot(&self) -> Snapshot {
        self.buffer.materialize().into()
    }

    /// Read-only access for input translation (boundary and line queries).
    pub fn buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    pub fn debug_layout(&self) -> GapLayout {
        self.buffer.debug_layout()
    }

    pub fn commands_applied(&self) -> u64 {
        self.commands_applied
    }

    /// End the session and release the buffer.
    pub fn close(self) {
        tracing::info!(
            "Closing editor after {} commands",
            self.commands_applied
        );
        self.buffer.destroy();
    }
}
