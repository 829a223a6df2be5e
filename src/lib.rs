// Editor library - exposes all core modules for testing

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod gap_buffer;

#[cfg(feature = "runtime")]
pub mod input;
#[cfg(feature = "runtime")]
pub mod logs;
#[cfg(feature = "runtime")]
pub mod view;

// Re-export commonly used types
pub use command::{EditCommand, Snapshot};
pub use editor::Editor;
pub use error::GapBufferError;
pub use gap_buffer::GapBuffer;
