//! A UTF-8 aware gap buffer, the text storage engine behind the editor.
//!
//! # Overview
//! The buffer keeps its text in one contiguous allocation with a movable
//! "gap" of unused bytes sitting at the cursor:
//!
//! ```text
//!  [ text before gap | gap (unused) | text after gap ]
//!    0..gap_start      gap_start..gap_end  gap_end..capacity
//! ```
//!
//! The *logical* text is `storage[..gap_start]` followed by
//! `storage[gap_end..]`. The cursor is always `gap_start`, so typing writes
//! straight into the gap and backspace just widens it.
//!
//! # Positions
//! Every position taken or returned here is a **byte** offset into the
//! logical text. Positions always land on code point boundaries: cursor
//! targets that fall inside a multi-byte sequence snap back to the start of
//! that sequence, and backspace removes a whole code point.
//!
//! # Performance
//! - Insert at cursor: amortized O(1) per byte (storage doubles on growth)
//! - Backspace: O(1)
//! - Cursor move: O(distance), never reallocates
//! - Materialize: O(n), one allocation
//!
//! # Growth
//! When an insert does not fit in the gap, storage is reallocated to
//! `max(capacity * 2, capacity + len(text) + initial_capacity)`. Capacity
//! never shrinks.

use std::borrow::Cow;
use std::fmt;

use crate::error::GapBufferError;

/// Initial capacity used when the configuration does not override it.
pub const DEFAULT_CAPACITY: usize = 1024;

/// A gap buffer holding UTF-8 text, with the cursor at the gap.
#[derive(Clone)]
pub struct GapBuffer {
    /// Backing store; its length is the capacity.
    storage: Vec<u8>,
    /// First byte of the gap, and the cursor position.
    gap_start: usize,
    /// One past the last gap byte (first byte of text after the gap).
    gap_end: usize,
    /// Capacity the buffer was created with; part of the growth formula.
    initial_capacity: usize,
}

/// Read-only view of the internal layout, for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapLayout {
    pub capacity: usize,
    pub gap_start: usize,
    pub gap_end: usize,
    pub text_len: usize,
}

impl GapLayout {
    /// Number of unused bytes in the gap.
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }
}

// ---------------------------------------------------------------------------
// Construction and teardown
// ---------------------------------------------------------------------------

impl GapBuffer {
    /// Create an empty buffer with `initial_capacity` bytes of storage.
    ///
    /// The whole allocation starts out as gap. Fails with
    /// [`GapBufferError::ZeroCapacity`] for a zero request and
    /// [`GapBufferError::Allocation`] if the memory cannot be obtained.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, GapBufferError> {
        if initial_capacity == 0 {
            return Err(GapBufferError::ZeroCapacity);
        }

        let storage = allocate_zeroed(initial_capacity)?;
        Ok(Self {
            storage,
            gap_start: 0,
            gap_end: initial_capacity,
            initial_capacity,
        })
    }

    /// Release the storage. The buffer cannot be used afterwards.
    pub fn destroy(self) {
        tracing::trace!("releasing gap buffer of {} bytes", self.capacity());
        drop(self);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Length of the logical text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len() - self.gap_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total allocated bytes, text plus gap.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Logical byte offset of the cursor.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    #[inline]
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Snapshot of the internal layout for the debug view.
    pub fn debug_layout(&self) -> GapLayout {
        GapLayout {
            capacity: self.capacity(),
            gap_start: self.gap_start,
            gap_end: self.gap_end,
            text_len: self.len(),
        }
    }

    /// Copy out the logical text together with the cursor offset.
    ///
    /// Allocates exactly one `String` sized to the text.
    pub fn materialize(&self) -> (String, usize) {
        let (before, after) = self.segments();
        let mut text = String::with_capacity(self.len());
        text.push_str(&before);
        text.push_str(&after);
        (text, self.gap_start)
    }

    /// Start of the code point that precedes `pos`, or 0 at the start.
    pub fn prev_boundary(&self, pos: usize) -> usize {
        let pos = pos.min(self.len());
        if pos == 0 {
            return 0;
        }
        self.floor_boundary(pos - 1)
    }

    /// Position just past the code point starting at or containing `pos`,
    /// or the text length at the end.
    pub fn next_boundary(&self, pos: usize) -> usize {
        let len = self.len();
        let mut pos = self.floor_boundary(pos.min(len));
        if pos == len {
            return len;
        }
        pos += 1;
        while pos < len && is_continuation_byte(self.byte_at(pos)) {
            pos += 1;
        }
        pos
    }

    /// Offset of the first byte of the line containing `pos`.
    pub fn line_start(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.len());
        while pos > 0 && self.byte_at(pos - 1) != b'\n' {
            pos -= 1;
        }
        pos
    }

    /// Offset of the newline ending the line containing `pos`, or the text
    /// length on the last line.
    pub fn line_end(&self, pos: usize) -> usize {
        let len = self.len();
        let mut pos = pos.min(len);
        while pos < len && self.byte_at(pos) != b'\n' {
            pos += 1;
        }
        pos
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Insert `text` at the cursor, growing storage first if the gap is too
    /// small. The cursor ends up after the inserted text.
    pub fn insert(&mut self, text: &str) -> Result<(), GapBufferError> {
        if text.is_empty() {
            return Ok(());
        }

        let bytes = text.as_bytes();
        if self.gap_len() < bytes.len() {
            self.grow(bytes.len())?;
        }

        let end = self.gap_start + bytes.len();
        self.storage[self.gap_start..end].copy_from_slice(bytes);
        self.gap_start = end;
        Ok(())
    }

    /// Insert raw bytes at the cursor after validating them as UTF-8.
    ///
    /// Invalid input is rejected with [`GapBufferError::InvalidEncoding`] and
    /// leaves the buffer untouched.
    pub fn insert_bytes(&mut self, bytes: &[u8]) -> Result<(), GapBufferError> {
        let text = std::str::from_utf8(bytes)?;
        self.insert(text)
    }

    /// Move the cursor to `target`, clamped to the text length and snapped
    /// back to the nearest code point boundary.
    pub fn move_cursor(&mut self, target: usize) {
        let clamped = target.min(self.len());
        let target = self.floor_boundary(clamped);
        if target != clamped {
            tracing::trace!("cursor target {} snapped to boundary {}", clamped, target);
        }

        if target < self.gap_start {
            // Slide the gap left: [target, gap_start) moves to end at gap_end.
            let count = self.gap_start - target;
            self.storage
                .copy_within(target..self.gap_start, self.gap_end - count);
            self.gap_start = target;
            self.gap_end -= count;
        } else if target > self.gap_start {
            // Slide the gap right: [gap_end, gap_end + count) moves to gap_start.
            let count = target - self.gap_start;
            self.storage
                .copy_within(self.gap_end..self.gap_end + count, self.gap_start);
            self.gap_start += count;
            self.gap_end += count;
        }
    }

    /// Delete the code point before the cursor. Does nothing at position 0.
    ///
    /// The removed bytes are absorbed into the gap without being cleared.
    pub fn backspace(&mut self) {
        if self.gap_start == 0 {
            return;
        }
        self.gap_start = self.prev_boundary(self.gap_start);
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Reallocate so the gap can hold at least `needed` more bytes.
    fn grow(&mut self, needed: usize) -> Result<(), GapBufferError> {
        let capacity = self.capacity();
        let new_capacity = capacity
            .checked_mul(2)
            .zip(
                capacity
                    .checked_add(needed)
                    .and_then(|n| n.checked_add(self.initial_capacity)),
            )
            .map(|(doubled, requested)| doubled.max(requested))
            .ok_or(GapBufferError::Allocation {
                requested: usize::MAX,
            })?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(new_capacity)
            .map_err(|_| GapBufferError::Allocation {
                requested: new_capacity,
            })?;

        // Pre-gap text keeps its offsets; post-gap text moves to the tail.
        let tail_len = capacity - self.gap_end;
        let new_gap_end = new_capacity - tail_len;
        storage.extend_from_slice(&self.storage[..self.gap_start]);
        storage.resize(new_gap_end, 0);
        storage.extend_from_slice(&self.storage[self.gap_end..]);

        tracing::debug!(
            "gap buffer grew from {} to {} bytes (insert of {} bytes)",
            capacity,
            new_capacity,
            needed
        );

        self.storage = storage;
        self.gap_end = new_gap_end;
        Ok(())
    }

    /// Byte at logical position `pos`. `pos` must be below `len()`.
    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        if pos < self.gap_start {
            self.storage[pos]
        } else {
            self.storage[pos + self.gap_len()]
        }
    }

    /// Largest code point boundary `<= pos`. `pos` must be `<= len()`.
    fn floor_boundary(&self, mut pos: usize) -> usize {
        while pos > 0 && pos < self.len() && is_continuation_byte(self.byte_at(pos)) {
            pos -= 1;
        }
        pos
    }

    /// The two text regions around the gap. Each is valid UTF-8 on its own
    /// because no code point straddles the gap, so both borrow.
    fn segments(&self) -> (Cow<'_, str>, Cow<'_, str>) {
        (
            String::from_utf8_lossy(&self.storage[..self.gap_start]),
            String::from_utf8_lossy(&self.storage[self.gap_end..]),
        )
    }
}

impl fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (before, after) = self.segments();
        f.write_str(&before)?;
        f.write_str(&after)
    }
}

impl fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapBuffer")
            .field("text", &self.to_string())
            .field("cursor", &self.gap_start)
            .field("gap_end", &self.gap_end)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// In UTF-8, continuation bytes have the bit pattern `10xxxxxx`.
#[inline]
fn is_continuation_byte(b: u8) -> bool {
    b & 0xC0 == 0x80
}

fn allocate_zeroed(len: usize) -> Result<Vec<u8>, GapBufferError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(len)
        .map_err(|_| GapBufferError::Allocation { requested: len })?;
    storage.resize(len, 0);
    Ok(storage)
}
