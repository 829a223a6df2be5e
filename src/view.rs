//! Rendering: draws a [`Snapshot`] into a ratatui frame and places the
//! terminal caret.
//!
//! Lines are never wrapped; text past the right edge is clipped. The view
//! scrolls vertically so the caret row stays visible.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::command::Snapshot;
use crate::gap_buffer::GapLayout;

/// Caret location in display terms: row index and display column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub row: usize,
    pub column: usize,
}

/// Where the caret sits when `snapshot` is drawn with `tab_width` tab stops.
pub fn caret_position(snapshot: &Snapshot, tab_width: usize) -> Caret {
    let before = snapshot.before_cursor();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Caret {
        row: before.matches('\n').count(),
        column: display_width(&before[line_start..], tab_width),
    }
}

/// Display width of a single line, with tabs advancing to the next stop.
pub fn display_width(line: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    line.chars().fold(0, |col, ch| match ch {
        '\t' => col + tab_width - col % tab_width,
        _ => col + ch.width().unwrap_or(0),
    })
}

/// Replace tabs with spaces up to the next tab stop.
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let spaces = tab_width - col % tab_width;
            out.extend(std::iter::repeat(' ').take(spaces));
            col += spaces;
        } else {
            out.push(ch);
            col += ch.width().unwrap_or(0);
        }
    }
    out
}

pub struct EditorView<'a> {
    snapshot: &'a Snapshot,
    tab_width: usize,
    layout: Option<GapLayout>,
    status: Option<&'a str>,
}

impl<'a> EditorView<'a> {
    pub fn new(snapshot: &'a Snapshot, tab_width: usize) -> Self {
        Self {
            snapshot,
            tab_width,
            layout: None,
            status: None,
        }
    }

    /// Show gap internals in the status line.
    pub fn with_gap_layout(mut self, layout: GapLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    pub fn render(&self, frame: &mut Frame) {
        let [text_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let caret = caret_position(self.snapshot, self.tab_width);
        let visible_rows = usize::from(text_area.height.max(1));
        let scroll = caret.row.saturating_sub(visible_rows - 1);

        let lines: Vec<Line> = self
            .snapshot
            .text()
            .split('\n')
            .map(|line| Line::raw(expand_tabs(line, self.tab_width)))
            .collect();
        let paragraph = Paragraph::new(lines).scroll((clamp_u16(scroll), 0));
        frame.render_widget(paragraph, text_area);

        let status = Paragraph::new(self.status_line(caret))
            .style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(status, status_area);

        let max_x = text_area.width.saturating_sub(1);
        let x = text_area.x + clamp_u16(caret.column).min(max_x);
        let y = text_area.y + clamp_u16(caret.row - scroll);
        frame.set_cursor_position((x, y));
    }

    /// Status line text: caret location, byte offset, optional gap layout and
    /// message.
    pub fn status_line(&self, caret: Caret) -> String {
        let mut line = format!(
            " Ln {}, Col {} | byte {}/{}",
            caret.row + 1,
            caret.column + 1,
            self.snapshot.cursor(),
            self.snapshot.text().len()
        );
        if let Some(layout) = self.layout {
            line.push_str(&format!(
                " | cap {} gap [{}, {}) free {}",
                layout.capacity,
                layout.gap_start,
                layout.gap_end,
                layout.gap_len()
            ));
        }
        if let Some(status) = self.status {
            line.push_str(" | ");
            line.push_str(status);
        }
        line
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
