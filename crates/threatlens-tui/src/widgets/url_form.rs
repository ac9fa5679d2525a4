//! Threat detector form: URL input, submit hint, loading and error lines

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use threatlens_app::DetectorState;

use crate::layout;
use crate::theme::{icons::IconSet, styles};

pub const TITLE: &str = "AI Threat Detector";
pub const PROMPT: &str = "Got a suspicious link? Paste it here to reveal the truth.";
pub const PLACEHOLDER: &str = "Enter a URL (e.g., https://example.com)";
pub const LOADING_TEXT: &str = "Analyzing...";

/// Widest the form card grows to
const FORM_WIDTH: u16 = 76;
const FORM_HEIGHT: u16 = 13;

/// The input form shown while the detector is not displaying a result
pub struct UrlForm<'a> {
    detector: &'a DetectorState,
    spinner_frame: usize,
    icons: IconSet,
}

/// Areas inside the form card
struct FormAreas {
    card: Rect,
    prompt: Rect,
    input: Rect,
    button: Rect,
    status: Rect,
}

impl<'a> UrlForm<'a> {
    pub fn new(detector: &'a DetectorState, spinner_frame: usize, icons: IconSet) -> Self {
        Self {
            detector,
            spinner_frame,
            icons,
        }
    }

    fn areas(area: Rect) -> FormAreas {
        let card = layout::centered(area, FORM_WIDTH, FORM_HEIGHT);
        let inner = styles::glass_block(true).inner(card);
        let [prompt, _, input, _, button, _, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        FormAreas {
            card,
            prompt,
            input,
            button,
            status,
        }
    }

    /// Where the terminal cursor belongs when the form has focus.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let input = styles::glass_block(true).inner(Self::areas(area).input);
        if input.width == 0 || input.height == 0 {
            return None;
        }
        let (_, column) = visible_window(self.detector.input.before_cursor(), input.width);
        Some(Position::new(input.x + column, input.y))
    }
}

/// Byte offset to start drawing `before_cursor` from, and the cursor column
/// within a field `width` cells wide.
///
/// Long input scrolls so the cursor stays in view with one spare cell.
fn visible_window(before_cursor: &str, width: u16) -> (usize, u16) {
    let width = width as usize;
    let mut offset = 0;
    let mut shown = before_cursor.width();

    for c in before_cursor.chars() {
        if shown < width {
            break;
        }
        shown -= c.width().unwrap_or(0);
        offset += c.len_utf8();
    }

    (offset, shown as u16)
}

impl Widget for UrlForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = Self::areas(area);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.shield(), styles::accent()),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw(" "),
        ]);
        styles::glass_block(true)
            .title(title)
            .render(areas.card, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(self.icons.globe(), styles::accent()),
            Span::raw(" "),
            Span::styled(PROMPT, styles::text_secondary()),
        ]))
        .render(areas.prompt, buf);

        // Input field
        let field = styles::glass_block(!self.detector.loading);
        let field_inner = field.inner(areas.input);
        field.render(areas.input, buf);

        let value = self.detector.input.value();
        if value.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(styles::text_muted())
                .render(field_inner, buf);
        } else {
            let (offset, _) =
                visible_window(self.detector.input.before_cursor(), field_inner.width);
            Paragraph::new(&value[offset..])
                .style(styles::text_primary())
                .render(field_inner, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} Check URL ", self.icons.chevron_right()),
                styles::focused_selected(),
            ),
            Span::styled(" Enter", styles::keybinding()),
        ]))
        .render(areas.button, buf);

        // Status: loading replaces any error
        let status = if self.detector.loading {
            Some(Line::from(vec![
                Span::styled(self.icons.spinner(self.spinner_frame), styles::status_yellow()),
                Span::raw(" "),
                Span::styled(LOADING_TEXT, styles::status_yellow()),
            ]))
        } else {
            self.detector.error.as_deref().map(|error| {
                Line::from(vec![
                    Span::styled(self.icons.close(), styles::status_red()),
                    Span::raw(" "),
                    Span::styled(error, styles::status_red()),
                ])
            })
        };

        if let Some(line) = status {
            Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .render(areas.status, buf);
        }
    }
}
