//! Footer row of key hints for the current screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use threatlens_app::{AppState, Screen};

use crate::theme::styles;

/// `(key, description)` pairs shown in the footer
pub fn hints_for(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut hints = match &state.screen {
        Screen::Landing => vec![("Enter", "Get Started"), ("q", "Quit")],
        Screen::Detector if state.detector.showing_result => vec![
            ("o", "Open result"),
            ("b", "Back"),
            ("h", "Home"),
            ("q", "Quit"),
        ],
        Screen::Detector => vec![
            ("Enter", "Check URL"),
            ("Ctrl+U", "Clear"),
            ("Esc", "Home"),
            ("Ctrl+C", "Quit"),
        ],
        Screen::Result(_) => vec![("b", "Detector"), ("h", "Home"), ("q", "Quit")],
    };
    hints.push(("F5", "Health"));
    hints
}

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, description) in self.hints {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(*description, styles::text_muted()));
            spans.push(Span::raw("  "));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use threatlens_app::Route;

    #[test]
    fn test_form_hints_do_not_offer_q() {
        let mut state = AppState::new();
        state.navigate(Route::Detector);
        let hints = hints_for(&state);
        assert!(hints.iter().all(|(key, _)| *key != "q"));
        assert!(hints.contains(&("Enter", "Check URL")));
    }

    #[test]
    fn test_key_hints_render() {
        let mut term = TestTerminal::new();
        let state = AppState::new();
        let hints = hints_for(&state);

        term.render_widget(KeyHints::new(&hints), term.area());

        assert!(term.line_contains(0, "[Enter] Get Started"));
        assert!(term.line_contains(0, "[F5] Health"));
    }
}
