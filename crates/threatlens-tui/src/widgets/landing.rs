//! Landing screen: headline, "Get Started", and the feature boxes

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

pub const HEADLINE: &str = "Protect Yourself Online with AI";
pub const TAGLINE: &str =
    "Detect phishing, malware, and malicious URLs instantly using AI technology.";
pub const GET_STARTED: &str = "Get Started";

/// Landing screen content; static apart from icon mode
pub struct Landing {
    icons: IconSet,
}

impl Landing {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn features(&self) -> [(&'static str, &'static str, &'static str); 3] {
        [
            (
                self.icons.alert(),
                "Phishing Detection",
                "Identify fake websites that steal your data",
            ),
            (
                self.icons.bug(),
                "Malware Scanner",
                "Analyze websites for harmful software",
            ),
            (
                self.icons.globe(),
                "URL Reputation",
                "Know the trust level of any link you click",
            ),
        ]
    }
}

impl Widget for Landing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, headline, _, tagline, _, button, _, heading, boxes] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(self.icons.shield(), styles::accent()),
            Span::raw(" "),
            Span::styled(HEADLINE, styles::text_bright_bold()),
        ]))
        .alignment(Alignment::Center)
        .render(headline, buf);

        Paragraph::new(TAGLINE)
            .style(styles::text_secondary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(tagline, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", GET_STARTED), styles::focused_selected()),
            Span::styled(" Enter", styles::keybinding()),
        ]))
        .alignment(Alignment::Center)
        .render(button, buf);

        Paragraph::new("Features")
            .style(styles::accent_bold())
            .alignment(Alignment::Center)
            .render(heading, buf);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .split(boxes.inner(ratatui::layout::Margin::new(1, 0)));

        for ((icon, title, blurb), column) in self.features().into_iter().zip(columns.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*column);
            block.render(*column, buf);

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(icon, styles::accent()),
                    Span::raw(" "),
                    Span::styled(title, styles::text_bright_bold()),
                ]),
                Line::raw(""),
            ];
            lines.push(Line::styled(blurb, styles::text_secondary()));

            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use threatlens_app::config::IconMode;

    #[test]
    fn test_landing_renders_static_content() {
        let mut term = TestTerminal::new();

        term.render_widget(Landing::new(IconSet::new(IconMode::Unicode)), term.area());

        assert!(term.buffer_contains(HEADLINE));
        assert!(term.buffer_contains("Detect phishing, malware, and malicious URLs"));
        assert!(term.buffer_contains(GET_STARTED));
        assert!(term.buffer_contains("Phishing Detection"));
        assert!(term.buffer_contains("Malware Scanner"));
        assert!(term.buffer_contains("URL Reputation"));
    }

    #[test]
    fn test_landing_survives_tiny_area() {
        let mut term = TestTerminal::with_size(10, 3);
        term.render_widget(Landing::new(IconSet::new(IconMode::NerdFonts)), term.area());
        assert!(!term.content().is_empty());
    }
}
