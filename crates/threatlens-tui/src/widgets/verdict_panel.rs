//! Inline verdict panel shown by the detector after a successful analysis

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use threatlens_core::Verdict;

use super::field_line;
use crate::theme::{icons::IconSet, styles};

/// Shown for a descriptive field the service left out
pub const MISSING_VALUE: &str = "—";

pub struct VerdictPanel<'a> {
    verdict: &'a Verdict,
    received_at: Option<DateTime<Local>>,
    icons: IconSet,
}

impl<'a> VerdictPanel<'a> {
    pub fn new(verdict: &'a Verdict, icons: IconSet) -> Self {
        Self {
            verdict,
            received_at: None,
            icons,
        }
    }

    /// Show when the verdict arrived in the panel's bottom border
    pub fn received_at(mut self, at: Option<DateTime<Local>>) -> Self {
        self.received_at = at;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let v = self.verdict;
        let risk_style = styles::risk(v.risk_level());

        let mut lines = vec![
            field_line("Domain", v.domain.clone(), styles::text_primary()),
            field_line("Risk Probability", v.probability.to_string(), risk_style),
            field_line("Verdict", v.verdict.clone(), risk_style),
            field_line(
                "Features Detected",
                v.features_summary(),
                styles::text_primary(),
            ),
        ];

        for (label, value) in v.detail_fields() {
            let line = match value {
                Some(value) => field_line(label, value, styles::text_primary()),
                None => field_line(label, MISSING_VALUE.to_string(), styles::text_muted()),
            };
            lines.push(line);
        }

        lines
    }
}

impl Widget for VerdictPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.search(), styles::accent()),
            Span::styled(" Results for: ", styles::accent_bold()),
            Span::styled(self.verdict.url.clone(), styles::text_bright_bold()),
            Span::raw(" "),
        ]);

        let mut block = styles::glass_block(true).title(title);
        if let Some(at) = self.received_at {
            block = block.title_bottom(
                Line::styled(format!(" {} ", at.format("%H:%M:%S")), styles::text_muted())
                    .right_aligned(),
            );
        }

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use threatlens_app::config::IconMode;
    use threatlens_client::test_utils::{example_verdict, full_verdict};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_panel_shows_required_fields_verbatim() {
        let mut term = TestTerminal::new();
        let verdict = example_verdict();

        term.render_widget(VerdictPanel::new(&verdict, icons()), term.area());

        assert!(term.buffer_contains("Results for: https://example.com"));
        assert!(term.buffer_contains("Domain: example.com"));
        assert!(term.buffer_contains("Risk Probability: 0.12"));
        assert!(term.buffer_contains("Verdict: safe"));
        assert!(term.buffer_contains("Features Detected: 1/10"));
    }

    #[test]
    fn test_panel_marks_absent_fields() {
        let mut term = TestTerminal::new();
        let verdict = example_verdict();

        term.render_widget(VerdictPanel::new(&verdict, icons()), term.area());

        assert!(term.buffer_contains("Reasons: —"));
        assert!(term.buffer_contains("HTTP Status Code: —"));
        assert!(term.buffer_contains("Parked Domain: —"));
    }

    #[test]
    fn test_panel_shows_all_descriptive_fields() {
        let mut term = TestTerminal::new();
        let verdict = full_verdict();

        term.render_widget(VerdictPanel::new(&verdict, icons()), term.area());

        assert!(term.buffer_contains("Reasons: Missing HTTPS, Phishing-related keywords found"));
        assert!(term.buffer_contains("Domain Age: 1 years ago"));
        assert!(term.buffer_contains("HTTP Status Code: 200"));
        assert!(term.buffer_contains("SPF/DMARC Record: Not found"));
        assert!(term.buffer_contains("Free Hosted Content: No"));
        assert!(term.buffer_contains("Parked Domain: Not Parked"));
        assert!(term.buffer_contains("Features Detected: 37/116"));
    }

    #[test]
    fn test_panel_timestamp() {
        let mut term = TestTerminal::new();
        let verdict = example_verdict();
        let at = Local::now();

        term.render_widget(
            VerdictPanel::new(&verdict, icons()).received_at(Some(at)),
            term.area(),
        );

        assert!(term.buffer_contains(&at.format("%H:%M:%S").to_string()));
    }
}
