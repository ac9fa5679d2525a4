//! Full-screen analysis result, or the "no result" fallback

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use threatlens_app::ResultViewState;
use threatlens_core::Verdict;

use super::field_line;
use crate::layout;
use crate::theme::{icons::IconSet, styles};

pub const TITLE: &str = "Analysis Results";
pub const NO_RESULT_TEXT: &str = "No result available.";

const CARD_WIDTH: u16 = 78;

pub struct ResultScreen<'a> {
    view: &'a ResultViewState,
    icons: IconSet,
}

impl<'a> ResultScreen<'a> {
    pub fn new(view: &'a ResultViewState, icons: IconSet) -> Self {
        Self { view, icons }
    }
}

/// Field rows for the result screen. Unlike the detector panel, `Reasons`
/// is left out entirely when the service sent none.
fn result_lines(v: &Verdict) -> Vec<Line<'static>> {
    let risk_style = styles::risk(v.risk_level());
    let text = styles::text_primary();
    let optional = |value: &Option<threatlens_core::FieldValue>| {
        value.as_ref().map(ToString::to_string).unwrap_or_default()
    };

    let mut lines = vec![
        field_line("URL", v.url.clone(), text),
        field_line("Risk Probability", v.probability.to_string(), risk_style),
        field_line("Verdict", v.verdict.clone(), risk_style),
        field_line("Features Detected", v.features_summary(), text),
    ];
    if let Some(reasons) = &v.reasons {
        lines.push(field_line("Reasons", reasons.clone(), text));
    }
    lines.extend([
        field_line("Domain", v.domain.clone(), text),
        field_line("Domain Age", optional(&v.domain_age), text),
        field_line("HTTP Status Code", optional(&v.http_status), text),
        field_line("SPF/DMARC Record", optional(&v.spf_dmarc), text),
        field_line("Free Hosted Content", optional(&v.free_hosted), text),
        field_line("Parked Domain", optional(&v.parked_domain), text),
    ]);
    lines
}

impl Widget for ResultScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.search(), styles::accent()),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw(" "),
        ]);
        let block = styles::glass_block(true).title(title);

        match &self.view.verdict {
            Some(verdict) => {
                let body = Paragraph::new(result_lines(verdict)).wrap(Wrap { trim: false });
                // Height in wrapped rows; long URLs take several
                let inner_width = CARD_WIDTH.min(area.width).saturating_sub(2);
                let rows = u16::try_from(body.line_count(inner_width)).unwrap_or(u16::MAX);
                let card = layout::centered(area, CARD_WIDTH, rows.saturating_add(2));
                body.block(block).render(card, buf);
            }
            None => {
                let card = layout::centered(area, CARD_WIDTH.min(40), 3);
                Paragraph::new(NO_RESULT_TEXT)
                    .style(styles::text_secondary())
                    .alignment(Alignment::Center)
                    .block(block)
                    .render(card, buf);
            }
        }
    }
}
