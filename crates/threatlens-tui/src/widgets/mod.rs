//! Custom widget components

mod header;
mod key_hints;
mod landing;
mod result_screen;
mod url_form;
mod verdict_panel;

pub use header::MainHeader;
pub use key_hints::{hints_for, KeyHints};
pub use landing::Landing;
pub use result_screen::{ResultScreen, NO_RESULT_TEXT};
pub use url_form::UrlForm;
pub use verdict_panel::{VerdictPanel, MISSING_VALUE};

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::styles;

/// `Label: value` on one line
pub(crate) fn field_line<'a>(label: &'a str, value: String, value_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, styles::label()),
        Span::styled(": ", styles::text_muted()),
        Span::styled(value, value_style),
    ])
}
