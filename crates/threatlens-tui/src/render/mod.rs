//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use threatlens_app::{AppState, Screen};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Header location for screens without a route
const RESULT_LOCATION: &str = "result";

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let location = state
        .route()
        .map(|route| route.path())
        .unwrap_or(RESULT_LOCATION);
    frame.render_widget(
        widgets::MainHeader::new(location, &state.service_label, &state.health, icons),
        areas.header,
    );

    match &state.screen {
        Screen::Landing => frame.render_widget(widgets::Landing::new(icons), areas.body),

        Screen::Detector => match (&state.detector.verdict, state.detector.showing_result) {
            (Some(verdict), true) => frame.render_widget(
                widgets::VerdictPanel::new(verdict, icons)
                    .received_at(state.detector.received_at),
                areas.body,
            ),
            _ => {
                let form = widgets::UrlForm::new(&state.detector, state.spinner_frame, icons);
                let cursor = form.cursor_position(areas.body);
                frame.render_widget(form, areas.body);
                if let Some(position) = cursor {
                    frame.set_cursor_position(position);
                }
            }
        },

        Screen::Result(view) => {
            frame.render_widget(widgets::ResultScreen::new(view, icons), areas.body)
        }
    }

    let hints = widgets::hints_for(state);
    frame.render_widget(widgets::KeyHints::new(&hints), areas.footer);
}
