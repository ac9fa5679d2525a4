//! Header bar widget
//!
//! Shows the app title, the current route, and the analysis service with
//! its last known health.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use threatlens_app::HealthStatus;

use crate::theme::{icons::IconSet, styles};

/// Main header showing app title, route, and service status
pub struct MainHeader<'a> {
    location: &'a str,
    service_label: &'a str,
    health: &'a HealthStatus,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    /// `location` is the route path, or a name for screens without a route
    pub fn new(
        location: &'a str,
        service_label: &'a str,
        health: &'a HealthStatus,
        icons: IconSet,
    ) -> Self {
        Self {
            location,
            service_label,
            health,
            icons,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.shield(), styles::accent()),
            Span::raw(" "),
            Span::styled("ThreatLens", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.location, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let (health_icon, health_style) = styles::health_indicator(self.health, self.icons);
        let right_line = Line::from(vec![
            Span::styled(health_icon, health_style),
            Span::raw(" "),
            Span::styled(self.service_label, styles::text_secondary()),
            Span::raw(" "),
            Span::styled(format!("({})", self.health.label()), health_style),
            Span::raw(" "),
        ]);
        let right_width = right_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align service status when there is room for both
        if left_width + right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right_line, right_width);
        }
    }
}
