//! Semantic style builders for the Cyber-Glass theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use threatlens_app::HealthStatus;
use threatlens_core::RiskLevel;

use super::icons::IconSet;
use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Field labels in verdict panels
pub fn label() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the primary action button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Colour for a verdict's risk bucket
pub fn risk(level: RiskLevel) -> Style {
    match level {
        RiskLevel::HighRisk => status_red().add_modifier(Modifier::BOLD),
        RiskLevel::Suspicious => status_yellow().add_modifier(Modifier::BOLD),
        RiskLevel::LikelySafe => status_green().add_modifier(Modifier::BOLD),
        RiskLevel::Unknown => text_primary(),
    }
}

/// Icon and style for the service health indicator
pub fn health_indicator(health: &HealthStatus, icons: IconSet) -> (&'static str, Style) {
    match health {
        HealthStatus::Unknown => (icons.circle(), text_muted()),
        HealthStatus::Checking => (icons.refresh(), status_yellow()),
        HealthStatus::Online(_) => (icons.dot(), status_green()),
        HealthStatus::Offline(_) => (icons.dot(), status_red()),
    }
}
