//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use threatlens_app::config::IconMode;

/// Spinner frames shown while a request is in flight
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn shield(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f132}", // nf-fa-shield
            IconMode::Unicode => "\u{26e8}",   // ⛨
        }
    }

    pub fn globe(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0ac}", // nf-fa-globe
            IconMode::Unicode => "[W]",
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{2315}",   // ⌕
        }
    }

    pub fn bug(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f188}", // nf-fa-bug
            IconMode::Unicode => "[B]",
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    // --- Status indicator icons ---

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f10c}", // nf-fa-circle_o
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    /// Spinner glyph for an animation frame counter
    pub fn spinner(&self, frame: usize) -> &'static str {
        SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
    }
}
