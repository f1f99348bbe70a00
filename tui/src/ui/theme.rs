use ratatui::style::{Color, Modifier, Style};

/// Clinical teal theme.
///
/// Base aesthetic:
/// - pale grey-blue text on near-black
/// - teal accents for chrome and charts
/// - red/green reserved for the two outcomes
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(8, 12, 14);
    pub const FG: Color = Color::Rgb(190, 210, 215);
    pub const FG_DIM: Color = Color::Rgb(110, 150, 155);
    pub const FG_MUTED: Color = Color::Rgb(70, 85, 90);

    // Accents
    pub const ACCENT_TEAL: Color = Color::Rgb(0, 200, 180);
    pub const ALERT_RED: Color = Color::Rgb(235, 80, 80);
    pub const OK_GREEN: Color = Color::Rgb(90, 220, 120);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG)
    }

    /// Titles (bold teal).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted text, also the ghost default in empty fields.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Highlight row background.
    pub fn highlight_bg() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 30, 28))
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor and chart accent.
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    /// A positive screening outcome.
    pub fn positive() -> Style {
        Style::default()
            .fg(Self::ALERT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// A negative screening outcome.
    pub fn negative() -> Style {
        Style::default()
            .fg(Self::OK_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ALERT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Progress gauge fill.
    pub fn gauge() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG)
    }
}
