//! Color schemes for the liberator browser.
//!
//! Dark, light and colorblind-friendly palettes, plus a monochrome scheme
//! for `--no-color`.

use ratatui::style::Color;

/// Colors used to draw the listing, status bar and footer.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Color for directory rows
    pub dirs: Color,
    /// Color for file rows
    pub text: Color,
    /// Color for sizes
    pub size_fg: Color,
    /// Foreground of the selected row
    pub selected_fg: Color,
    /// Background of the selected row
    pub selected_bg: Color,
    /// Border color for the listing frame
    pub border: Color,

    // Status bar colors
    /// Current path color
    pub path_fg: Color,
    /// Status bar foreground color
    pub status_fg: Color,
    /// Status bar background color
    pub status_bg: Color,

    // Footer colors
    /// Key shortcut color
    pub key_fg: Color,
    /// Hint text color
    pub hint_fg: Color,
    /// Error message color
    pub error_fg: Color,
}

impl Default for ColorScheme {
    /// The dark theme.
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// High-contrast colors for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            dirs: Color::Rgb(100, 149, 237),        // Cornflower blue
            text: Color::Rgb(248, 248, 242),        // Off-white
            size_fg: Color::Rgb(80, 250, 123),      // Green for sizes
            selected_fg: Color::Rgb(40, 42, 54),    // Dark on gold
            selected_bg: Color::Rgb(255, 215, 0),   // Gold highlight
            border: Color::Rgb(98, 114, 164),       // Muted purple-blue

            path_fg: Color::Rgb(139, 233, 253),     // Cyan for paths
            status_fg: Color::Rgb(248, 248, 242),
            status_bg: Color::Rgb(68, 71, 90),

            key_fg: Color::Rgb(255, 184, 108),      // Orange for keys
            hint_fg: Color::Rgb(136, 136, 136),
            error_fg: Color::Rgb(255, 85, 85),      // Red for errors
        }
    }

    /// Darker, saturated colors for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            dirs: Color::Rgb(30, 80, 180),          // Deep blue
            text: Color::Rgb(30, 30, 30),           // Near black
            size_fg: Color::Rgb(22, 130, 80),       // Dark green
            selected_fg: Color::Rgb(255, 255, 255),
            selected_bg: Color::Rgb(0, 100, 200),   // Strong blue
            border: Color::Rgb(80, 80, 120),

            path_fg: Color::Rgb(0, 100, 150),       // Dark cyan
            status_fg: Color::Rgb(30, 30, 30),
            status_bg: Color::Rgb(210, 210, 220),

            key_fg: Color::Rgb(180, 100, 50),       // Brown
            hint_fg: Color::Rgb(120, 120, 140),
            error_fg: Color::Rgb(180, 30, 30),
        }
    }

    /// Colors that stay distinguishable under common color vision
    /// deficiencies, relying on the blue-orange axis and luminance.
    pub fn colorblind() -> Self {
        Self {
            dirs: Color::Rgb(86, 180, 233),         // Sky blue
            text: Color::Rgb(255, 255, 255),
            size_fg: Color::Rgb(0, 158, 115),       // Bluish green
            selected_fg: Color::Rgb(0, 0, 0),
            selected_bg: Color::Rgb(240, 228, 66),  // Yellow
            border: Color::Rgb(136, 136, 136),

            path_fg: Color::Rgb(240, 228, 66),
            status_fg: Color::Rgb(255, 255, 255),
            status_bg: Color::Rgb(60, 60, 70),

            key_fg: Color::Rgb(230, 159, 0),        // Orange
            hint_fg: Color::Rgb(153, 153, 153),
            error_fg: Color::Rgb(213, 94, 0),       // Vermillion
        }
    }

    /// Terminal default colors only. Selection is shown by reversing.
    pub fn monochrome() -> Self {
        Self {
            dirs: Color::Reset,
            text: Color::Reset,
            size_fg: Color::Reset,
            selected_fg: Color::Reset,
            selected_bg: Color::Reset,
            border: Color::Reset,
            path_fg: Color::Reset,
            status_fg: Color::Reset,
            status_bg: Color::Reset,
            key_fg: Color::Reset,
            hint_fg: Color::Reset,
            error_fg: Color::Reset,
        }
    }

    /// Whether this scheme draws without any colors.
    pub fn is_monochrome(&self) -> bool {
        self.selected_bg == Color::Reset
    }
}
