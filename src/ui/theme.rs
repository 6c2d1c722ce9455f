use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub bar: Color,
    pub highlight: Color, // Element being placed
    pub comparing: Color, // Element it is compared against
    pub stats: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(20, 20, 30),
    fg: Color::Rgb(240, 240, 240),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(70, 130, 180),        // Steel blue
    highlight: Color::Rgb(255, 100, 100), // Red
    comparing: Color::Rgb(255, 200, 50),  // Yellow
    stats: Color::Rgb(150, 200, 255),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the active control
    border_normal: Color::Rgb(100, 100, 120),
    status_bg: Color::Rgb(50, 50, 70),
};
