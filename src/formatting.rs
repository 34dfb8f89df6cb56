use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub muted: (u8, u8, u8),     // Blank slots, weekday header
    pub heading: (u8, u8, u8),   // Month label, popup title
    pub memo: (u8, u8, u8),      // Memo previews
    pub today: (u8, u8, u8),     // Today's day number
    pub date_key: (u8, u8, u8),  // Date keys in listings
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        muted: (108, 112, 134),    // Gray
        heading: (148, 226, 213),  // Teal
        memo: (137, 220, 235),     // Sky
        today: (249, 226, 175),    // Yellow
        date_key: (137, 180, 250), // Blue
    };
}

/// Formatting context passed through rendering pipeline
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn from_env() -> Self {
        let use_color = std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    pub fn format_header(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.heading;
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_muted(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.muted;
            Paint::rgb(text, r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    /// Day number; today is bold yellow.
    pub fn format_day(&self, text: &str, is_today: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        if is_today {
            let (r, g, b) = self.palette.today;
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_memo(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.memo;
            Paint::rgb(text, r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_date_key(&self, key: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.date_key;
            Paint::rgb(key, r, g, b).to_string()
        } else {
            key.to_string()
        }
    }
}
