// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart stroke and fill colors.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#4682b4`.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick_label: Color,
    pub point: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            grid: Color::rgb(230, 230, 235),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            tick_label: Color::rgb(100, 100, 110),
            point: Color::rgb(70, 130, 180),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick_label: Color::rgb(150, 150, 160),
            point: Color::rgb(64, 160, 255),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
