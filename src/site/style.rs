use std::fmt::Write as _;

/// Straight-alpha color as written in CSS.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

impl CssColor {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` when opaque, `transparent` when fully clear, else `rgba(...)`.
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else if self.a <= 0.0 {
            "transparent".to_owned()
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    /// Straight RGBA8, e.g. for a render clear color.
    pub fn to_rgba8(self) -> [u8; 4] {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub background: CssColor,
    pub surface: CssColor,
    pub border: CssColor,
    pub border_hover: CssColor,
    pub text: CssColor,
    pub text_muted: CssColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: CssColor::rgb(0x0a, 0x0a, 0x0a),
            surface: CssColor::rgb(0x1a, 0x1a, 0x1a),
            border: CssColor::rgba(255, 255, 255, 0.1),
            border_hover: CssColor::rgba(255, 255, 255, 0.3),
            text: CssColor::WHITE,
            text_muted: CssColor::rgb(0x99, 0x99, 0x99),
        }
    }
}

/// Gallery or carousel tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileStyle {
    pub background: CssColor,
    pub border: CssColor,
    pub radius_px: f64,
    /// Vertical offset; negative lifts the tile.
    pub translate_y_px: f64,
}

impl TileStyle {
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; border: 1px solid {}; border-radius: {}px; transform: translateY({}px);",
            self.background.to_css(),
            self.border.to_css(),
            self.radius_px,
            self.translate_y_px
        )
    }
}

/// Section switcher pill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavButtonStyle {
    pub background: CssColor,
    pub border: CssColor,
    pub color: CssColor,
    pub radius_px: f64,
}

/// Visual constants of the site. Built once, never mutated at runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub palette: Palette,
    pub radius_px: f64,
    pub pill_radius_px: f64,
    pub hover_lift_px: f64,
    /// Opacity of the back link while hovered.
    pub back_hover_opacity: f64,
    pub font_stack: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            radius_px: 16.0,
            pill_radius_px: 999.0,
            hover_lift_px: 4.0,
            back_hover_opacity: 0.6,
            font_stack: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .to_owned(),
        }
    }
}

impl Theme {
    pub fn tile(&self, hovered: bool) -> TileStyle {
        let p = &self.palette;
        TileStyle {
            background: p.surface,
            border: if hovered { p.border_hover } else { p.border },
            radius_px: self.radius_px,
            translate_y_px: if hovered { -self.hover_lift_px } else { 0.0 },
        }
    }

    /// The active pill ignores hover.
    pub fn nav_button(&self, active: bool, hovered: bool) -> NavButtonStyle {
        let p = &self.palette;
        let (background, border, color) = match (active, hovered) {
            (true, _) => (CssColor::WHITE, p.border, p.background),
            (false, true) => (CssColor::TRANSPARENT, CssColor::WHITE, CssColor::WHITE),
            (false, false) => (CssColor::TRANSPARENT, p.border, p.text_muted),
        };
        NavButtonStyle {
            background,
            border,
            color,
            radius_px: self.pill_radius_px,
        }
    }

    pub fn back_button_opacity(&self, hovered: bool) -> f64 {
        if hovered { self.back_hover_opacity } else { 1.0 }
    }

    /// Document-wide reset: no default margins, border-box sizing, dark
    /// page with horizontal overflow hidden.
    pub fn global_css(&self) -> String {
        let bg = self.palette.background.to_css();
        let mut css = String::new();
        css.push_str("* {\n  margin: 0;\n  padding: 0;\n  box-sizing: border-box;\n}\n");
        let _ = write!(
            css,
            "html, body {{\n  margin: 0;\n  padding: 0;\n  width: 100%;\n  height: 100%;\n  overflow-x: hidden;\n  background-color: {bg};\n  color: {};\n  font-family: {};\n}}\n",
            self.palette.text.to_css(),
            self.font_stack
        );
        css.push_str("#root {\n  margin: 0;\n  padding: 0;\n  width: 100%;\n  min-height: 100vh;\n}\n");
        css
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/style.rs"]
mod tests;
