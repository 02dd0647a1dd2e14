// File: crates/pulse-core/src/theme.rs
// Summary: Color type and light/dark palettes, including threshold colors.

use crate::threshold::ThresholdClass;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    /// From a `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub title: Color,
    pub line_stroke: Color,
    pub neutral: Color,
    pub high: Color,
    pub low: Color,
    pub high_background: Color,
    pub low_background: Color,
    pub neutral_background: Color,
    pub label_text: Color,
    pub side_label_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            grid: Color::hex(0xEEEEEE),
            axis_line: Color::rgb(0, 0, 0),
            axis_label: Color::hex(0x808080),
            title: Color::rgb(0, 0, 0),
            line_stroke: Color::hex(0x8C8C8C),
            neutral: Color::hex(0x8C8C8C),
            high: Color::hex(0xFF7F50),
            low: Color::hex(0x00B2EE),
            high_background: Color::hex(0xFFBFA8),
            low_background: Color::hex(0x80D9F7),
            neutral_background: Color::WHITE,
            label_text: Color::WHITE,
            side_label_text: Color::hex(0x121212),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(150, 150, 160),
            title: Color::rgb(235, 235, 245),
            line_stroke: Color::rgb(120, 120, 130),
            neutral: Color::rgb(120, 120, 130),
            high: Color::hex(0xFF7F50),
            low: Color::hex(0x00B2EE),
            high_background: Color::rgb(90, 45, 30),
            low_background: Color::rgb(20, 60, 80),
            neutral_background: Color::rgb(18, 18, 20),
            label_text: Color::WHITE,
            side_label_text: Color::rgb(235, 235, 245),
        }
    }

    /// Marker/label color for a class; everything is neutral when thresholds are off.
    pub fn threshold_color(&self, class: ThresholdClass, show_threshold: bool) -> Color {
        if !show_threshold {
            return self.neutral;
        }
        match class {
            ThresholdClass::High => self.high,
            ThresholdClass::Low => self.low,
            ThresholdClass::Neutral => self.neutral,
        }
    }

    /// Plot background for a class; plain background unless encoding is on.
    pub fn background_color(&self, class: ThresholdClass, background_encoding: bool) -> Color {
        if !background_encoding {
            return self.neutral_background;
        }
        match class {
            ThresholdClass::High => self.high_background,
            ThresholdClass::Low => self.low_background,
            ThresholdClass::Neutral => self.neutral_background,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(Color::hex(0xFF7F50), Color::rgb(0xFF, 0x7F, 0x50));
    }

    #[test]
    fn threshold_colors_collapse_when_disabled() {
        let t = Theme::light();
        assert_eq!(t.threshold_color(ThresholdClass::High, true), t.high);
        assert_eq!(t.threshold_color(ThresholdClass::Low, true), t.low);
        assert_eq!(t.threshold_color(ThresholdClass::High, false), t.neutral);
        assert_eq!(t.threshold_color(ThresholdClass::Low, false), t.neutral);
    }

    #[test]
    fn background_encoding_tints() {
        let t = Theme::light();
        assert_eq!(t.background_color(ThresholdClass::High, false), Color::WHITE);
        assert_eq!(t.background_color(ThresholdClass::High, true), t.high_background);
        assert_eq!(t.background_color(ThresholdClass::Neutral, true), Color::WHITE);
    }

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
