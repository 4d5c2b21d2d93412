//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// The light and dark palettes. The theme store decides which one is active.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ColorConfigToml")]
pub struct ColorConfig {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl ColorConfig {
    pub fn palette(&self, dark: bool) -> &Palette {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// One set of TUI colors.
#[derive(Debug, Clone)]
pub struct Palette {
    pub border_active: Color,
    pub border_inactive: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            border_active: Color::Magenta,
            border_inactive: Color::Gray,
            accent: Color::Magenta,
            text: Color::Black,
            muted: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
            status_fg: Color::Black,
            status_bg: Color::Gray,
        }
    }

    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,
            accent: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            error: Color::LightRed,
            success: Color::LightGreen,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

/// Raw `[colors]` table. Each palette section is a set of overrides applied
/// on top of that palette's own defaults, so a partial `[colors.dark]` keeps
/// dark values for the fields it doesn't mention.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ColorConfigToml {
    light: PaletteOverrides,
    dark: PaletteOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaletteOverrides {
    #[serde(deserialize_with = "deserialize_color_opt")]
    border_active: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    border_inactive: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    accent: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    text: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    muted: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    error: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    success: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    status_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_opt")]
    status_bg: Option<Color>,
}

impl PaletteOverrides {
    fn apply(self, base: Palette) -> Palette {
        Palette {
            border_active: self.border_active.unwrap_or(base.border_active),
            border_inactive: self.border_inactive.unwrap_or(base.border_inactive),
            accent: self.accent.unwrap_or(base.accent),
            text: self.text.unwrap_or(base.text),
            muted: self.muted.unwrap_or(base.muted),
            error: self.error.unwrap_or(base.error),
            success: self.success.unwrap_or(base.success),
            status_fg: self.status_fg.unwrap_or(base.status_fg),
            status_bg: self.status_bg.unwrap_or(base.status_bg),
        }
    }
}

impl From<ColorConfigToml> for ColorConfig {
    fn from(raw: ColorConfigToml) -> Self {
        Self {
            light: raw.light.apply(Palette::light()),
            dark: raw.dark.apply(Palette::dark()),
        }
    }
}

fn deserialize_color_opt<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_color_string(&s).map_err(de::Error::custom))
        .transpose()
}

/// Parse a color string into a ratatui Color.
///
/// Supports named colors ("Cyan", "DarkGray", ...) case-insensitively and
/// hex colors ("#RRGGBB" or "#RGB").
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("Unknown color: {}", s)),
    }
}

fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let g = u8::from_str_radix(&hex[2..4], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let b = u8::from_str_radix(&hex[4..6], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            Ok(Color::Rgb(r, g, b))
        }
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let g = u8::from_str_radix(&hex[1..2], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let b = u8::from_str_radix(&hex[2..3], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        _ => Err(format!("Invalid hex color format: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color_string("Cyan").unwrap(), Color::Cyan);
        assert_eq!(parse_color_string("cyan").unwrap(), Color::Cyan);
        assert_eq!(parse_color_string("CYAN").unwrap(), Color::Cyan);
        assert_eq!(parse_color_string("DarkGray").unwrap(), Color::DarkGray);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            parse_color_string("#FF0000").unwrap(),
            Color::Rgb(255, 0, 0)
        );
        assert_eq!(
            parse_color_string("#00ff00").unwrap(),
            Color::Rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_parse_short_hex_colors() {
        assert_eq!(parse_color_string("#F00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(
            parse_color_string("#FFF").unwrap(),
            Color::Rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_parse_invalid_colors() {
        assert!(parse_color_string("invalid").is_err());
        assert!(parse_color_string("#GGGGGG").is_err());
        assert!(parse_color_string("#12345").is_err());
    }

    #[test]
    fn test_palette_selection() {
        let config = ColorConfig::default();
        assert_eq!(config.palette(false).accent, Color::Magenta);
        assert_eq!(config.palette(true).accent, Color::Cyan);
    }

    #[test]
    fn test_partial_dark_section_keeps_dark_defaults() {
        let config: ColorConfig = toml::from_str(
            r##"
[dark]
accent = "#FF0000"
"##,
        )
        .unwrap();

        assert_eq!(config.dark.accent, Color::Rgb(255, 0, 0));
        // Untouched fields come from the dark palette, not the light one
        assert_eq!(config.dark.border_active, Color::Cyan);
        assert_eq!(config.dark.text, Color::White);
    }
}
