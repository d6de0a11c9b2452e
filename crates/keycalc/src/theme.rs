//! Visual themes
//!
//! A theme is plain data. Skins read colours and class names from it; the
//! accumulator never sees it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keypad::ButtonVariant;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Returns the colour as `#rrggbb`
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Named theme, selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark display, orange operators
    #[default]
    Classic,
    /// Light neutral surfaces, blue operators
    Soft,
}

impl ThemeName {
    /// All themes
    pub const ALL: [Self; 2] = [Self::Classic, Self::Soft];

    /// Returns the lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Soft => "soft",
        }
    }

    /// Returns the full theme
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Classic => Theme::classic(),
            Self::Soft => Theme::soft(),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme: {s}"))
    }
}

/// Colours for one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Calculator body
    pub background: Rgb,
    /// Display panel
    pub display_background: Rgb,
    /// Display and number text
    pub text: Rgb,
    /// Number buttons
    pub number: Rgb,
    /// Operator buttons
    pub operator: Rgb,
    /// Operator button text
    pub operator_text: Rgb,
    /// Clear button
    pub clear: Rgb,
    /// Frame borders
    pub border: Rgb,
    /// Pressed / highlighted button
    pub highlight: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Dark theme
    #[must_use]
    pub fn classic() -> Self {
        Self {
            name: ThemeName::Classic,
            background: Rgb(0x1c, 0x1c, 0x1e),
            display_background: Rgb(0x2c, 0x2c, 0x2e),
            text: Rgb(0xf5, 0xf5, 0xf7),
            number: Rgb(0x3a, 0x3a, 0x3c),
            operator: Rgb(0xff, 0x9f, 0x0a),
            operator_text: Rgb(0xff, 0xff, 0xff),
            clear: Rgb(0xa5, 0xa5, 0xa5),
            border: Rgb(0x48, 0x48, 0x4a),
            highlight: Rgb(0xff, 0xd6, 0x0a),
        }
    }

    /// Light theme
    #[must_use]
    pub fn soft() -> Self {
        Self {
            name: ThemeName::Soft,
            background: Rgb(0xf8, 0xfa, 0xfc),
            display_background: Rgb(0xf1, 0xf5, 0xf9),
            text: Rgb(0x1e, 0x29, 0x3b),
            number: Rgb(0xe2, 0xe8, 0xf0),
            operator: Rgb(0x3b, 0x82, 0xf6),
            operator_text: Rgb(0xff, 0xff, 0xff),
            clear: Rgb(0xcb, 0xd5, 0xe1),
            border: Rgb(0x94, 0xa3, 0xb8),
            highlight: Rgb(0x60, 0xa5, 0xfa),
        }
    }

    /// Button fill for a variant
    #[must_use]
    pub fn button_color(&self, variant: ButtonVariant) -> Rgb {
        match variant {
            ButtonVariant::Number => self.number,
            ButtonVariant::Operator => self.operator,
            ButtonVariant::Clear => self.clear,
        }
    }

    /// Button label colour for a variant
    #[must_use]
    pub fn button_text_color(&self, variant: ButtonVariant) -> Rgb {
        match variant {
            ButtonVariant::Operator => self.operator_text,
            ButtonVariant::Number | ButtonVariant::Clear => self.text,
        }
    }

    /// Root CSS class for the web skin
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("calc-theme-{}", self.name)
    }

    /// CSS class for a button variant
    #[must_use]
    pub fn button_class(variant: ButtonVariant) -> &'static str {
        match variant {
            ButtonVariant::Number => "calc-btn--number",
            ButtonVariant::Operator => "calc-btn--operator",
            ButtonVariant::Clear => "calc-btn--clear",
        }
    }

    /// Inline custom properties for the web skin root element
    #[must_use]
    pub fn css_variables(&self) -> String {
        [
            ("--calc-bg", self.background),
            ("--calc-display", self.display_background),
            ("--calc-text", self.text),
            ("--calc-number", self.number),
            ("--calc-operator", self.operator),
            ("--calc-operator-text", self.operator_text),
            ("--calc-clear", self.clear),
            ("--calc-border", self.border),
            ("--calc-highlight", self.highlight),
        ]
        .iter()
        .map(|(name, color)| format!("{name}: {};", color.to_hex()))
        .collect::<Vec<_>>()
        .join(" ")
    }
}
