use std::fmt;

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Fixed, ordered list of colors a tag can be assigned.
pub const COLOR_LIST: [&str; 13] = [
    "red.500",
    "orange.500",
    "yellow.500",
    "green.500",
    "cyan.500",
    "blue.500",
    "pink.500",
    "purple.500",
    "gray.400",
    "gray.500",
    "gray.600",
    "white",
    "black",
];

// family.shade -> rgb
const PALETTE: [(&str, [u8; 3]); 42] = [
    ("white", [0xFF, 0xFF, 0xFF]),
    ("black", [0x00, 0x00, 0x00]),
    ("gray.300", [0xCB, 0xD5, 0xE0]),
    ("gray.400", [0xA0, 0xAE, 0xC0]),
    ("gray.500", [0x71, 0x80, 0x96]),
    ("gray.600", [0x4A, 0x55, 0x68]),
    ("red.300", [0xFC, 0x81, 0x81]),
    ("red.400", [0xF5, 0x65, 0x65]),
    ("red.500", [0xE5, 0x3E, 0x3E]),
    ("red.600", [0xC5, 0x30, 0x30]),
    ("orange.300", [0xF6, 0xAD, 0x55]),
    ("orange.400", [0xED, 0x89, 0x36]),
    ("orange.500", [0xDD, 0x6B, 0x20]),
    ("orange.600", [0xC0, 0x56, 0x21]),
    ("yellow.300", [0xF6, 0xE0, 0x5E]),
    ("yellow.400", [0xEC, 0xC9, 0x4B]),
    ("yellow.500", [0xD6, 0x9E, 0x2E]),
    ("yellow.600", [0xB7, 0x79, 0x1F]),
    ("green.300", [0x68, 0xD3, 0x91]),
    ("green.400", [0x48, 0xBB, 0x78]),
    ("green.500", [0x38, 0xA1, 0x69]),
    ("green.600", [0x2F, 0x85, 0x5A]),
    ("teal.300", [0x4F, 0xD1, 0xC5]),
    ("teal.400", [0x38, 0xB2, 0xAC]),
    ("teal.500", [0x31, 0x97, 0x95]),
    ("teal.600", [0x2C, 0x7A, 0x7B]),
    ("blue.300", [0x63, 0xB3, 0xED]),
    ("blue.400", [0x42, 0x99, 0xE1]),
    ("blue.500", [0x31, 0x82, 0xCE]),
    ("blue.600", [0x2B, 0x6C, 0xB0]),
    ("cyan.300", [0x76, 0xE4, 0xF7]),
    ("cyan.400", [0x0B, 0xC5, 0xEA]),
    ("cyan.500", [0x00, 0xB5, 0xD8]),
    ("cyan.600", [0x00, 0xA3, 0xC4]),
    ("purple.300", [0xB7, 0x94, 0xF4]),
    ("purple.400", [0x9F, 0x7A, 0xEA]),
    ("purple.500", [0x80, 0x5A, 0xD5]),
    ("purple.600", [0x6B, 0x46, 0xC1]),
    ("pink.300", [0xF6, 0x87, 0xB3]),
    ("pink.400", [0xED, 0x64, 0xA6]),
    ("pink.500", [0xD5, 0x3F, 0x8C]),
    ("pink.600", [0xB8, 0x32, 0x80]),
];

/// Named palette color, e.g. `purple.500`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the token against the built-in palette.
    pub fn to_color32(&self) -> Option<Color32> {
        PALETTE
            .iter()
            .find(|(name, _)| *name == self.0)
            .map(|(_, [r, g, b])| Color32::from_rgb(*r, *g, *b))
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn color_list() -> Vec<ColorToken> {
    COLOR_LIST.iter().copied().map(ColorToken::from).collect()
}

/// Every token the palette can render, in table order.
pub fn palette_tokens() -> impl Iterator<Item = ColorToken> {
    PALETTE.iter().map(|(name, _)| ColorToken::from(*name))
}
