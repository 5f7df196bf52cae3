//! Fixed name → color tables used by the name-mapping strategies.

use super::AccentColor;

/// A named color table.
///
/// Lookups are exact and case-sensitive; the tables are small enough that a
/// linear scan is the simplest correct choice.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    entries: &'static [(&'static str, [u8; 3])],
}

impl Palette {
    const fn new(entries: &'static [(&'static str, [u8; 3])]) -> Self {
        Self { entries }
    }

    /// Look up a color by its table name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<AccentColor> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, [r, g, b])| AccentColor::from_rgb(*r, *g, *b))
    }

    /// Every name the table recognizes, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Base Yaru theme color (no variant suffix).
pub const YARU_DEFAULT: [u8; 3] = [0xe9, 0x54, 0x20];

/// Ubuntu Yaru theme variants.
pub const YARU_VARIANTS: Palette = Palette::new(&[
    ("bark", [0x78, 0x78, 0x59]),
    ("sage", [0x65, 0x7b, 0x69]),
    ("olive", [0x4b, 0x85, 0x01]),
    ("viridian", [0x03, 0x87, 0x5b]),
    ("prussiangreen", [0x30, 0x82, 0x80]),
    ("blue", [0x00, 0x73, 0xe5]),
    ("purple", [0x77, 0x64, 0xd8]),
    ("magenta", [0xb3, 0x4c, 0xb3]),
    ("red", [0xda, 0x34, 0x50]),
]);

/// Colors offered by the GNOME Shell "Custom Accent Colors" extension.
pub const CUSTOM_ACCENT_COLORS: Palette = Palette::new(&[
    ("green", [0x2e, 0xc2, 0x7e]),
    ("yellow", [0xf5, 0xc2, 0x11]),
    ("orange", [0xe6, 0x61, 0x00]),
    ("red", [0xc0, 0x1c, 0x28]),
    ("pink", [0xd5, 0x61, 0x99]),
    ("purple", [0x81, 0x3d, 0x9c]),
    ("brown", [0x86, 0x5e, 0x3c]),
]);
