//! Colors and color identity.
//!
//! Color identity is serialized the way the catalog sends it: an array of
//! single-letter symbols (`["W", "G"]`). In memory it is kept deduplicated
//! and in canonical WUBRG order so two identities compare equal regardless
//! of how they were built.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the five colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// All colors in WUBRG order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Upper-case color symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Parse a color symbol, case-insensitive.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.symbol() == symbol.to_ascii_uppercase())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Set of colors, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Color>", into = "Vec<Color>")]
pub struct ColorIdentity(SmallVec<[Color; 5]>);

impl ColorIdentity {
    /// The empty (colorless) identity.
    #[must_use]
    pub fn colorless() -> Self {
        Self::default()
    }

    /// Add a color, keeping WUBRG order.
    pub fn insert(&mut self, color: Color) {
        if let Err(pos) = self.0.binary_search(&color) {
            self.0.insert(pos, color);
        }
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.binary_search(&color).is_ok()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every color of `other` is part of this identity.
    #[must_use]
    pub fn includes(&self, other: &ColorIdentity) -> bool {
        other.iter().all(|c| self.contains(c))
    }

    /// Iterate colors in WUBRG order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Color> for ColorIdentity {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut identity = Self::default();
        for color in iter {
            identity.insert(color);
        }
        identity
    }
}

impl From<Vec<Color>> for ColorIdentity {
    fn from(colors: Vec<Color>) -> Self {
        colors.into_iter().collect()
    }
}

impl From<ColorIdentity> for Vec<Color> {
    fn from(identity: ColorIdentity) -> Self {
        identity.0.into_vec()
    }
}

impl std::fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "C");
        }
        for color in self.iter() {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}
