//! Card records - catalog data as the deck sees it.
//!
//! A `Card` is fetched from the catalog and never modified by the engine.
//! Two cards with the same `CardId` are interchangeable; whether more than
//! one copy may sit in a deck is decided from the type line.
//!
//! The serialized shape follows the catalog wire format (`type_line`,
//! `color_identity`, `prices`, `image_uris`), so catalog JSON can be
//! deserialized directly and unknown fields are ignored.

use serde::{Deserialize, Serialize};

use super::color::ColorIdentity;
use super::price::{Currency, Price, Prices};

/// Separator between the primary type and the subtypes of a type line.
pub const TYPE_SEPARATOR: char = '—';

const BASIC_LAND: &str = "Basic Land";
const LEGENDARY_CREATURE: &str = "Legendary Creature";

/// Opaque unique identifier assigned by the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Image links published by the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_crop: Option<String>,
}

/// A card as returned by the catalog.
///
/// ## Example
///
/// ```
/// use commander_deck::cards::{Card, Color};
///
/// let elf = Card::new("c1", "Llanowar Elves", "Creature — Elf Druid")
///     .with_colors([Color::Green])
///     .with_price_str(commander_deck::cards::Currency::Usd, "0.25")
///     .unwrap();
///
/// assert_eq!(elf.primary_type(), "Creature");
/// assert!(!elf.is_basic_land());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Catalog identifier.
    pub id: CardId,

    /// Printed name. Export and import key on this, not on `id`.
    pub name: String,

    /// Full type line, e.g. `"Legendary Creature — Elf Warrior"`.
    pub type_line: String,

    /// Color identity; empty for colorless cards.
    #[serde(default)]
    pub color_identity: ColorIdentity,

    /// Market prices per currency.
    #[serde(default)]
    pub prices: Prices,

    /// Artwork links, when the catalog has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
}

impl Card {
    /// Create a card with no colors, prices or images.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            type_line: type_line.into(),
            color_identity: ColorIdentity::default(),
            prices: Prices::default(),
            image_uris: None,
        }
    }

    /// Set the color identity (builder pattern).
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = super::color::Color>) -> Self {
        self.color_identity = colors.into_iter().collect();
        self
    }

    /// Set a price (builder pattern).
    #[must_use]
    pub fn with_price(mut self, currency: Currency, price: Price) -> Self {
        self.prices.set(currency, Some(price));
        self
    }

    /// Set a price from its decimal string form.
    ///
    /// # Errors
    ///
    /// Fails when `amount` is not a decimal amount.
    pub fn with_price_str(
        self,
        currency: Currency,
        amount: &str,
    ) -> Result<Self, super::price::PriceParseError> {
        let price = amount.parse()?;
        Ok(self.with_price(currency, price))
    }

    /// Set the normal-size image link (builder pattern).
    #[must_use]
    pub fn with_image(mut self, normal: impl Into<String>) -> Self {
        self.image_uris
            .get_or_insert_with(ImageUris::default)
            .normal = Some(normal.into());
        self
    }

    /// Text before the first `—`, or the whole type line.
    #[must_use]
    pub fn primary_type(&self) -> &str {
        primary_type(&self.type_line)
    }

    /// Basic lands are exempt from the one-copy rule.
    #[must_use]
    pub fn is_basic_land(&self) -> bool {
        self.type_line.contains(BASIC_LAND)
    }

    /// Whether this card may become the deck's commander.
    #[must_use]
    pub fn is_commander_eligible(&self) -> bool {
        self.type_line.contains(LEGENDARY_CREATURE)
    }

    /// The normal-size image link, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(|uris| uris.normal.as_deref())
    }
}

/// Primary type of a type line: the trimmed text before the first `—`.
#[must_use]
pub fn primary_type(type_line: &str) -> &str {
    match type_line.split_once(TYPE_SEPARATOR) {
        Some((head, _)) => head.trim(),
        None => type_line.trim(),
    }
}
