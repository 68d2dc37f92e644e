//! Card data: catalog records, colors and prices.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque catalog identifier
//! - `Card`: Catalog record (name, type line, color identity, prices)
//! - `ColorIdentity`: Canonically ordered set of `Color`s
//! - `Price`/`Prices`: Exact decimal amounts per `Currency`
//!
//! ## Type Lines
//!
//! The engine reads three things from a type line: the primary type (text
//! before the `—`), whether the card is a basic land, and whether it is a
//! legendary creature that may become the commander.

pub mod color;
pub mod definition;
pub mod price;

pub use color::{Color, ColorIdentity};
pub use definition::{primary_type, Card, CardId, ImageUris, TYPE_SEPARATOR};
pub use price::{Currency, Price, PriceParseError, Prices};
