//! Commander color filter.
//!
//! While a deck has a commander, catalog searches can be narrowed to cards
//! inside the commander's color identity. The filter is derived state: it
//! is never stored on its own and is rebuilt from the deck's commander.
//!
//! ## States
//!
//! ```text
//! NoCommander --add_commander(colors)--> Active(colors)
//! Active(_)   --remove_commander------> NoCommander
//! Suspended(_)--remove_commander------> NoCommander
//! Active(c)   --toggle----------------> Suspended(c)
//! Suspended(c)--toggle----------------> Active(c)
//! NoCommander --toggle----------------> NoCommander
//! ```
//!
//! `Suspended` is the user having switched the filter off while a commander
//! is still present; the colors are kept so toggling back needs nothing else.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, ColorIdentity};

/// Filter state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterState {
    /// No commander; searches are unrestricted.
    #[default]
    NoCommander,
    /// Searches are restricted to the commander's colors.
    Active(ColorIdentity),
    /// Commander present but the user turned the filter off.
    Suspended(ColorIdentity),
}

/// What the catalog-query side sees: whether to filter, and by what.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterView {
    pub active: bool,
    pub colors: ColorIdentity,
}

/// Commander color filter coordinator.
///
/// ## Example
///
/// ```
/// use commander_deck::cards::{Color, ColorIdentity};
/// use commander_deck::deck::CommanderFilter;
///
/// let mut filter = CommanderFilter::new();
/// assert!(!filter.toggle()); // nothing to toggle without a commander
///
/// filter.add_commander([Color::Green].into_iter().collect());
/// assert!(filter.is_active());
/// assert_eq!(filter.query_clause().as_deref(), Some("id<=g"));
///
/// filter.toggle();
/// assert!(!filter.is_active());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommanderFilter {
    state: FilterState,
}

impl CommanderFilter {
    /// Create an inactive filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// A commander was designated; filter by its colors.
    pub fn add_commander(&mut self, colors: ColorIdentity) {
        self.state = FilterState::Active(colors);
    }

    /// The commander left the deck.
    pub fn remove_commander(&mut self) {
        self.state = FilterState::NoCommander;
    }

    /// Flip between active and suspended.
    ///
    /// Returns whether the state changed; without a commander this is a no-op.
    pub fn toggle(&mut self) -> bool {
        self.state = match std::mem::take(&mut self.state) {
            FilterState::NoCommander => return false,
            FilterState::Active(colors) => FilterState::Suspended(colors),
            FilterState::Suspended(colors) => FilterState::Active(colors),
        };
        true
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, FilterState::Active(_))
    }

    #[must_use]
    pub fn has_commander(&self) -> bool {
        !matches!(self.state, FilterState::NoCommander)
    }

    /// Commander colors, whether or not the filter is switched on.
    #[must_use]
    pub fn colors(&self) -> Option<&ColorIdentity> {
        match &self.state {
            FilterState::NoCommander => None,
            FilterState::Active(colors) | FilterState::Suspended(colors) => Some(colors),
        }
    }

    /// `{active, colors}` snapshot for the catalog-query collaborator.
    #[must_use]
    pub fn view(&self) -> FilterView {
        FilterView {
            active: self.is_active(),
            colors: self.colors().cloned().unwrap_or_default(),
        }
    }

    /// Whether a search result passes the filter.
    #[must_use]
    pub fn allows(&self, card: &Card) -> bool {
        match &self.state {
            FilterState::Active(colors) => colors.includes(&card.color_identity),
            _ => true,
        }
    }

    /// Catalog search fragment restricting color identity, e.g. `id<=wug`.
    ///
    /// `None` while the filter is off. Colorless commanders yield `id<=c`.
    #[must_use]
    pub fn query_clause(&self) -> Option<String> {
        match &self.state {
            FilterState::Active(colors) => {
                Some(format!("id<={}", colors.to_string().to_ascii_lowercase()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn simic() -> ColorIdentity {
        [Color::Green, Color::Blue].into_iter().collect()
    }

    #[test]
    fn test_starts_inactive() {
        let filter = CommanderFilter::new();
        assert_eq!(filter.state(), &FilterState::NoCommander);
        assert_eq!(filter.view(), FilterView::default());
        assert_eq!(filter.query_clause(), None);
    }

    #[test]
    fn test_add_and_remove_commander() {
        let mut filter = CommanderFilter::new();
        filter.add_commander(simic());
        assert!(filter.is_active());
        assert_eq!(filter.view(), FilterView { active: true, colors: simic() });

        filter.remove_commander();
        assert!(!filter.is_active());
        assert_eq!(filter.colors(), None);
    }

    #[test]
    fn test_toggle_keeps_colors() {
        let mut filter = CommanderFilter::new();
        filter.add_commander(simic());

        assert!(filter.toggle());
        assert_eq!(filter.state(), &FilterState::Suspended(simic()));
        assert_eq!(filter.view(), FilterView { active: false, colors: simic() });

        assert!(filter.toggle());
        assert_eq!(filter.state(), &FilterState::Active(simic()));
    }

    #[test]
    fn test_toggle_without_commander_is_noop() {
        let mut filter = CommanderFilter::new();
        assert!(!filter.toggle());
        assert_eq!(filter.state(), &FilterState::NoCommander);
    }

    #[test]
    fn test_remove_while_suspended() {
        let mut filter = CommanderFilter::new();
        filter.add_commander(simic());
        filter.toggle();
        filter.remove_commander();
        assert!(!filter.has_commander());
    }

    #[test]
    fn test_allows_subset_only_when_active() {
        let mut filter = CommanderFilter::new();
        let bolt = Card::new("b", "Lightning Bolt", "Instant").with_colors([Color::Red]);
        let growth = Card::new("g", "Giant Growth", "Instant").with_colors([Color::Green]);
        let ring = Card::new("s", "Sol Ring", "Artifact");

        assert!(filter.allows(&bolt));

        filter.add_commander(simic());
        assert!(!filter.allows(&bolt));
        assert!(filter.allows(&growth));
        assert!(filter.allows(&ring));

        filter.toggle();
        assert!(filter.allows(&bolt));
    }

    #[test]
    fn test_query_clause() {
        let mut filter = CommanderFilter::new();
        filter.add_commander(simic());
        assert_eq!(filter.query_clause().as_deref(), Some("id<=ug"));

        filter.add_commander(ColorIdentity::colorless());
        assert_eq!(filter.query_clause().as_deref(), Some("id<=c"));
    }
}
