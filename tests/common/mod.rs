//! Shared card fixtures.

#![allow(dead_code)]

use commander_deck::cards::{Card, Color, Currency};
use commander_deck::catalog::InMemoryCatalog;

pub fn forest() -> Card {
    Card::new("forest-1", "Forest", "Basic Land — Forest")
}

pub fn command_tower() -> Card {
    Card::new("tower-1", "Command Tower", "Land")
}

pub fn sol_ring() -> Card {
    Card::new("sol-1", "Sol Ring", "Artifact")
        .with_price_str(Currency::Usd, "1.99")
        .unwrap()
}

pub fn ezuri() -> Card {
    Card::new("ezuri-1", "Ezuri, Renegade Leader", "Legendary Creature — Elf Warrior")
        .with_colors([Color::Green])
}

pub fn meren() -> Card {
    Card::new("meren-1", "Meren of Clan Nel Toth", "Legendary Creature — Human Shaman")
        .with_colors([Color::Black, Color::Green])
}

pub fn elves() -> Card {
    Card::new("elves-1", "Llanowar Elves", "Creature — Elf Druid").with_colors([Color::Green])
}

pub fn growth() -> Card {
    Card::new("growth-1", "Giant Growth", "Instant").with_colors([Color::Green])
}

pub fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_cards([forest(), command_tower(), sol_ring(), ezuri(), meren(), elves(), growth()])
}
