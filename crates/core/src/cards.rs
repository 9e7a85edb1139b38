use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    Heart,
    Spade,
    Club,
    Diamond,
    Joker,
    Bonus,
    Malus,
    Gold,
}

impl Suit {
    /// The four suits dealt in a standard deck, in deck-building order.
    pub const STANDARD: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Club, Suit::Diamond];

    pub fn is_extension(self) -> bool {
        matches!(self, Suit::Bonus | Suit::Malus | Suit::Gold)
    }

    pub fn is_black(self) -> bool {
        matches!(self, Suit::Spade | Suit::Club)
    }

    fn base_priority(self) -> u32 {
        match self {
            Suit::Joker => 100,
            Suit::Heart => 4,
            Suit::Spade => 3,
            Suit::Club => 2,
            Suit::Diamond => 1,
            Suit::Bonus | Suit::Malus | Suit::Gold => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Suit::Heart => "HEART",
            Suit::Spade => "SPADE",
            Suit::Club => "CLUB",
            Suit::Diamond => "DIAMOND",
            Suit::Joker => "JOKER",
            Suit::Bonus => "BONUS",
            Suit::Malus => "MALUS",
            Suit::Gold => "GOLD",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub value: u8,
    pub suit: Suit,
    /// Carried through saves only; nothing in the engine reads it.
    #[serde(default)]
    pub face_up: bool,
}

impl Card {
    pub fn new(value: u8, suit: Suit) -> Self {
        Self {
            value,
            suit,
            face_up: false,
        }
    }

    pub fn joker() -> Self {
        Self::new(0, Suit::Joker)
    }

    pub fn is_ace(&self) -> bool {
        self.value == 1
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }

    /// Suit base plus face value; jokers sort above everything else.
    pub fn priority(&self) -> u32 {
        self.suit.base_priority() + u32::from(self.value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit.label(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_adds_face_value_to_suit_base() {
        assert_eq!(Card::new(3, Suit::Heart).priority(), 7);
        assert_eq!(Card::new(1, Suit::Diamond).priority(), 2);
        assert_eq!(Card::joker().priority(), 100);
        assert_eq!(Card::new(5, Suit::Gold).priority(), 5);
    }

    #[test]
    fn suit_serializes_upper_case() {
        let body = serde_json::to_string(&Card::new(2, Suit::Club)).expect("serialize");
        assert!(body.contains("\"CLUB\""));
    }
}
