use crate::{Card, Scorer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Human,
    Random,
    Cheater,
}

impl StrategyKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Human => "REAL",
            Self::Random => "RANDOM",
            Self::Cheater => "CHEATER",
        }
    }

    /// Unknown or missing tags resolve to a human seat.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "RANDOM" | "VirtualPlayerRandom" | "random" => Self::Random,
            "CHEATER" | "VirtualPlayerCheater" | "cheater" => Self::Cheater,
            "REAL" | "RealPlayer" => Self::Human,
            _ => Self::Human,
        }
    }

    pub fn is_bot(self) -> bool {
        !matches!(self, Self::Human)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub kind: StrategyKind,
    pub hand: Vec<Card>,
    pub jest: Vec<Card>,
    pub has_played: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: StrategyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Vec::with_capacity(2),
            jest: Vec::new(),
            has_played: false,
        }
    }

    pub fn to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn to_jest(&mut self, card: Card) {
        self.jest.push(card);
    }

    pub fn has_joker(&self) -> bool {
        self.jest.iter().any(Card::is_joker)
    }

    pub fn accept(&self, scorer: &dyn Scorer) -> i32 {
        scorer.score(&self.jest)
    }
}
