use crate::{Card, Player, Scorer, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrophyType {
    Highest,
    Lowest,
    Majority,
    Joker,
    BestJest,
    BestJestNoJoker,
}

impl TrophyType {
    /// Trophy awarded for a trophy card, if the card carries one.
    pub fn resolve(card: &Card) -> Option<Self> {
        match card.suit {
            Suit::Joker | Suit::Club => Some(Self::BestJest),
            Suit::Spade => Some(Self::Highest),
            Suit::Diamond if card.value == 4 => Some(Self::BestJestNoJoker),
            Suit::Diamond => Some(Self::Majority),
            Suit::Heart => Some(Self::Joker),
            Suit::Bonus | Suit::Malus | Suit::Gold => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trophy {
    pub kind: TrophyType,
    pub source: Card,
    pub owner: Option<usize>,
}

impl Trophy {
    pub fn new(kind: TrophyType, source: Card) -> Self {
        Self {
            kind,
            source,
            owner: None,
        }
    }

    pub fn from_card(card: Card) -> Option<Self> {
        TrophyType::resolve(&card).map(|kind| Self::new(kind, card))
    }

    /// Seat index of the winner under this trophy's rule. Ties go to the
    /// first qualifying seat in player order.
    pub fn find_winner(&self, players: &[Player], scorer: &dyn Scorer) -> Option<usize> {
        match self.kind {
            TrophyType::Highest => extreme_of_suit(players, self.source.suit, |a, b| a > b),
            TrophyType::Lowest => extreme_of_suit(players, self.source.suit, |a, b| a < b),
            TrophyType::Majority => majority(players, self.source.value),
            TrophyType::Joker => players.iter().position(Player::has_joker),
            TrophyType::BestJest => best_jest(players, scorer, |_| true),
            TrophyType::BestJestNoJoker => best_jest(players, scorer, |player| !player.has_joker()),
        }
    }
}

impl fmt::Display for Trophy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.kind, self.source)
    }
}

fn extreme_of_suit(
    players: &[Player],
    suit: Suit,
    better: impl Fn(u8, u8) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (seat, player) in players.iter().enumerate() {
        for card in player.jest.iter().filter(|card| card.suit == suit) {
            match best {
                Some((_, value)) if !better(card.value, value) => {}
                _ => best = Some((seat, card.value)),
            }
        }
    }
    best.map(|(seat, _)| seat)
}

fn majority(players: &[Player], value: u8) -> Option<usize> {
    let mut winner = None;
    let mut max = 0;
    for (seat, player) in players.iter().enumerate() {
        let count = player.jest.iter().filter(|card| card.value == value).count();
        if count > max {
            max = count;
            winner = Some(seat);
        }
    }
    winner
}

fn best_jest(
    players: &[Player],
    scorer: &dyn Scorer,
    eligible: impl Fn(&Player) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (seat, player) in players.iter().enumerate().filter(|(_, p)| eligible(p)) {
        let score = player.accept(scorer);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((seat, score)),
        }
    }
    best.map(|(seat, _)| seat)
}

/// Trophies in play for one game, in trophy-card order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrophyBoard {
    pub trophies: Vec<Trophy>,
}

impl TrophyBoard {
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            trophies: cards.iter().copied().filter_map(Trophy::from_card).collect(),
        }
    }

    pub fn assign_all(&mut self, players: &[Player], scorer: &dyn Scorer) {
        for trophy in &mut self.trophies {
            if let Some(winner) = trophy.find_winner(players, scorer) {
                trophy.owner = Some(winner);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trophy> + '_ {
        self.trophies.iter()
    }

    pub fn len(&self) -> usize {
        self.trophies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trophies.is_empty()
    }
}
