use crate::{Card, Suit};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

pub trait Scorer {
    fn score(&self, jest: &[Card]) -> i32;
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub joker_hearts: i32,
    pub suits: i32,
    pub black_pairs: i32,
    pub extension: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.joker_hearts + self.suits + self.black_pairs + self.extension
    }
}

/// Classic Jest counting.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicScorer;

impl ClassicScorer {
    pub fn breakdown(&self, jest: &[Card]) -> ScoreBreakdown {
        let mut suit_counts: HashMap<Suit, usize> = HashMap::new();
        for card in jest {
            *suit_counts.entry(card.suit).or_insert(0) += 1;
        }

        let joker_hearts = joker_hearts(jest, &suit_counts);

        let effective = |card: &Card| -> i32 {
            if card.is_ace() && suit_counts.get(&card.suit).copied() == Some(1) {
                5
            } else {
                i32::from(card.value)
            }
        };

        let mut suits = 0;
        let mut spade_values = BTreeSet::new();
        let mut club_values = BTreeSet::new();
        let mut extension = 0;
        for card in jest {
            match card.suit {
                Suit::Spade => {
                    suits += effective(card);
                    spade_values.insert(effective(card));
                }
                Suit::Club => {
                    suits += effective(card);
                    club_values.insert(effective(card));
                }
                Suit::Diamond => suits -= effective(card),
                Suit::Bonus => extension += 3,
                Suit::Malus => extension -= 3,
                Suit::Gold => extension += 5,
                Suit::Heart | Suit::Joker => {}
            }
        }
        let black_pairs = 2 * spade_values.intersection(&club_values).count() as i32;

        ScoreBreakdown {
            joker_hearts,
            suits,
            black_pairs,
            extension,
        }
    }
}

impl Scorer for ClassicScorer {
    fn score(&self, jest: &[Card]) -> i32 {
        self.breakdown(jest).total()
    }
}

fn joker_hearts(jest: &[Card], suit_counts: &HashMap<Suit, usize>) -> i32 {
    if !suit_counts.contains_key(&Suit::Joker) {
        return 0;
    }
    let hearts = suit_counts.get(&Suit::Heart).copied().unwrap_or(0);
    let heart_sum: i32 = jest
        .iter()
        .filter(|card| card.suit == Suit::Heart)
        .map(|card| i32::from(card.value))
        .sum();
    match hearts {
        0 => 4,
        1..=3 => -heart_sum,
        _ => heart_sum,
    }
}
