use crate::{Card, Trophy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    AwaitingDistribution,
    OfferPhase,
    ChoicePhase,
    RoundCleanup,
    GameEnd,
}

impl Phase {
    pub fn next(self, last_round: bool) -> Self {
        match self {
            Self::AwaitingDistribution => Self::OfferPhase,
            Self::OfferPhase => Self::ChoicePhase,
            Self::ChoicePhase => Self::RoundCleanup,
            Self::RoundCleanup if last_round => Self::GameEnd,
            Self::RoundCleanup => Self::AwaitingDistribution,
            Self::GameEnd => Self::GameEnd,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pick {
    pub chooser: usize,
    pub target: usize,
    pub card: Card,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub picks: Vec<Pick>,
    /// Cards left over in offers, in offer order.
    pub leftovers: Vec<Card>,
    pub final_round: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: Option<usize>,
    pub scores: Vec<i32>,
    pub trophies: Vec<Trophy>,
    pub rounds: u32,
}

impl GameSummary {
    pub fn winning_score(&self) -> Option<i32> {
        self.winner.and_then(|seat| self.scores.get(seat).copied())
    }
}
