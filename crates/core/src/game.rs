use crate::{
    Card, ClassicScorer, Deck, EventBus, GameConfig, GameSummary, Offer, Phase, Player, Strategy,
    TrophyBoard,
};
use thiserror::Error;

mod choice;
mod finish;
mod persist;
mod round;
mod setup;

pub use setup::FirstChoice;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("a game needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("{strategies} strategies for {seats} seats")]
    StrategyMismatch { seats: usize, strategies: usize },
    #[error("not enough cards left for another round")]
    NoRoundAvailable,
    #[error("the game is already over")]
    GameOver,
    #[error("unsupported snapshot version {found} (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

/// A running game of Jest. Owns every card zone; strategies only ever see
/// borrowed views and the engine moves cards on their behalf.
pub struct Game {
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub deck: Deck,
    /// Leftover cards carried into the next deal.
    pub stack: Vec<Card>,
    pub offers: Vec<Offer>,
    pub trophy_cards: Vec<Card>,
    pub trophies: TrophyBoard,
    pub round: u32,
    pub phase: Phase,
    strategies: Vec<Box<dyn Strategy>>,
    scorer: ClassicScorer,
    events: EventBus,
    summary: Option<GameSummary>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("players", &self.players)
            .field("deck", &self.deck)
            .field("stack", &self.stack)
            .field("offers", &self.offers)
            .field("trophies", &self.trophies)
            .field("round", &self.round)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn scorer(&self) -> &ClassicScorer {
        &self.scorer
    }

    pub fn events(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameEnd
    }

    /// Cards a full deal consumes.
    pub fn cards_per_round(&self) -> usize {
        self.players.len() * 2
    }

    /// A hand or an offer still holds cards, e.g. after restoring a save
    /// taken mid-round.
    pub fn round_in_progress(&self) -> bool {
        self.players.iter().any(|player| !player.hand.is_empty())
            || self.offers.iter().any(|offer| !offer.is_empty())
    }

    pub fn has_next_round(&self) -> bool {
        if self.is_over() {
            return false;
        }
        self.round_in_progress() || self.deck.len() + self.stack.len() >= self.cards_per_round()
    }

    /// Cards across deck, stack, hands, offers, jests and trophy cards. Once
    /// the game is over, awarded trophy cards are counted in their jest only.
    pub fn card_count(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|player| player.hand.len() + player.jest.len())
            .sum();
        let offered: usize = self.offers.iter().map(Offer::card_count).sum();
        let awarded = if self.is_over() {
            self.trophies.iter().filter(|trophy| trophy.owner.is_some()).count()
        } else {
            0
        };
        held + offered + self.deck.len() + self.stack.len() + self.trophy_cards.len() - awarded
    }

    pub fn scores(&self) -> Vec<i32> {
        self.players
            .iter()
            .map(|player| player.accept(&self.scorer))
            .collect()
    }

    /// Plays rounds until the deck and stack cannot cover another deal, then
    /// settles trophies and scores.
    pub fn run(&mut self) -> GameSummary {
        while self.has_next_round() {
            if let Err(err) = self.play_round() {
                tracing::warn!(%err, "stopping round loop");
                break;
            }
        }
        self.finish()
    }

    fn first_unplayed(&self) -> Option<usize> {
        self.players.iter().position(|player| !player.has_played)
    }

    fn offer_of(&self, seat: usize) -> Option<usize> {
        self.offers.iter().position(|offer| offer.owner == seat)
    }
}
