use crate::{Card, GameMode, Offer, Player, StrategyKind, Trophy, TrophyType};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    /// Strategy tag, see `StrategyKind::tag`.
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub hand: Vec<Card>,
    #[serde(default)]
    pub jest: Vec<Card>,
    #[serde(default)]
    pub has_played: bool,
}

impl PlayerState {
    pub fn capture(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            strategy: player.kind.tag().to_string(),
            hand: player.hand.clone(),
            jest: player.jest.clone(),
            has_played: player.has_played,
        }
    }

    pub fn restore(&self) -> Player {
        Player {
            name: self.name.clone(),
            kind: StrategyKind::from_tag(&self.strategy),
            hand: self.hand.clone(),
            jest: self.jest.clone(),
            has_played: self.has_played,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferState {
    pub owner: usize,
    #[serde(default)]
    pub visible: Option<Card>,
    #[serde(default)]
    pub hidden: Option<Card>,
}

impl From<&Offer> for OfferState {
    fn from(offer: &Offer) -> Self {
        Self {
            owner: offer.owner,
            visible: offer.visible,
            hidden: offer.hidden,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrophyState {
    pub kind: TrophyType,
    pub source: Card,
    #[serde(default)]
    pub owner: Option<usize>,
}

impl From<&Trophy> for TrophyState {
    fn from(trophy: &Trophy) -> Self {
        Self {
            kind: trophy.kind,
            source: trophy.source,
            owner: trophy.owner,
        }
    }
}

/// Everything needed to resume a game. Players inside offers and trophies
/// are referenced by seat index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub version: u32,
    pub player_count: usize,
    pub mode: GameMode,
    pub extension: bool,
    pub round: u32,
    pub seed: u64,
    pub players: Vec<PlayerState>,
    pub deck: Vec<Card>,
    pub stack: Vec<Card>,
    pub trophy_cards: Vec<Card>,
    #[serde(default)]
    pub offers: Vec<OfferState>,
    #[serde(default)]
    pub trophies: Vec<TrophyState>,
}

impl GameSnapshot {
    /// Cards across every zone. Only meaningful before trophies are handed
    /// out, since awarded trophy cards also sit in a jest.
    pub fn card_count(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|player| player.hand.len() + player.jest.len())
            .sum();
        let offered: usize = self
            .offers
            .iter()
            .map(|offer| usize::from(offer.visible.is_some()) + usize::from(offer.hidden.is_some()))
            .sum();
        held + offered + self.deck.len() + self.stack.len() + self.trophy_cards.len()
    }
}

/// Storage backend for snapshots. Encoding is the implementor's business.
pub trait SaveStore {
    fn save(&self, name: &str, snapshot: &GameSnapshot) -> Result<(), String>;
    fn load(&self, name: &str) -> Result<GameSnapshot, String>;
    fn list(&self) -> Result<Vec<String>, String>;
}
