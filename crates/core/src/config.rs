use crate::StrategyKind;
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const DEFAULT_SEED: u64 = 0x1E57;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    Classic,
    /// The weakest dealt hand picks first.
    Jester,
    /// The carry-over stack is shown before each deal.
    Clear,
}

impl GameMode {
    pub fn index(self) -> u8 {
        match self {
            Self::Classic => 0,
            Self::Jester => 1,
            Self::Clear => 2,
        }
    }

    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Jester,
            2 => Self::Clear,
            _ => Self::Classic,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" | "0" => Some(Self::Classic),
            "jester" | "1" => Some(Self::Jester),
            "clear" | "2" => Some(Self::Clear),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Jester => "jester",
            Self::Clear => "clear",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub kind: StrategyKind,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, kind: StrategyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub seats: Vec<SeatConfig>,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default)]
    pub extension: bool,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl GameConfig {
    pub fn new(seats: Vec<SeatConfig>) -> Self {
        Self {
            seats,
            mode: GameMode::Classic,
            extension: false,
            seed: DEFAULT_SEED,
        }
    }

    /// Seat layout from a humans/bots split. Humans are capped at four, bots
    /// fill at most the remaining seats, and bots are added until two seats
    /// exist. Humans sit first, then bots.
    pub fn from_counts(
        humans: usize,
        bots: usize,
        names: &[String],
        bot_kinds: &[StrategyKind],
    ) -> Self {
        let humans = humans.min(MAX_PLAYERS);
        let mut bots = bots.min(MAX_PLAYERS - humans);
        if humans + bots < MIN_PLAYERS {
            bots = MIN_PLAYERS - humans;
        }
        let mut seats = Vec::with_capacity(humans + bots);
        for idx in 0..humans {
            let name = names
                .get(idx)
                .filter(|name| !name.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Player {}", idx + 1));
            seats.push(SeatConfig::new(name, StrategyKind::Human));
        }
        for idx in 0..bots {
            let kind = bot_kinds.get(idx).copied().unwrap_or(StrategyKind::Random);
            seats.push(SeatConfig::new(default_bot_name(kind, idx + 1), kind));
        }
        Self::new(seats)
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_extension(mut self, extension: bool) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// One trophy card with four players, two otherwise.
    pub fn trophy_card_count(&self) -> usize {
        if self.player_count() == MAX_PLAYERS {
            1
        } else {
            2
        }
    }
}

pub fn default_bot_name(kind: StrategyKind, number: usize) -> String {
    match kind {
        StrategyKind::Cheater => format!("HAL-9000-{number}"),
        _ => format!("Bender-{number}"),
    }
}
