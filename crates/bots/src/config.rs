use jest_core::{default_bot_name, GameConfig, GameMode, SeatConfig, StrategyKind, DEFAULT_SEED};

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub seed: u64,
    pub games: u32,
    /// One entry per seat; two to four bots.
    pub bots: Vec<StrategyKind>,
    pub mode: GameMode,
    pub extension: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            games: 1,
            bots: vec![StrategyKind::Random, StrategyKind::Cheater],
            mode: GameMode::Classic,
            extension: false,
        }
    }
}

impl SimulationConfig {
    /// Game setup for the `game`-th game of a batch. Seeds advance by one per
    /// game so a batch is reproducible from its first seed.
    pub fn game_config(&self, game: u32) -> GameConfig {
        let seats = self
            .bots
            .iter()
            .enumerate()
            .map(|(idx, kind)| SeatConfig::new(default_bot_name(*kind, idx + 1), *kind))
            .collect();
        GameConfig::new(seats)
            .with_mode(self.mode)
            .with_extension(self.extension)
            .with_seed(self.seed.wrapping_add(u64::from(game)))
    }
}
