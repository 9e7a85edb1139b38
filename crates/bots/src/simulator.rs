use crate::{BatchReport, BotFactory, BotsError, GameRecord, RoundRecord, SeatResult, SeatTally, SimulationConfig};
use jest_core::{EventBus, Game};

/// Runs bot-only games without any presenter attached.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    pub config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Plays the `index`-th game of the batch to the end.
    pub fn play(&self, index: u32) -> Result<GameRecord, BotsError> {
        let config = self.config.game_config(index);
        let seed = config.seed;
        let mut factory = BotFactory::new(seed);
        let mut game = Game::new(config, &mut factory, EventBus::default())?;
        let trophy_cards = game.trophy_cards.clone();

        let mut rounds = Vec::new();
        while game.has_next_round() {
            let report = game.play_round()?;
            rounds.push(RoundRecord::from_report(&report, &game.players));
        }
        let summary = game.finish();
        let event_count = game.events().drain().count();
        tracing::debug!(index, seed, rounds = rounds.len(), winner = ?summary.winner, "simulated game");

        let seats = game
            .players
            .iter()
            .zip(&summary.scores)
            .map(|(player, score)| SeatResult {
                name: player.name.clone(),
                kind: player.kind,
                score: *score,
                jest: player.jest.clone(),
            })
            .collect();
        Ok(GameRecord {
            seed,
            mode: game.config.mode,
            extension: game.config.extension,
            trophy_cards,
            rounds,
            trophies: summary.trophies,
            seats,
            winner: summary.winner,
            event_count,
        })
    }

    /// Plays every game of the batch and tallies wins per seat.
    pub fn run(&self) -> Result<BatchReport, BotsError> {
        let mut tallies: Vec<SeatTally> = self
            .config
            .game_config(0)
            .seats
            .into_iter()
            .map(|seat| SeatTally {
                name: seat.name,
                kind: seat.kind,
                wins: 0,
                total_score: 0,
            })
            .collect();
        let mut records = Vec::with_capacity(self.config.games as usize);
        for index in 0..self.config.games {
            let record = self.play(index)?;
            for (tally, seat) in tallies.iter_mut().zip(&record.seats) {
                tally.total_score += i64::from(seat.score);
            }
            if let Some(tally) = record.winner.and_then(|seat| tallies.get_mut(seat)) {
                tally.wins += 1;
            }
            records.push(record);
        }
        tracing::info!(games = self.config.games, "simulation finished");
        Ok(BatchReport {
            games: self.config.games,
            tallies,
            records,
        })
    }
}
