use crate::{CheaterBot, RandomBot};
use jest_core::{DecisionHub, InteractiveStrategy, Strategy, StrategyFactory, StrategyKind};

/// Builds the policy for each seat. Human seats are wired to `hub`; without a
/// hub they are played by a random bot.
#[derive(Debug, Clone)]
pub struct BotFactory {
    seed: u64,
    hub: Option<DecisionHub>,
}

impl BotFactory {
    pub fn new(seed: u64) -> Self {
        Self { seed, hub: None }
    }

    pub fn with_hub(mut self, hub: DecisionHub) -> Self {
        self.hub = Some(hub);
        self
    }

    pub fn hub(&self) -> Option<&DecisionHub> {
        self.hub.as_ref()
    }

    /// Seed for one seat's random bot, distinct per seat.
    pub fn seat_seed(&self, seat: usize) -> u64 {
        let salt = (seat as u64 + 1).wrapping_mul(0xA24B_AED4_963E_E407);
        self.seed ^ salt
    }
}

impl StrategyFactory for BotFactory {
    fn build(&mut self, seat: usize, name: &str, kind: StrategyKind) -> Box<dyn Strategy> {
        match kind {
            StrategyKind::Random => Box::new(RandomBot::new(self.seat_seed(seat))),
            StrategyKind::Cheater => Box::new(CheaterBot),
            StrategyKind::Human => match &self.hub {
                Some(hub) => Box::new(InteractiveStrategy::new(hub.clone())),
                None => {
                    tracing::warn!(seat, seat_name = name, "no decision hub, seat played by a random bot");
                    Box::new(RandomBot::new(self.seat_seed(seat)))
                }
            },
        }
    }
}
