use jest_core::{Card, CardSlot, HandSlot, Offer, Player, RngState, Strategy, StrategyKind};

/// Plays uniformly at random from its own seeded generator.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: RngState,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngState::from_seed(seed),
        }
    }
}

impl Strategy for RandomBot {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn choose_hidden(&mut self, _player: &Player, _hand: &[Card; 2]) -> HandSlot {
        if self.rng.coin() {
            HandSlot::Second
        } else {
            HandSlot::First
        }
    }

    fn choose_target(&mut self, _player: &Player, available: &[&Offer]) -> Option<usize> {
        if available.is_empty() {
            return None;
        }
        Some(self.rng.pick(available.len()))
    }

    fn choose_card(&mut self, _player: &Player, _offer: &Offer) -> CardSlot {
        if self.rng.coin() {
            CardSlot::Hidden
        } else {
            CardSlot::Visible
        }
    }
}
