use crate::{Card, CardSlot, HandSlot, Offer, Player, StrategyKind};

/// Decision policy behind a seat. The engine asks, the policy answers; the
/// engine then moves the cards itself, so a policy cannot corrupt game state.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// Which of the two dealt cards to hide.
    fn choose_hidden(&mut self, player: &Player, hand: &[Card; 2]) -> HandSlot;

    /// Index into `available`, or `None` for no preference.
    fn choose_target(&mut self, player: &Player, available: &[&Offer]) -> Option<usize>;

    fn choose_card(&mut self, player: &Player, offer: &Offer) -> CardSlot;
}

/// Builds the policy for a seat, used both for new games and for restored saves.
pub trait StrategyFactory {
    fn build(&mut self, seat: usize, name: &str, kind: StrategyKind) -> Box<dyn Strategy>;
}

impl<F> StrategyFactory for F
where
    F: FnMut(usize, &str, StrategyKind) -> Box<dyn Strategy>,
{
    fn build(&mut self, seat: usize, name: &str, kind: StrategyKind) -> Box<dyn Strategy> {
        self(seat, name, kind)
    }
}
