use jest_core::{Card, CardSlot, HandSlot, Offer, Player, Strategy, StrategyKind};

/// Peeks at hidden cards and always reaches for the highest face value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheaterBot;

impl Strategy for CheaterBot {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Cheater
    }

    /// Keeps the better card out of sight; ties hide the first card.
    fn choose_hidden(&mut self, _player: &Player, hand: &[Card; 2]) -> HandSlot {
        if hand[0].value >= hand[1].value {
            HandSlot::First
        } else {
            HandSlot::Second
        }
    }

    /// Offer holding the highest card, hidden ones included. Equal values
    /// move the pick to the later offer.
    fn choose_target(&mut self, _player: &Player, available: &[&Offer]) -> Option<usize> {
        let mut best = None;
        let mut max = 0;
        for (idx, offer) in available.iter().enumerate() {
            for card in [offer.hidden, offer.visible].into_iter().flatten() {
                if card.value >= max {
                    max = card.value;
                    best = Some(idx);
                }
            }
        }
        best
    }

    fn choose_card(&mut self, _player: &Player, offer: &Offer) -> CardSlot {
        match (offer.visible, offer.hidden) {
            (Some(visible), Some(hidden)) if visible.value < hidden.value => CardSlot::Hidden,
            (None, Some(_)) => CardSlot::Hidden,
            _ => CardSlot::Visible,
        }
    }
}
