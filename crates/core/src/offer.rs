use crate::Card;
use serde::{Deserialize, Serialize};

/// Which of the two dealt cards goes face down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandSlot {
    First,
    Second,
}

impl HandSlot {
    /// `1` hides the first card, `2` the second; anything else hides the first.
    pub fn from_choice(choice: u8) -> Self {
        if choice == 2 {
            Self::Second
        } else {
            Self::First
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardSlot {
    Visible,
    Hidden,
}

impl CardSlot {
    /// `2` picks the hidden card; anything else the visible one.
    pub fn from_choice(choice: u8) -> Self {
        if choice == 2 {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Offer {
    pub owner: usize,
    pub visible: Option<Card>,
    pub hidden: Option<Card>,
}

impl Offer {
    pub fn new(visible: Card, hidden: Card, owner: usize) -> Self {
        Self {
            owner,
            visible: Some(visible),
            hidden: Some(hidden),
        }
    }

    pub fn from_hand(hand: [Card; 2], hide: HandSlot, owner: usize) -> Self {
        let [first, second] = hand;
        match hide {
            HandSlot::First => Self::new(second, first, owner),
            HandSlot::Second => Self::new(first, second, owner),
        }
    }

    /// Other players may only pick from an offer nobody has touched yet.
    pub fn is_complete(&self) -> bool {
        self.visible.is_some() && self.hidden.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.hidden.is_none()
    }

    pub fn card(&self, slot: CardSlot) -> Option<Card> {
        match slot {
            CardSlot::Visible => self.visible,
            CardSlot::Hidden => self.hidden,
        }
    }

    pub fn remove(&mut self, slot: CardSlot) -> Option<Card> {
        match slot {
            CardSlot::Visible => self.visible.take(),
            CardSlot::Hidden => self.hidden.take(),
        }
    }

    pub fn remove_visible(&mut self) -> Option<Card> {
        self.visible.take()
    }

    pub fn remove_hidden(&mut self) -> Option<Card> {
        self.hidden.take()
    }

    /// Takes `slot`, or the other card when `slot` is already gone.
    pub fn take_preferring(&mut self, slot: CardSlot) -> Option<Card> {
        self.remove(slot).or_else(|| self.remove(slot.other()))
    }

    /// The leftover card when exactly one of the two is still present.
    pub fn remaining_card(&self) -> Option<Card> {
        match (self.visible, self.hidden) {
            (Some(card), None) | (None, Some(card)) => Some(card),
            _ => None,
        }
    }

    /// Removes and returns the leftover card under the same rule as `remaining_card`.
    pub fn take_remaining(&mut self) -> Option<Card> {
        let card = self.remaining_card()?;
        self.clear();
        Some(card)
    }

    pub fn clear(&mut self) {
        self.visible = None;
        self.hidden = None;
    }

    pub fn face_value_sum(&self) -> u32 {
        [self.visible, self.hidden]
            .iter()
            .flatten()
            .map(|card| u32::from(card.value))
            .sum()
    }

    pub fn card_count(&self) -> usize {
        usize::from(self.visible.is_some()) + usize::from(self.hidden.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn sample() -> Offer {
        Offer::new(Card::new(3, Suit::Spade), Card::new(1, Suit::Heart), 0)
    }

    #[test]
    fn remaining_card_only_when_exactly_one_left() {
        let mut offer = sample();
        assert_eq!(offer.remaining_card(), None);
        offer.remove_visible();
        assert_eq!(offer.remaining_card(), Some(Card::new(1, Suit::Heart)));
        offer.remove_hidden();
        assert_eq!(offer.remaining_card(), None);
        assert!(offer.is_empty());
    }

    #[test]
    fn hiding_first_card_shows_second() {
        let hand = [Card::new(4, Suit::Club), Card::new(2, Suit::Diamond)];
        let offer = Offer::from_hand(hand, HandSlot::First, 1);
        assert_eq!(offer.hidden, Some(hand[0]));
        assert_eq!(offer.visible, Some(hand[1]));
        let offer = Offer::from_hand(hand, HandSlot::Second, 1);
        assert_eq!(offer.visible, Some(hand[0]));
        assert_eq!(offer.hidden, Some(hand[1]));
    }

    #[test]
    fn take_preferring_falls_back_to_other_slot() {
        let mut offer = sample();
        assert_eq!(offer.remove(CardSlot::Hidden), Some(Card::new(1, Suit::Heart)));
        assert!(!offer.is_complete());
        assert_eq!(
            offer.take_preferring(CardSlot::Hidden),
            Some(Card::new(3, Suit::Spade))
        );
        assert_eq!(offer.take_preferring(CardSlot::Visible), None);
    }

    #[test]
    fn take_remaining_clears_offer() {
        let mut offer = sample();
        assert_eq!(offer.take_remaining(), None);
        offer.remove_hidden();
        assert_eq!(offer.take_remaining(), Some(Card::new(3, Suit::Spade)));
        assert!(offer.is_empty());
    }
}
