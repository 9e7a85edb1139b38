use crate::{Card, RngState, Suit};
use std::collections::VecDeque;

/// Draw pile. Cards leave from the front; restored or returned cards join the back.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// 16 suited cards (values 1-4) and the Joker, plus BONUS 2, MALUS 3 and
    /// GOLD 5 with the extension, shuffled with `rng`.
    pub fn standard(extension: bool, rng: &mut RngState) -> Self {
        let mut deck = Self::unshuffled(extension);
        deck.shuffle(rng);
        deck
    }

    pub fn unshuffled(extension: bool) -> Self {
        let mut cards = VecDeque::with_capacity(20);
        for value in 1..=4 {
            for suit in Suit::STANDARD {
                cards.push_back(Card::new(value, suit));
            }
        }
        cards.push_back(Card::joker());
        if extension {
            cards.push_back(Card::new(2, Suit::Bonus));
            cards.push_back(Card::new(3, Suit::Malus));
            cards.push_back(Card::new(5, Suit::Gold));
        }
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(self.cards.make_contiguous());
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_composition() {
        let deck = Deck::unshuffled(false);
        assert_eq!(deck.len(), 17);
        for suit in Suit::STANDARD {
            let values: Vec<u8> = deck
                .iter()
                .filter(|card| card.suit == suit)
                .map(|card| card.value)
                .collect();
            assert_eq!(values, vec![1, 2, 3, 4]);
        }
        assert_eq!(deck.iter().filter(|card| card.is_joker()).count(), 1);
    }

    #[test]
    fn extension_adds_three_cards() {
        let deck = Deck::unshuffled(true);
        assert_eq!(deck.len(), 20);
        assert!(deck.iter().any(|card| *card == Card::new(2, Suit::Bonus)));
        assert!(deck.iter().any(|card| *card == Card::new(3, Suit::Malus)));
        assert!(deck.iter().any(|card| *card == Card::new(5, Suit::Gold)));
    }

    #[test]
    fn shuffle_keeps_card_set_and_is_seeded() {
        let mut first = Deck::standard(true, &mut RngState::from_seed(7));
        let second = Deck::standard(true, &mut RngState::from_seed(7));
        assert_eq!(first.to_vec(), second.to_vec());
        let mut sorted = first.to_vec();
        sorted.sort_by_key(|card| (card.priority(), card.value));
        let mut expected = Deck::unshuffled(true).to_vec();
        expected.sort_by_key(|card| (card.priority(), card.value));
        assert_eq!(sorted, expected);
        assert!(first.draw().is_some());
        assert_eq!(first.len(), 19);
    }

    #[test]
    fn draw_from_empty_deck_returns_none() {
        let mut deck = Deck::new();
        assert!(deck.draw().is_none());
        deck.push_back(Card::joker());
        assert_eq!(deck.draw(), Some(Card::joker()));
        assert!(deck.is_empty());
    }
}
