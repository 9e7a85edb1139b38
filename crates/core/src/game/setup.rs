use super::*;
use crate::*;

impl Game {
    /// Builds the deck, draws the trophy cards and seats the players. Sinks
    /// subscribed on `events` see `GameStarted` before this returns.
    pub fn new(
        config: GameConfig,
        factory: &mut dyn StrategyFactory,
        events: EventBus,
    ) -> Result<Self, GameError> {
        let count = config.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidPlayerCount(count));
        }
        let mut rng = RngState::from_seed(config.seed);
        let mut deck = Deck::standard(config.extension, &mut rng);

        let mut trophy_cards = Vec::with_capacity(2);
        for _ in 0..config.trophy_card_count() {
            if let Some(card) = draw_trophy_card(&mut deck, config.extension) {
                trophy_cards.push(card);
            }
        }
        let trophies = TrophyBoard::from_cards(&trophy_cards);

        let players: Vec<Player> = config
            .seats
            .iter()
            .map(|seat| Player::new(seat.name.clone(), seat.kind))
            .collect();
        let strategies = config
            .seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| factory.build(idx, &seat.name, seat.kind))
            .collect();

        let mut game = Self::assemble(config, players, strategies, events)?;
        game.deck = deck;
        game.trophy_cards = trophy_cards;
        game.trophies = trophies;
        tracing::info!(
            players = count,
            mode = game.config.mode.label(),
            extension = game.config.extension,
            trophies = game.trophies.len(),
            "game started"
        );
        game.events.push(Event::GameStarted {
            player_count: count,
            mode: game.config.mode,
            extension: game.config.extension,
            players: game.players.clone(),
        });
        Ok(game)
    }

    /// Same as `new` with strategies supplied directly, one per seat.
    pub fn with_strategies(
        config: GameConfig,
        strategies: Vec<Box<dyn Strategy>>,
        events: EventBus,
    ) -> Result<Self, GameError> {
        let seats = config.player_count();
        if strategies.len() != seats {
            return Err(GameError::StrategyMismatch {
                seats,
                strategies: strategies.len(),
            });
        }
        let mut pool: Vec<Option<Box<dyn Strategy>>> = strategies.into_iter().map(Some).collect();
        let mut factory = |seat: usize, _: &str, _: StrategyKind| -> Box<dyn Strategy> {
            pool
                .get_mut(seat)
                .and_then(Option::take)
                .unwrap_or_else(|| Box::new(FirstChoice))
        };
        Self::new(config, &mut factory, events)
    }

    pub(super) fn assemble(
        config: GameConfig,
        players: Vec<Player>,
        strategies: Vec<Box<dyn Strategy>>,
        events: EventBus,
    ) -> Result<Self, GameError> {
        if strategies.len() != players.len() {
            return Err(GameError::StrategyMismatch {
                seats: players.len(),
                strategies: strategies.len(),
            });
        }
        Ok(Self {
            config,
            players,
            deck: Deck::new(),
            stack: Vec::new(),
            offers: Vec::new(),
            trophy_cards: Vec::new(),
            trophies: TrophyBoard::default(),
            round: 0,
            phase: Phase::AwaitingDistribution,
            strategies,
            scorer: ClassicScorer,
            events,
            summary: None,
        })
    }
}

/// Draws the next trophy card. With the extension, BONUS/MALUS/GOLD cards
/// cannot be trophies: they go back under the deck and the draw repeats.
pub(super) fn draw_trophy_card(deck: &mut Deck, extension: bool) -> Option<Card> {
    for _ in 0..=deck.len() {
        let card = deck.draw()?;
        if extension && card.suit.is_extension() {
            deck.push_back(card);
            continue;
        }
        return Some(card);
    }
    None
}

/// Answers "option 1" to everything. Stands in for a missing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl Strategy for FirstChoice {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Human
    }

    fn choose_hidden(&mut self, _player: &Player, _hand: &[Card; 2]) -> HandSlot {
        HandSlot::First
    }

    fn choose_target(&mut self, _player: &Player, _available: &[&Offer]) -> Option<usize> {
        Some(0)
    }

    fn choose_card(&mut self, _player: &Player, _offer: &Offer) -> CardSlot {
        CardSlot::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trophy_draw_skips_extension_cards() {
        let mut deck = Deck::from_cards(vec![
            Card::new(2, Suit::Bonus),
            Card::new(5, Suit::Gold),
            Card::new(3, Suit::Club),
        ]);
        assert_eq!(draw_trophy_card(&mut deck, true), Some(Card::new(3, Suit::Club)));
        assert_eq!(deck.len(), 2);

        let mut deck = Deck::from_cards(vec![Card::new(2, Suit::Bonus)]);
        assert_eq!(draw_trophy_card(&mut deck, false), Some(Card::new(2, Suit::Bonus)));
    }

    #[test]
    fn trophy_draw_gives_up_on_extension_only_deck() {
        let mut deck = Deck::from_cards(vec![Card::new(2, Suit::Bonus), Card::new(3, Suit::Malus)]);
        assert_eq!(draw_trophy_card(&mut deck, true), None);
        assert_eq!(deck.len(), 2);
    }
}
