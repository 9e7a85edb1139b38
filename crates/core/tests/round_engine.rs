use jest_core::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

fn c(value: u8, suit: Suit) -> Card {
    Card::new(value, suit)
}

#[derive(Debug, Clone, Copy)]
struct Scripted {
    hide: HandSlot,
    target: Option<usize>,
    card: CardSlot,
}

const FIRST: Scripted = Scripted {
    hide: HandSlot::First,
    target: Some(0),
    card: CardSlot::Visible,
};

impl Strategy for Scripted {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Human
    }

    fn choose_hidden(&mut self, _player: &Player, _hand: &[Card; 2]) -> HandSlot {
        self.hide
    }

    fn choose_target(&mut self, _player: &Player, _available: &[&Offer]) -> Option<usize> {
        self.target
    }

    fn choose_card(&mut self, _player: &Player, _offer: &Offer) -> CardSlot {
        self.card
    }
}

fn scripted(script: Vec<Scripted>) -> impl FnMut(usize, &str, StrategyKind) -> Box<dyn Strategy> {
    move |seat: usize, _name: &str, _kind: StrategyKind| -> Box<dyn Strategy> {
        Box::new(script.get(seat).copied().unwrap_or(FIRST))
    }
}

fn staged(deck: Vec<Card>, players: usize, mode: GameMode) -> GameSnapshot {
    GameSnapshot {
        version: SNAPSHOT_VERSION,
        player_count: players,
        mode,
        extension: false,
        round: 0,
        seed: 11,
        players: (0..players)
            .map(|seat| PlayerState::capture(&Player::new(format!("P{seat}"), StrategyKind::Human)))
            .collect(),
        deck,
        stack: Vec::new(),
        trophy_cards: Vec::new(),
        offers: Vec::new(),
        trophies: Vec::new(),
    }
}

/// Seat 0 shows SPADE 2, seat 1 shows CLUB 4, seat 2 shows HEART 3 when
/// every seat hides its first card.
fn three_seat_deck() -> Vec<Card> {
    vec![
        c(1, Suit::Spade),
        c(2, Suit::Spade),
        c(1, Suit::Club),
        c(4, Suit::Club),
        c(1, Suit::Diamond),
        c(3, Suit::Heart),
    ]
}

fn staged_game(mode: GameMode, script: Vec<Scripted>) -> Game {
    let mut factory = scripted(script);
    Game::from_snapshot(staged(three_seat_deck(), 3, mode), &mut factory, EventBus::default())
        .expect("staged game")
}

fn recorder() -> (EventBus, Rc<RefCell<Vec<Event>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink_log = Rc::clone(&log);
    let mut bus = EventBus::default();
    bus.subscribe(move |event: &Event| sink_log.borrow_mut().push(event.clone()));
    (bus, log)
}

fn seats(count: usize) -> GameConfig {
    GameConfig::from_counts(count, 0, &[], &[])
}

fn first_choice_game(config: GameConfig, events: EventBus) -> Game {
    let strategies: Vec<Box<dyn Strategy>> = (0..config.player_count())
        .map(|_| Box::new(FirstChoice) as Box<dyn Strategy>)
        .collect();
    Game::with_strategies(config, strategies, events).expect("game")
}

#[test]
fn choice_chain_follows_the_robbed_player() {
    let mut game = staged_game(
        GameMode::Classic,
        vec![
            FIRST,
            Scripted {
                target: Some(1),
                ..FIRST
            },
            FIRST,
        ],
    );
    let report = game.play_round().expect("round");
    let picks: Vec<(usize, usize, Card)> = report
        .picks
        .iter()
        .map(|pick| (pick.chooser, pick.target, pick.card))
        .collect();
    assert_eq!(
        picks,
        vec![
            (1, 2, c(3, Suit::Heart)),
            (2, 0, c(2, Suit::Spade)),
            (0, 1, c(4, Suit::Club)),
        ]
    );
    assert!(report.final_round);
    assert_eq!(game.players[0].jest, vec![c(4, Suit::Club), c(1, Suit::Spade)]);
    assert_eq!(game.players[1].jest, vec![c(3, Suit::Heart), c(1, Suit::Club)]);
    assert_eq!(game.players[2].jest, vec![c(2, Suit::Spade), c(1, Suit::Diamond)]);
    assert!(game.offers.is_empty());
}

#[test]
fn last_player_takes_from_own_offer() {
    let mut game = staged_game(GameMode::Classic, vec![FIRST; 3]);
    let report = game.play_round().expect("round");
    let picks: Vec<(usize, usize, Card)> = report
        .picks
        .iter()
        .map(|pick| (pick.chooser, pick.target, pick.card))
        .collect();
    assert_eq!(
        picks,
        vec![
            (1, 0, c(2, Suit::Spade)),
            (0, 1, c(4, Suit::Club)),
            (2, 2, c(3, Suit::Heart)),
        ]
    );
}

#[test]
fn out_of_range_target_takes_first_offer() {
    let wild = Scripted {
        target: Some(9),
        ..FIRST
    };
    let mut game = staged_game(GameMode::Classic, vec![FIRST, wild, FIRST]);
    let report = game.play_round().expect("round");
    assert_eq!(report.picks[0].chooser, 1);
    assert_eq!(report.picks[0].target, 0);
}

#[test]
fn hidden_card_can_be_chosen() {
    let hidden = Scripted {
        card: CardSlot::Hidden,
        ..FIRST
    };
    let mut game = staged_game(GameMode::Classic, vec![FIRST, hidden, hidden]);
    let report = game.play_round().expect("round");
    assert_eq!(report.picks[0].card, c(1, Suit::Spade));
    assert_eq!(report.picks.len(), 3);
}

#[test]
fn jester_mode_starts_with_weakest_offer() {
    let mut game = staged_game(GameMode::Jester, vec![FIRST; 3]);
    let report = game.play_round().expect("round");
    assert_eq!(report.picks[0].chooser, 0);
}

#[test]
fn classic_first_chooser_uses_visible_cards() {
    let mut game = staged_game(GameMode::Classic, vec![FIRST; 3]);
    assert_eq!(game.first_chooser(), None);
    game.offers = vec![
        Offer::new(c(2, Suit::Spade), c(4, Suit::Heart), 0),
        Offer::new(c(3, Suit::Club), c(1, Suit::Heart), 1),
        Offer::new(c(3, Suit::Diamond), c(1, Suit::Club), 2),
    ];
    assert_eq!(game.first_chooser(), Some(1));
}

#[test]
fn every_choice_phase_adds_one_card_per_jest() {
    for players in 2..=4 {
        let mut game = first_choice_game(seats(players).with_seed(3), EventBus::default());
        let total = game.card_count();
        loop {
            let before: Vec<usize> = game.players.iter().map(|p| p.jest.len()).collect();
            let report = game.play_round().expect("round");
            assert_eq!(report.picks.len(), players);
            assert_eq!(game.card_count(), total);
            for (seat, player) in game.players.iter().enumerate() {
                let extra = if report.final_round { 2 } else { 1 };
                assert_eq!(player.jest.len(), before[seat] + extra);
                assert!(player.hand.is_empty());
            }
            if report.final_round {
                break;
            }
        }
        assert!(!game.has_next_round());
    }
}

macro_rules! length_case {
    ($name:ident, $players:expr, $extension:expr, $rounds:expr) => {
        #[test]
        fn $name() {
            let config = seats($players).with_extension($extension).with_seed(42);
            let mut game = first_choice_game(config, EventBus::default());
            let total = if $extension { 20 } else { 17 };
            assert_eq!(game.card_count(), total);
            let summary = game.run();
            assert_eq!(summary.rounds, $rounds);
            assert_eq!(game.card_count(), total);
            assert!(game.is_over());
        }
    };
}

length_case!(two_players_play_six_rounds, 2, false, 6);
length_case!(three_players_play_four_rounds, 3, false, 4);
length_case!(four_players_play_three_rounds, 4, false, 3);
length_case!(two_players_extension_eight_rounds, 2, true, 8);
length_case!(three_players_extension_five_rounds, 3, true, 5);
length_case!(four_players_extension_three_rounds, 4, true, 3);

#[test]
fn winner_holds_the_best_score() {
    for seed in 0..20 {
        let mut game = first_choice_game(seats(3).with_seed(seed), EventBus::default());
        let summary = game.run();
        let scores = game.scores();
        assert_eq!(summary.scores, scores);
        let best = scores.iter().copied().max().expect("scores");
        let winner = summary.winner.expect("winner");
        assert_eq!(scores[winner], best);
        assert!(scores[..winner].iter().all(|score| *score < best));
    }
}

#[test]
fn trophy_cards_land_in_winner_jests() {
    let (bus, log) = recorder();
    let mut game = first_choice_game(seats(2).with_seed(9), bus);
    assert_eq!(game.trophy_cards.len(), 2);
    let summary = game.run();
    for trophy in &summary.trophies {
        if let Some(owner) = trophy.owner {
            assert!(game.players[owner].jest.contains(&trophy.source));
        }
    }
    let awarded = log
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::TrophyAwarded { .. }))
        .count();
    assert_eq!(
        awarded,
        summary.trophies.iter().filter(|t| t.owner.is_some()).count()
    );
}

#[test]
fn finish_is_idempotent_and_rounds_stop() {
    let mut game = first_choice_game(seats(4).with_seed(5), EventBus::default());
    let first = game.run();
    let jests: Vec<usize> = game.players.iter().map(|p| p.jest.len()).collect();
    let second = game.finish();
    assert_eq!(first, second);
    assert_eq!(jests, game.players.iter().map(|p| p.jest.len()).collect::<Vec<_>>());
    assert!(matches!(game.play_round(), Err(GameError::GameOver)));
}

#[test]
fn round_events_arrive_in_order() {
    let (bus, log) = recorder();
    let mut game = first_choice_game(seats(2), bus);
    game.play_round().expect("round");
    let kinds: Vec<&'static str> = log
        .borrow()
        .iter()
        .map(|event| match event {
            Event::GameStarted { .. } => "started",
            Event::RoundStarted { .. } => "round",
            Event::CardsDistributed { .. } => "dealt",
            Event::TrophyCardsDisplayed { .. } => "trophies",
            Event::TurnToOffer { .. } => "offer?",
            Event::OfferMade { .. } => "offer",
            Event::TurnToChoose { .. } => "choose?",
            Event::CardChosen { .. } => "chosen",
            Event::RoundEnded { .. } => "ended",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "started", "round", "dealt", "trophies", "offer?", "offer", "offer?", "offer",
            "choose?", "chosen", "choose?", "chosen", "ended",
        ]
    );
    assert_eq!(game.events().pending().len(), kinds.len());
}

#[test]
fn clear_mode_shows_stack_before_the_deal() {
    let (bus, log) = recorder();
    let config = seats(2).with_mode(GameMode::Clear).with_seed(8);
    let mut game = first_choice_game(config, bus);
    game.play_round().expect("first round");
    assert!(!log
        .borrow()
        .iter()
        .any(|event| matches!(event, Event::StackDisplayed { .. })));
    let carried = game.stack.clone();
    log.borrow_mut().clear();
    game.play_round().expect("second round");
    let events = log.borrow();
    assert!(matches!(&events[1], Event::StackDisplayed { stack } if *stack == carried));
    assert!(matches!(events[2], Event::CardsDistributed { .. }));
}

#[test]
fn rejects_bad_player_counts() {
    let config = GameConfig::new(vec![SeatConfig::new("Solo", StrategyKind::Human)]);
    let mut factory = scripted(Vec::new());
    assert!(matches!(
        Game::new(config, &mut factory, EventBus::default()),
        Err(GameError::InvalidPlayerCount(1))
    ));
    let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(FirstChoice)];
    assert!(matches!(
        Game::with_strategies(seats(3), strategies, EventBus::default()),
        Err(GameError::StrategyMismatch { seats: 3, strategies: 1 })
    ));
}

#[test]
fn snapshot_resumes_identically() {
    let config = seats(3).with_mode(GameMode::Jester).with_seed(77);
    let mut original = first_choice_game(config, EventBus::default());
    original.play_round().expect("round one");
    original.play_round().expect("round two");

    let body = serde_json::to_string(&original.snapshot()).expect("serialize");
    let snapshot: GameSnapshot = serde_json::from_str(&body).expect("deserialize");
    assert_eq!(snapshot.card_count(), original.card_count());
    let mut factory = scripted(Vec::new());
    let mut restored =
        Game::from_snapshot(snapshot, &mut factory, EventBus::default()).expect("restore");
    assert_eq!(restored.round, 2);
    assert_eq!(restored.players, original.players);

    let left = original.run();
    let right = restored.run();
    assert_eq!(left, right);
    assert_eq!(original.players, restored.players);
}

#[test]
fn restored_mid_round_game_resumes_choice_phase() {
    let mut snapshot = staged(vec![c(2, Suit::Heart), c(3, Suit::Diamond)], 2, GameMode::Classic);
    snapshot.round = 4;
    snapshot.offers = vec![
        OfferState {
            owner: 0,
            visible: Some(c(4, Suit::Spade)),
            hidden: Some(c(1, Suit::Club)),
        },
        OfferState {
            owner: 1,
            visible: Some(c(2, Suit::Club)),
            hidden: Some(Card::joker()),
        },
    ];
    let mut factory = scripted(Vec::new());
    let mut game = Game::from_snapshot(snapshot, &mut factory, EventBus::default()).expect("restore");
    assert_eq!(game.phase, Phase::ChoicePhase);
    let report = game.play_round().expect("resumed round");
    assert_eq!(report.round, 4);
    assert_eq!(report.picks[0].chooser, 0);
    assert_eq!(report.picks[0].card, c(2, Suit::Club));
    assert_eq!(report.picks[1].card, c(4, Suit::Spade));
    assert!(!report.final_round);
    assert_eq!(game.deck.len(), 2);
    assert_eq!(game.stack.len(), 2);
    assert!(game.has_next_round());
}

#[derive(Default)]
struct MemoryStore {
    saves: RefCell<HashMap<String, String>>,
}

impl SaveStore for MemoryStore {
    fn save(&self, name: &str, snapshot: &GameSnapshot) -> Result<(), String> {
        let body = serde_json::to_string(snapshot).map_err(|err| err.to_string())?;
        self.saves.borrow_mut().insert(name.to_string(), body);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<GameSnapshot, String> {
        let saves = self.saves.borrow();
        let body = saves.get(name).ok_or_else(|| format!("no save named {name}"))?;
        serde_json::from_str(body).map_err(|err| err.to_string())
    }

    fn list(&self) -> Result<Vec<String>, String> {
        let mut names: Vec<String> = self.saves.borrow().keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[test]
fn save_and_load_through_store() {
    let store = MemoryStore::default();
    let (bus, log) = recorder();
    let mut game = first_choice_game(seats(2).with_seed(21), bus);
    game.play_round().expect("round");
    assert!(game.save(&store, "slot"));
    assert!(matches!(log.borrow().last(), Some(Event::GameSaved { name }) if name == "slot"));
    assert_eq!(store.list().expect("list"), vec!["slot".to_string()]);

    let (bus, log) = recorder();
    let mut factory = scripted(Vec::new());
    let loaded = Game::load(&store, "slot", &mut factory, bus).expect("load");
    assert_eq!(loaded.round, game.round);
    assert_eq!(loaded.deck.to_vec(), game.deck.to_vec());
    assert!(matches!(log.borrow().last(), Some(Event::GameLoaded { name }) if name == "slot"));
}

#[test]
fn loading_missing_save_reports_error() {
    let store = MemoryStore::default();
    let (bus, log) = recorder();
    let mut factory = scripted(Vec::new());
    assert!(Game::load(&store, "nope", &mut factory, bus).is_none());
    assert!(matches!(log.borrow().last(), Some(Event::Error { .. })));
}
