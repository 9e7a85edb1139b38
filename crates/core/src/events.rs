use crate::{Card, GameMode, Offer, Player, Trophy};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    GameStarted {
        player_count: usize,
        mode: GameMode,
        extension: bool,
        players: Vec<Player>,
    },
    RoundStarted { round: u32 },
    CardsDistributed { players: Vec<Player> },
    TurnToOffer { player: usize },
    OfferMade { player: usize, offer: Offer },
    TurnToChoose { player: usize, available: Vec<Offer> },
    CardChosen {
        chooser: usize,
        target: usize,
        card: Card,
    },
    RoundEnded { round: u32, players: Vec<Player> },
    TrophyAwarded { trophy: Trophy },
    GameEnded {
        winner: Option<usize>,
        players: Vec<Player>,
        scores: Vec<i32>,
    },
    TrophyCardsDisplayed { first: Card, second: Option<Card> },
    StackDisplayed { stack: Vec<Card> },
    GameSaved { name: String },
    GameLoaded { name: String },
    Error { message: String },
}

pub trait EventSink {
    fn on_event(&mut self, event: &Event);
}

impl<F> EventSink for F
where
    F: FnMut(&Event),
{
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}

/// Fans events out to subscribed sinks as they happen and keeps a queue for
/// callers that prefer to drain after the fact.
#[derive(Default)]
pub struct EventBus {
    queue: Vec<Event>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn push(&mut self, event: Event) {
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn pending(&self) -> &[Event] {
        &self.queue
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("queue", &self.queue.len())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
