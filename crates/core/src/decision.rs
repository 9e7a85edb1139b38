//! Human decisions. Every attached presenter sees the same prompt; the first
//! reply carrying the prompt's ticket wins and anything later is dropped.

use crate::{Card, CardSlot, HandSlot, Offer, Player, Strategy, StrategyKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const DEFAULT_CHOICE: u8 = 1;
pub const DEFAULT_DECISION_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub enum DecisionRequest {
    /// Answer 1 or 2: which hand card to hide.
    Offer { player: String, hand: [Card; 2] },
    /// Answer a 1-based index into `available`.
    Target {
        player: String,
        available: Vec<Offer>,
    },
    /// Answer 1 for the visible card, 2 for the hidden one.
    Card { player: String, offer: Offer },
}

#[derive(Debug, Clone)]
pub struct DecisionPrompt {
    pub ticket: u64,
    pub request: DecisionRequest,
    reply: Sender<(u64, u8)>,
}

impl DecisionPrompt {
    /// Returns false once the engine has stopped listening.
    pub fn respond(&self, choice: u8) -> bool {
        self.reply.send((self.ticket, choice)).is_ok()
    }
}

#[derive(Debug)]
struct HubInner {
    presenters: Mutex<Vec<Sender<DecisionPrompt>>>,
    reply_tx: Sender<(u64, u8)>,
    reply_rx: Mutex<Receiver<(u64, u8)>>,
    next_ticket: AtomicU64,
    timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct DecisionHub {
    inner: Arc<HubInner>,
}

impl Default for DecisionHub {
    fn default() -> Self {
        Self::new(DEFAULT_DECISION_TIMEOUT)
    }
}

impl DecisionHub {
    pub fn new(timeout: Duration) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        Self {
            inner: Arc::new(HubInner {
                presenters: Mutex::new(Vec::new()),
                reply_tx,
                reply_rx: Mutex::new(reply_rx),
                next_ticket: AtomicU64::new(1),
                timeout,
            }),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Registers a presenter; it receives every prompt from now on.
    pub fn attach(&self) -> Receiver<DecisionPrompt> {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut presenters) = self.inner.presenters.lock() {
            presenters.push(tx);
        }
        rx
    }

    pub fn presenter_count(&self) -> usize {
        self.inner
            .presenters
            .lock()
            .map(|presenters| presenters.len())
            .unwrap_or(0)
    }

    /// Broadcasts `request` and blocks for the first matching reply. Falls
    /// back to `DEFAULT_CHOICE` on timeout or when nobody is listening.
    pub fn ask(&self, request: DecisionRequest) -> u8 {
        let ticket = self.inner.next_ticket.fetch_add(1, Ordering::Relaxed);
        let Ok(replies) = self.inner.reply_rx.lock() else {
            return DEFAULT_CHOICE;
        };
        while replies.try_recv().is_ok() {}

        let prompt = DecisionPrompt {
            ticket,
            request,
            reply: self.inner.reply_tx.clone(),
        };
        let delivered = match self.inner.presenters.lock() {
            Ok(mut presenters) => {
                presenters.retain(|presenter| presenter.send(prompt.clone()).is_ok());
                presenters.len()
            }
            Err(_) => 0,
        };
        if delivered == 0 {
            tracing::warn!(ticket, "no presenter attached, using default decision");
            return DEFAULT_CHOICE;
        }

        let deadline = Instant::now() + self.inner.timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match replies.recv_timeout(remaining) {
                Ok((got, choice)) if got == ticket => return choice,
                Ok((stale, _)) => tracing::debug!(stale, ticket, "dropping stale decision"),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    tracing::warn!(ticket, "decision timed out, using default");
                    return DEFAULT_CHOICE;
                }
            }
        }
    }
}

/// Seat driven by whoever answers the hub first.
#[derive(Debug, Clone)]
pub struct InteractiveStrategy {
    hub: DecisionHub,
}

impl InteractiveStrategy {
    pub fn new(hub: DecisionHub) -> Self {
        Self { hub }
    }
}

impl Strategy for InteractiveStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Human
    }

    fn choose_hidden(&mut self, player: &Player, hand: &[Card; 2]) -> HandSlot {
        let choice = self.hub.ask(DecisionRequest::Offer {
            player: player.name.clone(),
            hand: *hand,
        });
        HandSlot::from_choice(choice)
    }

    fn choose_target(&mut self, player: &Player, available: &[&Offer]) -> Option<usize> {
        let choice = self.hub.ask(DecisionRequest::Target {
            player: player.name.clone(),
            available: available.iter().map(|offer| (*offer).clone()).collect(),
        });
        usize::from(choice)
            .checked_sub(1)
            .filter(|idx| *idx < available.len())
    }

    fn choose_card(&mut self, player: &Player, offer: &Offer) -> CardSlot {
        let choice = self.hub.ask(DecisionRequest::Card {
            player: player.name.clone(),
            offer: offer.clone(),
        });
        CardSlot::from_choice(choice)
    }
}
