use jest_core::{Card, Event, EventSink, Offer, Player};
use std::thread;
use std::time::Duration;

/// Prints the table as the engine reports it. Hidden cards stay `???`.
#[derive(Debug, Clone, Default)]
pub struct ConsoleObserver {
    names: Vec<String>,
    bots: Vec<bool>,
    bot_delay: Duration,
}

impl ConsoleObserver {
    pub fn new(bot_delay: Duration) -> Self {
        Self {
            bot_delay,
            ..Self::default()
        }
    }

    fn remember(&mut self, players: &[Player]) {
        self.names = players.iter().map(|player| player.name.clone()).collect();
        self.bots = players.iter().map(|player| player.kind.is_bot()).collect();
    }

    fn name(&self, seat: usize) -> String {
        self.names
            .get(seat)
            .cloned()
            .unwrap_or_else(|| format!("seat {}", seat + 1))
    }

    fn is_bot(&self, seat: usize) -> bool {
        self.bots.get(seat).copied().unwrap_or(false)
    }

    pub fn describe(&mut self, event: &Event) -> Vec<String> {
        match event {
            Event::GameStarted {
                player_count,
                mode,
                extension,
                players,
            } => {
                self.remember(players);
                let seats = players
                    .iter()
                    .map(|player| format!("{} ({})", player.name, player.kind.tag()))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![
                    format!(
                        "=== Jest: {player_count} players, {} mode{} ===",
                        mode.label(),
                        if *extension { ", extension" } else { "" }
                    ),
                    format!("Seats: {seats}"),
                ]
            }
            Event::RoundStarted { round } => vec![String::new(), format!("--- Round {round} ---")],
            Event::CardsDistributed { players } => {
                self.remember(players);
                vec!["Cards dealt.".to_string()]
            }
            Event::TrophyCardsDisplayed { first, second } => match second {
                Some(second) => vec![format!("Trophies: {first} and {second}")],
                None => vec![format!("Trophy: {first}")],
            },
            Event::StackDisplayed { stack } => vec![format!("Carried over: {}", cards(stack))],
            Event::TurnToOffer { player } => vec![format!("{} makes an offer.", self.name(*player))],
            Event::OfferMade { player, offer } => {
                vec![format!("{} offers {}", self.name(*player), masked(offer))]
            }
            Event::TurnToChoose { player, available } => {
                let listed = available
                    .iter()
                    .map(|offer| format!("{} {}", self.name(offer.owner), masked(offer)))
                    .collect::<Vec<_>>()
                    .join("; ");
                vec![format!("{} chooses among: {listed}", self.name(*player))]
            }
            Event::CardChosen {
                chooser,
                target,
                card,
            } => {
                let from = if chooser == target {
                    "their own offer".to_string()
                } else {
                    self.name(*target)
                };
                vec![format!("{} takes {card} from {from}", self.name(*chooser))]
            }
            Event::RoundEnded { round, players } => {
                let mut lines = vec![format!("Round {round} over.")];
                lines.extend(
                    players
                        .iter()
                        .map(|player| format!("  {:<14} jest: {}", player.name, cards(&player.jest))),
                );
                lines
            }
            Event::TrophyAwarded { trophy } => {
                let owner = trophy.owner.map_or_else(|| "nobody".to_string(), |seat| self.name(seat));
                vec![format!("Trophy {trophy} goes to {owner}")]
            }
            Event::GameEnded {
                winner,
                players,
                scores,
            } => {
                let mut lines = vec![String::new(), "=== Final scores ===".to_string()];
                for (seat, (player, score)) in players.iter().zip(scores).enumerate() {
                    let marker = if *winner == Some(seat) { "*" } else { " " };
                    lines.push(format!(
                        "{marker} {:<14} {:>4}  {}",
                        player.name,
                        score,
                        cards(&player.jest)
                    ));
                }
                if let Some(seat) = winner {
                    lines.push(format!("{} wins!", self.name(*seat)));
                }
                lines
            }
            Event::GameSaved { name } => vec![format!("Game saved as '{name}'.")],
            Event::GameLoaded { name } => vec![format!("Game '{name}' loaded.")],
            Event::Error { message } => vec![format!("Error: {message}")],
        }
    }

    /// Seat whose move should be paced, if `event` is a bot move.
    fn bot_move(&self, event: &Event) -> Option<usize> {
        let seat = match event {
            Event::OfferMade { player, .. } => *player,
            Event::CardChosen { chooser, .. } => *chooser,
            _ => return None,
        };
        self.is_bot(seat).then_some(seat)
    }
}

impl EventSink for ConsoleObserver {
    fn on_event(&mut self, event: &Event) {
        for line in self.describe(event) {
            println!("{line}");
        }
        if self.bot_move(event).is_some() && !self.bot_delay.is_zero() {
            thread::sleep(self.bot_delay);
        }
    }
}

pub fn masked(offer: &Offer) -> String {
    let visible = offer.visible.map_or_else(|| "-".to_string(), |card| card.to_string());
    let hidden = if offer.hidden.is_some() { "???" } else { "-" };
    format!("[{visible} | {hidden}]")
}

pub fn cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
