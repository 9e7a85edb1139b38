use crate::BotsError;
use jest_core::{Card, GameMode, Player, RoundReport, StrategyKind, Trophy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickRecord {
    pub chooser: String,
    pub target: String,
    pub card: Card,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub picks: Vec<PickRecord>,
    #[serde(default)]
    pub leftovers: Vec<Card>,
    pub final_round: bool,
}

impl RoundRecord {
    pub fn from_report(report: &RoundReport, players: &[Player]) -> Self {
        let name = |seat: usize| {
            players
                .get(seat)
                .map(|player| player.name.clone())
                .unwrap_or_else(|| format!("seat {seat}"))
        };
        Self {
            round: report.round,
            picks: report
                .picks
                .iter()
                .map(|pick| PickRecord {
                    chooser: name(pick.chooser),
                    target: name(pick.target),
                    card: pick.card,
                })
                .collect(),
            leftovers: report.leftovers.clone(),
            final_round: report.final_round,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatResult {
    pub name: String,
    pub kind: StrategyKind,
    pub score: i32,
    pub jest: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub mode: GameMode,
    pub extension: bool,
    pub trophy_cards: Vec<Card>,
    pub rounds: Vec<RoundRecord>,
    pub trophies: Vec<Trophy>,
    pub seats: Vec<SeatResult>,
    pub winner: Option<usize>,
    pub event_count: usize,
}

impl GameRecord {
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .and_then(|seat| self.seats.get(seat))
            .map(|seat| seat.name.as_str())
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "game: seed={} mode={} extension={}",
                self.seed,
                self.mode.label(),
                self.extension
            ),
            format!("trophy cards: {}", join_cards(&self.trophy_cards)),
            String::new(),
            "rounds:".to_string(),
        ];
        for round in &self.rounds {
            let tag = if round.final_round { " (final)" } else { "" };
            lines.push(format!("  round {:>2}{tag}", round.round));
            for pick in &round.picks {
                lines.push(format!(
                    "    {} takes {} from {}",
                    pick.chooser, pick.card, pick.target
                ));
            }
            if !round.leftovers.is_empty() {
                lines.push(format!("    leftovers: {}", join_cards(&round.leftovers)));
            }
        }
        lines.push(String::new());
        lines.push("trophies:".to_string());
        if self.trophies.is_empty() {
            lines.push("  (none)".to_string());
        }
        for trophy in &self.trophies {
            let owner = trophy
                .owner
                .and_then(|seat| self.seats.get(seat))
                .map_or("nobody", |seat| seat.name.as_str());
            lines.push(format!("  {trophy} -> {owner}"));
        }
        lines.push(String::new());
        lines.push("scores:".to_string());
        for (idx, seat) in self.seats.iter().enumerate() {
            let marker = if self.winner == Some(idx) { "*" } else { " " };
            lines.push(format!(
                " {marker}{:<14} {:<8} {:>4}  [{}]",
                seat.name,
                seat.kind.tag(),
                seat.score,
                join_cards(&seat.jest)
            ));
        }
        lines.push(format!("events: {}", self.event_count));
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatTally {
    pub name: String,
    pub kind: StrategyKind,
    pub wins: u32,
    pub total_score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchReport {
    pub games: u32,
    pub tallies: Vec<SeatTally>,
    pub records: Vec<GameRecord>,
}

impl BatchReport {
    pub fn to_text_report(&self) -> String {
        let mut lines = Vec::new();
        if self.records.len() == 1 {
            if let Some(record) = self.records.first() {
                lines.push(record.to_text_report());
                lines.push(String::new());
            }
        }
        lines.push(format!("games: {}", self.games));
        for tally in &self.tallies {
            let average = if self.games == 0 {
                0.0
            } else {
                tally.total_score as f64 / f64::from(self.games)
            };
            lines.push(format!(
                "  {:<14} {:<8} wins={:<4} avg_score={average:.2}",
                tally.name,
                tally.kind.tag(),
                tally.wins
            ));
        }
        lines.join("\n")
    }
}

fn join_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BotsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &BatchReport) -> Result<(), BotsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report.to_text_report())?;
    Ok(())
}
