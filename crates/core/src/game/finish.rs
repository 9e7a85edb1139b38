use super::*;
use crate::*;

impl Game {
    /// Hands out trophies, scores every jest and names the winner. Calling it
    /// again returns the same summary without touching the jests.
    pub fn finish(&mut self) -> GameSummary {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }

        self.trophies.assign_all(&self.players, &self.scorer);
        for trophy in &self.trophies.trophies {
            let Some(player) = trophy.owner.and_then(|seat| self.players.get_mut(seat)) else {
                tracing::debug!(trophy = %trophy, "trophy not awarded");
                continue;
            };
            player.to_jest(trophy.source);
            tracing::info!(trophy = %trophy, winner = %player.name, "trophy awarded");
            self.events.push(Event::TrophyAwarded {
                trophy: trophy.clone(),
            });
        }

        let scores = self.scores();
        let winner = first_best(&scores);
        self.phase = Phase::GameEnd;
        tracing::info!(?winner, ?scores, rounds = self.round, "game over");
        self.events.push(Event::GameEnded {
            winner,
            players: self.players.clone(),
            scores: scores.clone(),
        });

        let summary = GameSummary {
            winner,
            scores,
            trophies: self.trophies.trophies.clone(),
            rounds: self.round,
        };
        self.summary = Some(summary.clone());
        summary
    }
}

/// Seat of the highest score; the earliest seat wins a tie.
fn first_best(scores: &[i32]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (seat, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((seat, score)),
        }
    }
    best.map(|(seat, _)| seat)
}
