use super::*;
use crate::*;

impl Game {
    /// Seat that opens the choice phase. Classic and clear games start with
    /// the highest visible card; jester games with the weakest two-card offer.
    /// Ties go to the earlier seat.
    pub fn first_chooser(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        match self.config.mode {
            GameMode::Jester => {
                for offer in self.offers.iter().filter(|offer| !offer.is_empty()) {
                    let sum = offer.face_value_sum();
                    match best {
                        Some((_, low)) if sum >= low => {}
                        _ => best = Some((offer.owner, sum)),
                    }
                }
            }
            GameMode::Classic | GameMode::Clear => {
                for offer in &self.offers {
                    let Some(card) = offer.visible else { continue };
                    let value = u32::from(card.value);
                    match best {
                        Some((_, top)) if value <= top => {}
                        _ => best = Some((offer.owner, value)),
                    }
                }
            }
        }
        best.map(|(seat, _)| seat)
    }

    /// Runs the chain of choices: whoever just lost a card picks next unless
    /// they already played, in which case the first unplayed seat takes over.
    pub(super) fn resolve_choices(&mut self) -> Vec<Pick> {
        let mut picks = Vec::with_capacity(self.players.len());
        let mut current = self.first_chooser().or_else(|| self.first_unplayed());

        for _ in 0..self.players.len() {
            let Some(mut seat) = current else { break };
            if self.players[seat].has_played {
                match self.first_unplayed() {
                    Some(next) => seat = next,
                    None => break,
                }
            }

            let available: Vec<usize> = self
                .offers
                .iter()
                .enumerate()
                .filter(|(_, offer)| offer.owner != seat && offer.is_complete())
                .map(|(idx, _)| idx)
                .collect();
            let pick = if available.is_empty() {
                self.take_from_own_offer(seat)
            } else {
                self.take_from_offers(seat, &available)
            };
            self.players[seat].has_played = true;

            let Some(pick) = pick else {
                tracing::warn!(seat, "nothing left to take");
                current = self.first_unplayed();
                continue;
            };
            self.players[seat].to_jest(pick.card);
            tracing::debug!(chooser = seat, target = pick.target, card = %pick.card, "card chosen");
            self.events.push(Event::CardChosen {
                chooser: pick.chooser,
                target: pick.target,
                card: pick.card,
            });

            let target_done = self
                .players
                .get(pick.target)
                .map_or(true, |player| player.has_played);
            current = if target_done {
                self.first_unplayed()
            } else {
                Some(pick.target)
            };
            picks.push(pick);
        }
        picks
    }

    fn take_from_offers(&mut self, seat: usize, available: &[usize]) -> Option<Pick> {
        let views: Vec<&Offer> = available.iter().map(|&idx| &self.offers[idx]).collect();
        self.events.push(Event::TurnToChoose {
            player: seat,
            available: views.iter().map(|offer| (*offer).clone()).collect(),
        });
        let choice = self.strategies[seat].choose_target(&self.players[seat], &views);
        let pos = match choice {
            Some(pos) if pos < available.len() => pos,
            other => {
                if other.is_some() {
                    tracing::debug!(seat, ?other, "target out of range, taking the first offer");
                }
                0
            }
        };
        let offer_idx = available[pos];
        let slot = self.strategies[seat].choose_card(&self.players[seat], &self.offers[offer_idx]);
        let offer = &mut self.offers[offer_idx];
        let card = offer.take_preferring(slot)?;
        Some(Pick {
            chooser: seat,
            target: offer.owner,
            card,
        })
    }

    /// Nobody else has a full offer left, so the seat takes from its own.
    fn take_from_own_offer(&mut self, seat: usize) -> Option<Pick> {
        let offer_idx = self.offer_of(seat)?;
        if self.offers[offer_idx].is_empty() {
            return None;
        }
        self.events.push(Event::TurnToChoose {
            player: seat,
            available: vec![self.offers[offer_idx].clone()],
        });
        let slot = self.strategies[seat].choose_card(&self.players[seat], &self.offers[offer_idx]);
        let card = self.offers[offer_idx].take_preferring(slot)?;
        Some(Pick {
            chooser: seat,
            target: seat,
            card,
        })
    }
}
