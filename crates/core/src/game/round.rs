use super::*;
use crate::*;

impl Game {
    /// Plays one full round: deal, offers, the choice chain, then cleanup.
    /// A game restored mid-round resumes where the save left off.
    pub fn play_round(&mut self) -> Result<RoundReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let resuming = self.round_in_progress();
        if !resuming && self.deck.len() + self.stack.len() < self.cards_per_round() {
            return Err(GameError::NoRoundAvailable);
        }
        if !resuming || self.round == 0 {
            self.round = self.round.saturating_add(1);
        }
        tracing::debug!(round = self.round, resuming, "round started");
        self.events.push(Event::RoundStarted { round: self.round });

        if !resuming {
            if self.config.mode == GameMode::Clear && !self.stack.is_empty() {
                self.events.push(Event::StackDisplayed {
                    stack: self.stack.clone(),
                });
            }
            self.distribute();
        }

        self.phase = Phase::AwaitingDistribution.next(false);
        self.show_trophy_cards();
        self.collect_offers();

        self.phase = self.phase.next(false);
        let picks = self.resolve_choices();

        self.phase = self.phase.next(false);
        Ok(self.cleanup(picks))
    }

    /// Deals two cards per player. The carry-over stack is topped up from
    /// the deck and shuffled; on the first round it is empty and the deal
    /// comes straight off the deck.
    fn distribute(&mut self) {
        let needed = self.cards_per_round();
        let mut pool = std::mem::take(&mut self.stack);
        let carried = !pool.is_empty();
        while pool.len() < needed {
            match self.deck.draw() {
                Some(card) => pool.push(card),
                None => break,
            }
        }
        if carried {
            let mut rng = RngState::for_round(self.config.seed, self.round);
            rng.shuffle(&mut pool);
        }

        let mut cards = pool.into_iter();
        for player in &mut self.players {
            player.has_played = false;
            for card in cards.by_ref().take(2) {
                player.to_hand(card);
            }
        }
        self.stack.extend(cards);
        self.events.push(Event::CardsDistributed {
            players: self.players.clone(),
        });
    }

    fn show_trophy_cards(&mut self) {
        if let Some(&first) = self.trophy_cards.first() {
            self.events.push(Event::TrophyCardsDisplayed {
                first,
                second: self.trophy_cards.get(1).copied(),
            });
        }
    }

    /// Every seat without an offer yet hides one of its two cards.
    fn collect_offers(&mut self) {
        for seat in 0..self.players.len() {
            if self.offer_of(seat).is_some() {
                continue;
            }
            let hand = match <[Card; 2]>::try_from(self.players[seat].hand.as_slice()) {
                Ok(hand) => hand,
                Err(_) => {
                    tracing::warn!(
                        seat,
                        held = self.players[seat].hand.len(),
                        "cannot offer without exactly two cards"
                    );
                    continue;
                }
            };
            self.players[seat].has_played = false;
            self.events.push(Event::TurnToOffer { player: seat });
            let hide = self.strategies[seat].choose_hidden(&self.players[seat], &hand);
            self.players[seat].hand.clear();
            let offer = Offer::from_hand(hand, hide, seat);
            tracing::debug!(seat, visible = ?offer.visible, "offer made");
            self.events.push(Event::OfferMade {
                player: seat,
                offer: offer.clone(),
            });
            self.offers.push(offer);
        }
    }

    /// Moves what is left of the offers either into the carry-over stack or,
    /// when no further deal is possible, into the owners' jests.
    fn cleanup(&mut self, picks: Vec<Pick>) -> RoundReport {
        let mut leftovers: Vec<(usize, Card)> = Vec::with_capacity(self.players.len());
        for offer in std::mem::take(&mut self.offers) {
            for card in [offer.visible, offer.hidden].into_iter().flatten() {
                leftovers.push((offer.owner, card));
            }
        }
        for (seat, player) in self.players.iter_mut().enumerate() {
            for card in std::mem::take(&mut player.hand) {
                leftovers.push((seat, card));
            }
        }

        let final_round =
            self.deck.len() + self.stack.len() + leftovers.len() < self.cards_per_round();
        for &(owner, card) in &leftovers {
            match self.players.get_mut(owner) {
                Some(player) if final_round => player.to_jest(card),
                _ => self.stack.push(card),
            }
        }

        self.phase = Phase::RoundCleanup.next(final_round);
        tracing::info!(
            round = self.round,
            final_round,
            deck = self.deck.len(),
            stack = self.stack.len(),
            "round finished"
        );
        self.events.push(Event::RoundEnded {
            round: self.round,
            players: self.players.clone(),
        });
        RoundReport {
            round: self.round,
            picks,
            leftovers: leftovers.into_iter().map(|(_, card)| card).collect(),
            final_round,
        }
    }
}
