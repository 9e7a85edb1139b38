use super::*;
use crate::*;

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            player_count: self.players.len(),
            mode: self.config.mode,
            extension: self.config.extension,
            round: self.round,
            seed: self.config.seed,
            players: self.players.iter().map(PlayerState::capture).collect(),
            deck: self.deck.to_vec(),
            stack: self.stack.clone(),
            trophy_cards: self.trophy_cards.clone(),
            offers: self.offers.iter().map(OfferState::from).collect(),
            trophies: self.trophies.iter().map(TrophyState::from).collect(),
        }
    }

    /// Rebuilds a game from a snapshot. Seats get fresh strategies from
    /// `factory` according to their saved strategy tag.
    pub fn from_snapshot(
        snapshot: GameSnapshot,
        factory: &mut dyn StrategyFactory,
        events: EventBus,
    ) -> Result<Self, GameError> {
        validate_snapshot(&snapshot)?;
        let seats: Vec<SeatConfig> = snapshot
            .players
            .iter()
            .map(|player| SeatConfig::new(player.name.clone(), StrategyKind::from_tag(&player.strategy)))
            .collect();
        let config = GameConfig {
            seats,
            mode: snapshot.mode,
            extension: snapshot.extension,
            seed: snapshot.seed,
        };
        let players: Vec<Player> = snapshot.players.iter().map(PlayerState::restore).collect();
        let strategies = players
            .iter()
            .enumerate()
            .map(|(seat, player)| factory.build(seat, &player.name, player.kind))
            .collect();

        let mut game = Self::assemble(config, players, strategies, events)?;
        game.deck = Deck::from_cards(snapshot.deck);
        game.stack = snapshot.stack;
        game.offers = snapshot
            .offers
            .into_iter()
            .map(|offer| Offer {
                owner: offer.owner,
                visible: offer.visible,
                hidden: offer.hidden,
            })
            .collect();
        game.trophies = if snapshot.trophies.is_empty() {
            TrophyBoard::from_cards(&snapshot.trophy_cards)
        } else {
            TrophyBoard {
                trophies: snapshot
                    .trophies
                    .into_iter()
                    .map(|trophy| Trophy {
                        kind: trophy.kind,
                        source: trophy.source,
                        owner: trophy.owner,
                    })
                    .collect(),
            }
        };
        game.trophy_cards = snapshot.trophy_cards;
        game.round = snapshot.round;
        game.phase = if game.offers.iter().any(|offer| !offer.is_empty()) {
            Phase::ChoicePhase
        } else if game.round_in_progress() {
            Phase::OfferPhase
        } else {
            Phase::AwaitingDistribution
        };
        tracing::debug!(round = game.round, phase = ?game.phase, "game restored");
        Ok(game)
    }

    /// Writes a snapshot through `store`. Failures are reported as an
    /// `Error` event and leave the game untouched.
    pub fn save(&mut self, store: &dyn SaveStore, name: &str) -> bool {
        match store.save(name, &self.snapshot()) {
            Ok(()) => {
                tracing::info!(save = name, round = self.round, "game saved");
                self.events.push(Event::GameSaved {
                    name: name.to_string(),
                });
                true
            }
            Err(message) => {
                tracing::warn!(save = name, %message, "save failed");
                self.events.push(Event::Error {
                    message: format!("could not save '{name}': {message}"),
                });
                false
            }
        }
    }

    /// Reads a snapshot and rebuilds the game around it. On failure the
    /// `Error` event still reaches the sinks subscribed on `events`.
    pub fn load(
        store: &dyn SaveStore,
        name: &str,
        factory: &mut dyn StrategyFactory,
        mut events: EventBus,
    ) -> Option<Self> {
        let snapshot = match store.load(name) {
            Ok(snapshot) => snapshot,
            Err(message) => {
                tracing::warn!(save = name, %message, "load failed");
                events.push(Event::Error {
                    message: format!("could not load '{name}': {message}"),
                });
                return None;
            }
        };
        if let Err(err) = validate_snapshot(&snapshot) {
            tracing::warn!(save = name, %err, "rejecting save");
            events.push(Event::Error {
                message: format!("could not load '{name}': {err}"),
            });
            return None;
        }
        match Self::from_snapshot(snapshot, factory, events) {
            Ok(mut game) => {
                tracing::info!(save = name, round = game.round, "game loaded");
                game.events.push(Event::GameLoaded {
                    name: name.to_string(),
                });
                Some(game)
            }
            Err(err) => {
                tracing::warn!(save = name, %err, "rejecting save");
                None
            }
        }
    }
}

fn validate_snapshot(snapshot: &GameSnapshot) -> Result<(), GameError> {
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(GameError::SnapshotVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    let count = snapshot.players.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(GameError::InvalidPlayerCount(count));
    }
    if snapshot.player_count != count {
        return Err(GameError::MalformedSnapshot(format!(
            "header says {} players, found {count}",
            snapshot.player_count
        )));
    }
    let expected_trophies = if count == MAX_PLAYERS { 1 } else { 2 };
    if snapshot.trophy_cards.len() > expected_trophies {
        return Err(GameError::MalformedSnapshot(format!(
            "{} trophy cards for {count} players",
            snapshot.trophy_cards.len()
        )));
    }
    if let Some(offer) = snapshot.offers.iter().find(|offer| offer.owner >= count) {
        return Err(GameError::MalformedSnapshot(format!(
            "offer owned by unknown seat {}",
            offer.owner
        )));
    }
    let mut owners: Vec<usize> = snapshot.offers.iter().map(|offer| offer.owner).collect();
    owners.sort_unstable();
    owners.dedup();
    if owners.len() != snapshot.offers.len() {
        return Err(GameError::MalformedSnapshot(
            "a seat owns more than one offer".to_string(),
        ));
    }
    if let Some(seat) = snapshot
        .trophies
        .iter()
        .filter_map(|trophy| trophy.owner)
        .find(|seat| *seat >= count)
    {
        return Err(GameError::MalformedSnapshot(format!(
            "trophy owned by unknown seat {seat}"
        )));
    }
    Ok(())
}
