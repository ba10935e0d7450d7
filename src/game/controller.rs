//! Match controller: setup, the turn loop, and the final outcome.
//!
//! ```text
//! Setup ──► ActivePlayerTurn ──► Cleanup ──┐
//!               ▲                          │
//!               └──────── next seat ◄──────┤
//!                                          ▼
//!                                      MatchOver
//! ```
//!
//! A round is one turn for each seat, first player first. The match ends as
//! soon as a hero is dead, or after `max_turns` rounds.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::state::MatchState;
use crate::cards::{render_cards, Card, CardCatalog, DeckBuilder, ManaToken};
use crate::core::{
    ConfigError, EntityAllocator, GameRng, MatchConfig, MatchError, PlayerId, PlayerMap,
};
use crate::events::{EventBus, GameEvent};
use crate::moves::MoveValidator;
use crate::player::{DrawReason, Player};
use crate::stats::{MatchSummary, StatsAggregator};
use crate::strategy::{Strategy, StrategyKind};

/// Where the controller is in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    Setup,
    ActivePlayerTurn,
    Cleanup,
    MatchOver,
}

/// What a seat brings to a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    /// Card names, resolved against the catalog.
    pub deck: Vec<String>,
    pub strategy: StrategyKind,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, deck: Vec<String>, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            deck,
            strategy,
        }
    }
}

/// Builder for a [`Match`].
///
/// ## Example
///
/// ```
/// use ccg_duel::core::MatchConfig;
/// use ccg_duel::game::{MatchBuilder, PlayerSetup};
/// use ccg_duel::strategy::StrategyKind;
///
/// let deck: Vec<String> = ["Fen Raptor", "Frost Yeti", "Marsh Raider", "Stone Ogre"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let summary = MatchBuilder::new(MatchConfig::default().with_seed(42))
///     .player(PlayerSetup::new("Alice", deck.clone(), StrategyKind::Greedy))
///     .player(PlayerSetup::new("Bob", deck, StrategyKind::Random))
///     .build()
///     .unwrap()
///     .run()
///     .unwrap();
///
/// assert!(summary.turns_played <= 300);
/// ```
pub struct MatchBuilder {
    config: MatchConfig,
    catalog: Option<Arc<CardCatalog>>,
    players: Vec<PlayerSetup>,
    strategies: PlayerMap<Option<Box<dyn Strategy>>>,
    first_player: Option<PlayerId>,
    shuffle: bool,
}

impl MatchBuilder {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            catalog: None,
            players: Vec::new(),
            strategies: PlayerMap::new(|_| None),
            first_player: None,
            shuffle: true,
        }
    }

    /// Card catalog to resolve decks against. Defaults to the built-in one.
    #[must_use]
    pub fn catalog(mut self, catalog: Arc<CardCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Add the next seat. Call exactly twice.
    #[must_use]
    pub fn player(mut self, setup: PlayerSetup) -> Self {
        self.players.push(setup);
        self
    }

    /// Use a specific strategy instance for a seat instead of its configured kind.
    #[must_use]
    pub fn strategy(mut self, seat: PlayerId, strategy: Box<dyn Strategy>) -> Self {
        self.strategies[seat] = Some(strategy);
        self
    }

    /// Fix who acts first instead of flipping a coin.
    #[must_use]
    pub fn first_player(mut self, seat: PlayerId) -> Self {
        self.first_player = Some(seat);
        self
    }

    /// Keep decks in listed order.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Validate everything and create the match.
    ///
    /// Every configuration problem surfaces here, before a turn is played.
    pub fn build(self) -> Result<Match, MatchError> {
        self.config.validate()?;
        let [first, second]: [PlayerSetup; 2] = self.players.try_into().map_err(|p: Vec<_>| {
            ConfigError::Invalid(format!("a match needs exactly 2 players, got {}", p.len()))
        })?;

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(CardCatalog::builtin()?),
        };
        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut ids = EntityAllocator::new();

        let mut deck_builder = DeckBuilder::new(&catalog);
        if !self.shuffle {
            deck_builder = deck_builder.in_order();
        }
        let setups = PlayerMap::from_array([first, second]);
        let (seat0, seat1) = (PlayerId::new(0), PlayerId::new(1));
        let deck0 = deck_builder.build(&setups[seat0].deck, seat0, &mut ids, &mut rng)?;
        let deck1 = deck_builder.build(&setups[seat1].deck, seat1, &mut ids, &mut rng)?;
        let players = PlayerMap::from_array([
            Player::new(seat0, &setups[seat0].name, deck0, &self.config),
            Player::new(seat1, &setups[seat1].name, deck1, &self.config),
        ]);

        let mut overrides = self.strategies;
        let strategies = PlayerMap::new(|seat| {
            overrides[seat]
                .take()
                .unwrap_or_else(|| setups[seat].strategy.build())
        });

        let mut bus = EventBus::new();
        let stats = StatsAggregator::new(players.iter().map(|(seat, p)| (seat, p.name.clone())))
            .attach(&mut bus);

        tracing::info!(
            seed = rng.seed(),
            player1 = %setups[PlayerId::new(0)].name,
            player2 = %setups[PlayerId::new(1)].name,
            "match created"
        );

        Ok(Match {
            state: MatchState::new(players, self.config, rng, ids, catalog),
            strategies,
            bus,
            stats,
            validator: MoveValidator::new(),
            first: self.first_player,
            phase: MatchPhase::Setup,
        })
    }
}

/// A single match between two seats.
pub struct Match {
    state: MatchState,
    strategies: PlayerMap<Box<dyn Strategy>>,
    bus: EventBus,
    stats: Rc<RefCell<StatsAggregator>>,
    validator: MoveValidator,
    /// Chosen during setup unless fixed by the builder.
    first: Option<PlayerId>,
    phase: MatchPhase,
}

impl Match {
    /// Play to completion and return the summary.
    pub fn run(mut self) -> Result<MatchSummary, MatchError> {
        if self.phase == MatchPhase::Setup {
            self.setup()?;
        }
        while self.phase != MatchPhase::MatchOver {
            self.play_round()?;
        }
        Ok(self.summary())
    }

    /// Pick the first player and deal opening hands.
    ///
    /// The first player draws `first_player_hand`; the other draws
    /// `second_player_hand` and receives a mana token.
    pub fn setup(&mut self) -> Result<(), MatchError> {
        if self.phase != MatchPhase::Setup {
            return Err(MatchError::invariant("setup ran twice"));
        }

        let first = match self.first {
            Some(seat) => seat,
            None if self.state.rng.gen_bool(0.5) => PlayerId::new(0),
            None => PlayerId::new(1),
        };
        let second = first.opponent();
        self.first = Some(first);
        tracing::info!(first = %self.state.player(first).name, "first player chosen");

        let (first_hand, second_hand) = (
            self.state.config.first_player_hand,
            self.state.config.second_player_hand,
        );
        self.state
            .player_mut(first)
            .draw_cards(first_hand, DrawReason::Natural, &mut self.bus);
        self.state
            .player_mut(second)
            .draw_cards(second_hand, DrawReason::Natural, &mut self.bus);

        let token = ManaToken::new(self.state.ids.alloc(), second);
        self.state
            .player_mut(second)
            .give(Card::ManaToken(token))
            .map_err(|_| MatchError::invariant("no room for the mana token"))?;

        self.phase = MatchPhase::ActivePlayerTurn;
        Ok(())
    }

    /// One turn for each seat, stopping early if a hero dies.
    pub fn play_round(&mut self) -> Result<(), MatchError> {
        let first = match (self.phase, self.first) {
            (MatchPhase::Setup, _) | (_, None) => {
                return Err(MatchError::invariant("round started before setup"))
            }
            (MatchPhase::MatchOver, _) => {
                return Err(MatchError::invariant("round started after match over"))
            }
            (_, Some(first)) => first,
        };

        self.state.turn += 1;
        for active in [first, first.opponent()] {
            self.play_turn(active)?;
            if self.state.any_hero_dead() {
                self.finish();
                return Ok(());
            }
        }
        if self.state.turn >= self.state.config.max_turns {
            tracing::info!(turns = self.state.turn, "turn cap reached");
            self.finish();
        }
        Ok(())
    }

    /// One player's turn: mana, draw, moves until none are left, cleanup.
    pub fn play_turn(&mut self, active: PlayerId) -> Result<(), MatchError> {
        self.phase = MatchPhase::ActivePlayerTurn;
        let opponent = active.opponent();
        let turn = self.state.turn;

        tracing::info!(turn, player = %self.state.player(active).name, "turn start");
        self.bus.publish(GameEvent::BeginTurn {
            player: active,
            opponent,
            turn,
        });

        let max_mana = self.state.config.max_mana;
        let total = self.state.player_mut(active).refresh_mana(max_mana);
        self.bus.publish(GameEvent::RecordManaAvailable {
            player: active,
            amount: total,
        });

        self.state
            .player_mut(active)
            .draw_cards(1, DrawReason::Natural, &mut self.bus);

        if !self.state.any_hero_dead() {
            self.move_loop(active, opponent)?;
        }

        self.phase = MatchPhase::Cleanup;
        self.cleanup(active);
        Ok(())
    }

    fn move_loop(&mut self, active: PlayerId, opponent: PlayerId) -> Result<(), MatchError> {
        loop {
            let moves = self.validator.valid_moves(&self.state, active);
            if moves.is_empty() {
                return Ok(());
            }

            let strategy = &mut self.strategies[active];
            strategy.set_possible_moves(&self.state, active, opponent, &moves);
            let chosen = strategy.next_move(&mut self.state.rng).ok_or_else(|| {
                MatchError::invariant(format!(
                    "strategy '{}' chose nothing from {} moves",
                    strategy.name(),
                    moves.len()
                ))
            })?;
            if !moves.contains(&chosen) {
                return Err(MatchError::invariant(format!(
                    "strategy '{}' chose {chosen}, which is not legal",
                    strategy.name()
                )));
            }

            tracing::debug!(player = %active, mv = %chosen, "move");
            chosen.make(&mut self.state, active, &mut self.bus)?;
            self.state.sweep_dead(&mut self.bus);

            if self.state.any_hero_dead() {
                return Ok(());
            }
        }
    }

    /// Ready the active player's monsters and close the mana books.
    fn cleanup(&mut self, active: PlayerId) {
        let player = self.state.player_mut(active);
        player.board.ready_all();
        let spent = player.spent_this_turn;

        tracing::debug!(
            player = %player.name,
            hitpoints = player.hero.hitpoints,
            hand = %render_cards(player.hand.iter()),
            board = %render_cards(player.board.iter()),
            deck = player.deck.len(),
            "end of turn"
        );

        self.bus.publish(GameEvent::RecordManaUsed {
            player: active,
            amount: spent,
        });
    }

    fn finish(&mut self) {
        let outcome = self.state.outcome();
        self.bus.publish(GameEvent::FinalTurnCount {
            turns: self.state.turn,
        });
        self.bus.publish(GameEvent::WinnerDecided { outcome });
        self.phase = MatchPhase::MatchOver;

        match outcome.winner() {
            Some(seat) => tracing::info!(
                winner = %self.state.player(seat).name,
                turns = self.state.turn,
                "match over"
            ),
            None => tracing::info!(turns = self.state.turn, "match over, tie"),
        }
    }

    /// Statistics collected so far.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        self.stats.borrow().summary()
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Seat acting first; `None` until setup unless fixed by the builder.
    #[must_use]
    pub fn first_player(&self) -> Option<PlayerId> {
        self.first
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Direct access for arranging scenarios.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// The match's bus, for attaching extra observers.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("phase", &self.phase)
            .field("turn", &self.state.turn)
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}
