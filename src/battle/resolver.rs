//! Turn resolution.
//!
//! `BattleResolver` validates one action per turn, applies it to a copy of
//! the state and returns that copy with the events it produced. Input states
//! are never modified, so a rejected action leaves the caller exactly where
//! it was.
//!
//! ## Implementation Notes
//!
//! - Between calls the only non-terminal phase is `AwaitingPlayerAction`;
//!   `turn` tells whose move it is. `ResolvingAction` is set only while a
//!   call is running.
//! - All randomness comes from the `RollSource` the resolver owns.

use crate::content::{ContentRegistry, MonsterId};
use crate::core::{
    ActionKind, BattleAction, BattleConfig, BattleState, Combatant, GameRng, Outcome, Phase,
    Rewards, RollSource, Side, Turn,
};
use crate::error::{ActionRejection, BattleError};

use super::damage::strike_damage;
use super::event::{BattleEvent, EventList, TurnResult};

/// Resolves battles between the player and a single enemy.
///
/// ## Example
///
/// ```
/// use rpg_battle::battle::BattleResolver;
/// use rpg_battle::content::{default_player, ContentRegistry, MonsterId};
/// use rpg_battle::core::{BattleAction, Outcome};
///
/// let registry = ContentRegistry::builtin();
/// let mut resolver = BattleResolver::seeded(7);
/// let mut state = resolver
///     .start_encounter(&registry, default_player(), &MonsterId::new("slime"))
///     .unwrap();
///
/// while !state.is_ended() {
///     state = resolver.play_round(&state, &BattleAction::Attack).unwrap().state;
/// }
/// assert_eq!(state.outcome(), Some(Outcome::Victory));
/// ```
#[derive(Clone, Debug)]
pub struct BattleResolver<R = GameRng> {
    config: BattleConfig,
    rolls: R,
}

impl BattleResolver<GameRng> {
    /// Default config with a ChaCha8 stream seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: BattleConfig::default(),
            rolls: GameRng::new(seed),
        }
    }
}

impl<R: RollSource> BattleResolver<R> {
    /// Create a resolver, rejecting an invalid config.
    pub fn new(config: BattleConfig, rolls: R) -> Result<Self, BattleError> {
        config.validate()?;
        Ok(Self { config, rolls })
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The roll source, e.g. to capture a `GameRng` state.
    #[must_use]
    pub fn rolls(&self) -> &R {
        &self.rolls
    }

    /// Start a battle between two combatants. No rewards are attached.
    pub fn start_battle(
        &self,
        player: Combatant,
        enemy: Combatant,
    ) -> Result<BattleState, BattleError> {
        self.begin(player, enemy, Rewards::default())
    }

    /// Start a battle against the monster registered as `enemy_id`.
    pub fn start_encounter(
        &self,
        registry: &ContentRegistry,
        player: Combatant,
        enemy_id: &MonsterId,
    ) -> Result<BattleState, BattleError> {
        let monster = registry.monster(enemy_id)?;
        self.begin(player, monster.spawn(), monster.rewards())
    }

    fn begin(
        &self,
        player: Combatant,
        enemy: Combatant,
        bounty: Rewards,
    ) -> Result<BattleState, BattleError> {
        check_combatant(&enemy)?;
        check_combatant(&player)?;

        tracing::info!(
            player = %player.name,
            enemy = %enemy.name,
            enemy_hp = enemy.hp(),
            "battle started"
        );
        Ok(BattleState::new(player, enemy, bounty))
    }

    /// Menu entries the player may choose right now.
    #[must_use]
    pub fn legal_actions(&self, state: &BattleState) -> Vec<ActionKind> {
        if player_may_act(state).is_ok() {
            ActionKind::ALL.to_vec()
        } else {
            Vec::new()
        }
    }

    /// Resolve the player's action.
    ///
    /// Fails with `InvalidActionKind` when it isn't the player's turn or the
    /// battle is over.
    pub fn submit_player_action(
        &mut self,
        state: &BattleState,
        action: &BattleAction,
    ) -> Result<TurnResult, BattleError> {
        if let Err(reason) = player_may_act(state) {
            tracing::warn!(action = %action.kind(), %reason, "rejected player action");
            return Err(BattleError::InvalidActionKind(reason));
        }

        let mut next = state.clone();
        let mut events = EventList::new();

        match action {
            BattleAction::Attack => {
                next.set_phase(Phase::ResolvingAction);
                next.record(Side::Player, action.clone());
                if !self.strike(&mut next, Side::Player, &mut events) {
                    next.set_phase(Phase::AwaitingPlayerAction);
                    next.pass_turn_to(Turn::EnemyTurn);
                }
            }
            BattleAction::Flee => {
                next.set_phase(Phase::ResolvingAction);
                next.record(Side::Player, action.clone());
                let roll = self.rolls.roll();
                let escaped = roll < self.config.escape_chance;
                tracing::debug!(roll, chance = self.config.escape_chance, escaped, "flee roll");

                if escaped {
                    finish(&mut next, Outcome::Escaped, &mut events);
                } else {
                    events.push(BattleEvent::EscapeFailed);
                    next.set_phase(Phase::AwaitingPlayerAction);
                    next.pass_turn_to(Turn::EnemyTurn);
                }
            }
            BattleAction::UseMagic(_) | BattleAction::UseItem(_) => {
                tracing::debug!(action = %action.kind(), "action not implemented, turn kept");
                events.push(BattleEvent::ActionUnavailable { action: action.kind() });
            }
        }

        Ok(TurnResult { state: next, events })
    }

    /// Resolve the enemy's turn. The enemy always attacks.
    pub fn resolve_enemy_turn(&mut self, state: &BattleState) -> Result<TurnResult, BattleError> {
        if state.is_ended() {
            return Err(BattleError::InvalidActionKind(ActionRejection::BattleEnded));
        }
        if state.turn().side() != Side::Enemy {
            return Err(BattleError::InvalidActionKind(ActionRejection::OutOfTurn));
        }

        let mut next = state.clone();
        let mut events = EventList::new();

        next.set_phase(Phase::ResolvingAction);
        next.record(Side::Enemy, BattleAction::Attack);
        if !self.strike(&mut next, Side::Enemy, &mut events) {
            next.set_phase(Phase::AwaitingPlayerAction);
            next.pass_turn_to(Turn::PlayerTurn);
        }

        Ok(TurnResult { state: next, events })
    }

    /// Resolve the player's action and, if it handed over the turn, the
    /// enemy's reply. Events of both halves are returned in order.
    pub fn play_round(
        &mut self,
        state: &BattleState,
        action: &BattleAction,
    ) -> Result<TurnResult, BattleError> {
        let mut result = self.submit_player_action(state, action)?;
        if !result.state.is_ended() && result.state.turn() == Turn::EnemyTurn {
            let reply = self.resolve_enemy_turn(&result.state)?;
            result.state = reply.state;
            result.events.extend(reply.events);
        }
        Ok(result)
    }

    /// `attacker` hits the other side. Returns true if that ended the battle.
    fn strike(&self, state: &mut BattleState, attacker: Side, events: &mut EventList) -> bool {
        let target = attacker.opponent();
        let amount = strike_damage(
            state.combatant(attacker),
            state.combatant(target),
            self.config.min_damage,
        );
        let remaining_hp = state.combatant_mut(target).take_damage(amount);

        tracing::debug!(%attacker, %target, amount, remaining_hp, round = state.round(), "attack");
        events.push(BattleEvent::Damage {
            attacker,
            target,
            amount,
            remaining_hp,
        });

        if remaining_hp == 0 {
            finish(state, Outcome::from_defeated(target), events);
            true
        } else {
            false
        }
    }
}

fn finish(state: &mut BattleState, outcome: Outcome, events: &mut EventList) {
    state.end(outcome);
    let rewards = (outcome == Outcome::Victory).then(|| state.bounty());

    tracing::info!(%outcome, rounds = state.round(), ?rewards, "battle ended");
    events.push(BattleEvent::BattleEnded { outcome, rewards });
}

fn player_may_act(state: &BattleState) -> Result<(), ActionRejection> {
    if state.is_ended() {
        Err(ActionRejection::BattleEnded)
    } else if state.turn().side() != Side::Player || state.phase() != Phase::AwaitingPlayerAction {
        Err(ActionRejection::OutOfTurn)
    } else {
        Ok(())
    }
}

fn check_combatant(combatant: &Combatant) -> Result<(), BattleError> {
    if combatant.max_hp() == 0 {
        return Err(BattleError::InvalidCombatant {
            name: combatant.name.clone(),
            reason: "maximum hit points must be positive",
        });
    }
    if combatant.is_defeated() {
        return Err(BattleError::InvalidCombatant {
            name: combatant.name.clone(),
            reason: "already defeated",
        });
    }
    Ok(())
}
