//! LevelSession - owns one level run end to end.
//!
//! The session holds the stat tables of every live entity, feeds attacks
//! through the combat resolver, and serializes death events into the wave
//! director through a single-writer command queue. All processing is
//! synchronous on the caller's thread; external tick sources deliver
//! commands one at a time and the queue preserves their order even when
//! processing one command produces another.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use game_core::progression::{EventSink, GameEvent, Spawner};
use game_core::{
    Attribute, DirectorError, DirectorState, EntityId, GameEnv, GameError, LevelId, MonsterId,
    OracleError, Rewards, SaveData, SkillId, StatTable, StatsProvider, WaveDirector, compute_seed,
    resolve_attack,
};

use crate::events::EventBus;

/// Commands accepted by the session queue.
///
/// Attacks come from the combat tick; death reports exist for kills the
/// resolver never saw (environmental hazards, scripted deaths).
#[derive(Clone, Debug, PartialEq)]
pub enum SessionCommand {
    Attack {
        attacker: EntityId,
        defender: EntityId,
        power_multiplier: f32,
    },
    MonsterDied {
        entity: EntityId,
    },
    PlayerDied,
}

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Director(#[from] DirectorError),

    #[error("entity {0} is not part of this session")]
    UnknownEntity(EntityId),

    #[error("level {0} is not unlocked for this profile")]
    LevelLocked(LevelId),
}

/// One level attempt: entities, director, and the serialized event queue.
pub struct LevelSession<'a> {
    env: GameEnv<'a>,
    bus: EventBus,
    director: WaveDirector,
    entities: BTreeMap<EntityId, StatTable>,
    monster_kinds: BTreeMap<EntityId, MonsterId>,
    queue: VecDeque<SessionCommand>,
    draining: bool,
    next_entity: u32,
    game_seed: u64,
    nonce: u64,
}

/// Spawner that allocates entity ids and records what the director asked
/// for, so the session can materialize stat tables after the borrow on the
/// director ends.
struct SpawnCollector<'a> {
    next_entity: &'a mut u32,
    spawned: Vec<(EntityId, MonsterId)>,
}

impl Spawner for SpawnCollector<'_> {
    fn spawn(&mut self, monster: MonsterId, spawn_point: &str) -> EntityId {
        *self.next_entity += 1;
        let entity = EntityId(*self.next_entity);
        tracing::debug!(%entity, %monster, spawn_point, "spawn requested");
        self.spawned.push((entity, monster));
        entity
    }
}

impl<'a> LevelSession<'a> {
    pub fn new(env: GameEnv<'a>, bus: EventBus, game_seed: u64) -> Self {
        Self {
            env,
            bus,
            director: WaveDirector::new(),
            entities: BTreeMap::new(),
            monster_kinds: BTreeMap::new(),
            queue: VecDeque::new(),
            draining: false,
            next_entity: EntityId::PLAYER.0,
            game_seed,
            nonce: 0,
        }
    }

    pub fn state(&self) -> DirectorState {
        self.director.state()
    }

    /// Stats of a live entity.
    pub fn stats(&self, entity: EntityId) -> Option<&StatTable> {
        self.entities.get(&entity)
    }

    /// Monsters currently alive (excludes the player).
    pub fn live_monsters(&self) -> usize {
        self.monster_kinds.len()
    }

    /// Begin a run of `level_id` with the given player stats.
    ///
    /// The save is consulted read-only for the unlock check; the session
    /// never writes progress back.
    pub fn start(
        &mut self,
        level_id: LevelId,
        player: StatTable,
        save: &SaveData,
    ) -> Result<(), SessionError> {
        if !save.is_level_unlocked(level_id) {
            return Err(SessionError::LevelLocked(level_id));
        }
        let level = match self.env.level(level_id) {
            Ok(level) => Arc::new(level.clone()),
            Err(err) => {
                tracing::error!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    %level_id,
                    "level lookup failed"
                );
                return Err(err.into());
            }
        };
        tracing::info!(%level_id, name = %level.name, "level run starting");

        self.entities.insert(EntityId::PLAYER, player);

        let mut collector = SpawnCollector {
            next_entity: &mut self.next_entity,
            spawned: Vec::new(),
        };
        self.director.start(level, &mut collector)?;

        let spawned = collector.spawned;
        self.materialize(spawned)
    }

    /// Skill power multiplier for this profile, from the skill table and the
    /// per-skill level recorded in the save.
    pub fn skill_power(&self, skill: SkillId, save: &SaveData) -> Result<f32, SessionError> {
        let definition = self.env.skill(skill)?;
        Ok(definition.multiplier(save.skill_level(skill)))
    }

    /// Enqueue a command and drain the queue.
    ///
    /// Commands are processed strictly in arrival order. If processing one
    /// command enqueues another (a death produced by an attack), the
    /// follow-up runs after everything already queued, never before.
    pub fn submit(&mut self, command: SessionCommand) -> Result<(), SessionError> {
        self.queue.push_back(command);
        if self.draining {
            return Ok(());
        }

        self.draining = true;
        let result = self.drain();
        self.draining = false;
        result
    }

    /// Outcome of a finished run, if the run is over.
    ///
    /// Victory pays the level's rewards in full; defeat pays the retained
    /// fraction from the global config.
    pub fn outcome(&self) -> Option<(bool, Rewards)> {
        let level = self.director.level()?;
        match self.director.state() {
            DirectorState::Victory => Some((true, Rewards::victory(level))),
            DirectorState::Defeat => Some((false, Rewards::retained(level, self.env.config()))),
            _ => None,
        }
    }

    fn drain(&mut self) -> Result<(), SessionError> {
        while let Some(command) = self.queue.pop_front() {
            match command {
                SessionCommand::Attack {
                    attacker,
                    defender,
                    power_multiplier,
                } => self.process_attack(attacker, defender, power_multiplier)?,
                SessionCommand::MonsterDied { entity } => self.process_monster_death(entity)?,
                SessionCommand::PlayerDied => self.process_player_death(),
            }
        }
        Ok(())
    }

    fn process_attack(
        &mut self,
        attacker: EntityId,
        defender: EntityId,
        power_multiplier: f32,
    ) -> Result<(), SessionError> {
        let attacker_stats = self
            .entities
            .get(&attacker)
            .ok_or(SessionError::UnknownEntity(attacker))?
            .clone();
        if !self.entities.contains_key(&defender) {
            return Err(SessionError::UnknownEntity(defender));
        }

        let params = self.env.config().combat;
        let seed = compute_seed(self.game_seed, self.nonce, attacker.0, 0);
        self.nonce += 1;
        let crit_roll = self.env.rng().unit_f32(seed);

        let defender_stats = &self.entities[&defender];
        let result = resolve_attack(
            &attacker_stats,
            defender_stats,
            power_multiplier,
            crit_roll,
            &params,
        );
        tracing::debug!(
            %attacker,
            %defender,
            damage = result.damage,
            critical = result.critical,
            "attack resolved"
        );

        let new_hp = self.apply_damage(defender, result.damage);

        // Lifesteal is applied at the application site, not in the resolver.
        let lifesteal = attacker_stats.get(Attribute::LifeSteal);
        if lifesteal > 0.0 && attacker != defender {
            self.apply_heal(attacker, result.damage * lifesteal);
        }

        if new_hp <= 0.0 {
            self.queue.push_back(if defender.is_player() {
                SessionCommand::PlayerDied
            } else {
                SessionCommand::MonsterDied { entity: defender }
            });
        }
        Ok(())
    }

    fn process_monster_death(&mut self, entity: EntityId) -> Result<(), SessionError> {
        let Some(kind) = self.monster_kinds.remove(&entity) else {
            // Double delivery or an id the session never spawned. The
            // director clamps and warns; nothing to remove here.
            tracing::warn!(%entity, "death reported for unknown monster");
            let mut sink = self.bus.sink();
            sink.emit(GameEvent::SpuriousMonsterDeath {
                state: self.director.state(),
            });
            return Ok(());
        };
        self.entities.remove(&entity);
        self.award_kill(kind)?;

        let mut collector = SpawnCollector {
            next_entity: &mut self.next_entity,
            spawned: Vec::new(),
        };
        let mut sink = self.bus.sink();
        self.director.on_monster_died(&mut collector, &mut sink);
        let state = self.director.state();
        tracing::info!(%entity, ?state, "monster death processed");

        let spawned = collector.spawned;
        self.materialize(spawned)
    }

    fn process_player_death(&mut self) {
        let mut sink = self.bus.sink();
        self.director.on_player_died(&mut sink);
        tracing::info!(state = ?self.director.state(), "player death processed");
    }

    /// Kill rewards accrue on the player's own stat table; persistence picks
    /// them up from there at run end.
    fn award_kill(&mut self, kind: MonsterId) -> Result<(), SessionError> {
        let definition = self.env.monster(kind)?;
        let (exp, gold) = (definition.exp_value as f32, definition.gold_value as f32);
        if let Some(player) = self.entities.get_mut(&EntityId::PLAYER) {
            player.modify(Attribute::CurrentExp, exp);
            player.modify(Attribute::Gold, gold);
        }
        Ok(())
    }

    fn apply_damage(&mut self, entity: EntityId, damage: f32) -> f32 {
        let Some(stats) = self.entities.get_mut(&entity) else {
            return 0.0;
        };
        let old_hp = stats.hp();
        stats.modify(Attribute::Hp, -damage);
        let new_hp = stats.hp();
        self.bus.publish(GameEvent::HealthChanged {
            entity,
            old_hp,
            new_hp,
        });
        new_hp
    }

    fn apply_heal(&mut self, entity: EntityId, amount: f32) {
        let Some(stats) = self.entities.get_mut(&entity) else {
            return;
        };
        let old_hp = stats.hp();
        stats.modify(Attribute::Hp, amount);
        let new_hp = stats.hp();
        if new_hp != old_hp {
            self.bus.publish(GameEvent::HealthChanged {
                entity,
                old_hp,
                new_hp,
            });
        }
    }

    /// Turn recorded spawn requests into live entities with stat tables
    /// from the monster definitions.
    fn materialize(&mut self, spawned: Vec<(EntityId, MonsterId)>) -> Result<(), SessionError> {
        for (entity, kind) in spawned {
            let definition = self.env.monster(kind)?;
            self.entities.insert(entity, definition.stat_table());
            self.monster_kinds.insert(entity, kind);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use game_content::ContentRegistry;
    use game_core::{
        BossDefinition, GameConfig, LevelDefinition, MonsterDefinition, SpawnEntry, WaveDefinition,
    };
    use tokio::sync::broadcast::Receiver;

    use crate::events::Topic;

    use super::*;

    /// Route session tracing through the test harness when `RUST_LOG` is set.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn monster(id: u32, hp: f32, attack: f32, exp: u32, gold: u32) -> MonsterDefinition {
        MonsterDefinition {
            id: MonsterId(id),
            name: format!("monster_{id}"),
            base_stats: BTreeMap::from([(Attribute::MaxHp, hp), (Attribute::Attack, attack)]),
            exp_value: exp,
            gold_value: gold,
            drop_table: None,
        }
    }

    /// Two waves (3 + 2) and a boss, all one-hit kills for a 20-attack player.
    fn content() -> ContentRegistry {
        init_tracing();
        let level = LevelDefinition {
            id: LevelId(1),
            name: "crypt".into(),
            scene: "scene_crypt".into(),
            reward_gold: 200,
            reward_exp: 80,
            waves: vec![
                WaveDefinition {
                    id: 1,
                    spawns: vec![SpawnEntry {
                        monster: MonsterId(1),
                        count: 3,
                        spawn_points: vec!["a".into(), "b".into()],
                    }],
                },
                WaveDefinition {
                    id: 2,
                    spawns: vec![SpawnEntry {
                        monster: MonsterId(2),
                        count: 2,
                        spawn_points: vec!["c".into()],
                    }],
                },
            ],
            boss: Some(BossDefinition {
                monster: MonsterId(9),
                spawn_point: "throne".into(),
            }),
        };

        ContentRegistry::from_tables(
            BTreeMap::from([(LevelId(1), level)]),
            BTreeMap::from([
                (MonsterId(1), monster(1, 10.0, 2.0, 5, 2)),
                (MonsterId(2), monster(2, 15.0, 4.0, 8, 3)),
                (MonsterId(9), monster(9, 18.0, 50.0, 100, 80)),
            ]),
            BTreeMap::from([(
                SkillId(1),
                game_core::SkillDefinition {
                    id: SkillId(1),
                    name: "slash".into(),
                    power_multipliers: vec![1.0, 1.5, 2.0],
                },
            )]),
            BTreeMap::new(),
            BTreeMap::new(),
            GameConfig::default(),
        )
        .unwrap()
    }

    fn player() -> StatTable {
        StatTable::from_pairs([
            (Attribute::MaxHp, 100.0),
            (Attribute::Hp, 100.0),
            (Attribute::Attack, 20.0),
            (Attribute::CritChance, 0.0),
        ])
    }

    fn unlocked_save() -> SaveData {
        let mut save = SaveData::default();
        save.progress.unlocked_level = LevelId(1);
        save.progress.skill_levels.insert(SkillId(1), 2);
        save
    }

    fn count_completions(rx: &mut Receiver<GameEvent>) -> usize {
        let mut count = 0;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, GameEvent::LevelCompleted { .. }) {
                count += 1;
            }
        }
        count
    }

    fn kill_all_live_monsters(session: &mut LevelSession<'_>) {
        let targets: Vec<EntityId> = session.monster_kinds.keys().copied().collect();
        for target in targets {
            session
                .submit(SessionCommand::Attack {
                    attacker: EntityId::PLAYER,
                    defender: target,
                    power_multiplier: 1.0,
                })
                .unwrap();
        }
    }

    #[test]
    fn full_run_to_victory() {
        let registry = content();
        let bus = EventBus::new();
        let mut progression = bus.subscribe(Topic::Progression);
        let mut session = LevelSession::new(registry.env(), bus.clone(), 7);

        session.start(LevelId(1), player(), &unlocked_save()).unwrap();
        assert_eq!(session.state(), DirectorState::WaveActive { wave_index: 0 });
        assert_eq!(session.live_monsters(), 3);

        // Wave 0 cleared: wave 1 materializes.
        kill_all_live_monsters(&mut session);
        assert_eq!(session.state(), DirectorState::WaveActive { wave_index: 1 });
        assert_eq!(session.live_monsters(), 2);

        // Wave 1 cleared: boss appears.
        kill_all_live_monsters(&mut session);
        assert_eq!(session.state(), DirectorState::BossActive);
        assert_eq!(session.live_monsters(), 1);

        // Boss down: victory with full rewards, exactly one completion event.
        kill_all_live_monsters(&mut session);
        assert_eq!(session.state(), DirectorState::Victory);
        assert_eq!(session.outcome(), Some((true, Rewards { gold: 200, exp: 80 })));
        assert_eq!(count_completions(&mut progression), 1);

        // Kill rewards accrued on the player: 3×(5,2) + 2×(8,3) + (100,80).
        let player_stats = session.stats(EntityId::PLAYER).unwrap();
        assert_eq!(player_stats.get(Attribute::CurrentExp), 131.0);
        assert_eq!(player_stats.get(Attribute::Gold), 92.0);
    }

    #[test]
    fn defeat_pays_retained_rewards() {
        let registry = content();
        let bus = EventBus::new();
        let mut progression = bus.subscribe(Topic::Progression);
        let mut session = LevelSession::new(registry.env(), bus.clone(), 7);
        session.start(LevelId(1), player(), &unlocked_save()).unwrap();

        session.submit(SessionCommand::PlayerDied).unwrap();
        assert_eq!(session.state(), DirectorState::Defeat);

        // Default retain ratio 0.3: gold 200→60, exp 80→24.
        assert_eq!(session.outcome(), Some((false, Rewards { gold: 60, exp: 24 })));

        let mut saw_player_killed = false;
        while let Ok(event) = progression.try_recv() {
            saw_player_killed |= matches!(event, GameEvent::PlayerKilled { .. });
        }
        assert!(saw_player_killed);

        // Further deaths change nothing.
        session.submit(SessionCommand::PlayerDied).unwrap();
        assert_eq!(session.state(), DirectorState::Defeat);
    }

    #[test]
    fn monster_attack_can_defeat_player() {
        let registry = content();
        let bus = EventBus::new();
        let mut session = LevelSession::new(registry.env(), bus.clone(), 7);

        // A 10-HP player dies to a single 50-attack boss swing; use wave
        // monsters instead and whittle down over several hits.
        let fragile = StatTable::from_pairs([
            (Attribute::MaxHp, 3.0),
            (Attribute::Hp, 3.0),
            (Attribute::Attack, 20.0),
        ]);
        session.start(LevelId(1), fragile, &unlocked_save()).unwrap();

        let monster = *session.monster_kinds.keys().next().unwrap();
        // Wave monster attack 2, player defense 0: two hits kill.
        session
            .submit(SessionCommand::Attack {
                attacker: monster,
                defender: EntityId::PLAYER,
                power_multiplier: 1.0,
            })
            .unwrap();
        assert_eq!(session.state(), DirectorState::WaveActive { wave_index: 0 });

        session
            .submit(SessionCommand::Attack {
                attacker: monster,
                defender: EntityId::PLAYER,
                power_multiplier: 1.0,
            })
            .unwrap();
        assert_eq!(session.state(), DirectorState::Defeat);
    }

    #[test]
    fn health_changes_are_announced() {
        let registry = content();
        let bus = EventBus::new();
        let mut combat = bus.subscribe(Topic::Combat);
        let mut session = LevelSession::new(registry.env(), bus.clone(), 7);
        session.start(LevelId(1), player(), &unlocked_save()).unwrap();

        let target = *session.monster_kinds.keys().next().unwrap();
        session
            .submit(SessionCommand::Attack {
                attacker: EntityId::PLAYER,
                defender: target,
                power_multiplier: 1.0,
            })
            .unwrap();

        match combat.try_recv().unwrap() {
            GameEvent::HealthChanged { entity, old_hp, new_hp } => {
                assert_eq!(entity, target);
                assert_eq!(old_hp, 10.0);
                assert_eq!(new_hp, 0.0);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn locked_level_is_refused() {
        let registry = content();
        let bus = EventBus::new();
        let mut session = LevelSession::new(registry.env(), bus, 7);

        let save = SaveData::default(); // unlocked_level = 0
        let err = session.start(LevelId(1), player(), &save).unwrap_err();
        assert!(matches!(err, SessionError::LevelLocked(LevelId(1))));
    }

    #[test]
    fn unknown_level_fails_fast() {
        let registry = content();
        let bus = EventBus::new();
        let mut session = LevelSession::new(registry.env(), bus, 7);

        let mut save = unlocked_save();
        save.progress.unlocked_level = LevelId(99);
        let err = session.start(LevelId(42), player(), &save).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Oracle(OracleError::LevelNotFound(LevelId(42)))
        ));
    }

    #[test]
    fn unknown_attacker_is_an_error() {
        let registry = content();
        let bus = EventBus::new();
        let mut session = LevelSession::new(registry.env(), bus, 7);
        session.start(LevelId(1), player(), &unlocked_save()).unwrap();

        let err = session
            .submit(SessionCommand::Attack {
                attacker: EntityId(999),
                defender: EntityId::PLAYER,
                power_multiplier: 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, SessionError::UnknownEntity(EntityId(999))));
    }

    #[test]
    fn duplicate_monster_death_warns_and_keeps_state() {
        let registry = content();
        let bus = EventBus::new();
        let mut progression = bus.subscribe(Topic::Progression);
        let mut session = LevelSession::new(registry.env(), bus.clone(), 7);
        session.start(LevelId(1), player(), &unlocked_save()).unwrap();

        let target = *session.monster_kinds.keys().next().unwrap();
        session.submit(SessionCommand::MonsterDied { entity: target }).unwrap();
        assert_eq!(session.live_monsters(), 2);

        // Same entity reported again: warning, no state change.
        session.submit(SessionCommand::MonsterDied { entity: target }).unwrap();
        assert_eq!(session.live_monsters(), 2);
        assert_eq!(session.state(), DirectorState::WaveActive { wave_index: 0 });

        let mut warnings = 0;
        while let Ok(event) = progression.try_recv() {
            if matches!(event, GameEvent::SpuriousMonsterDeath { .. }) {
                warnings += 1;
            }
        }
        assert_eq!(warnings, 1);
    }

    #[test]
    fn skill_power_uses_saved_skill_level() {
        let registry = content();
        let bus = EventBus::new();
        let session = LevelSession::new(registry.env(), bus, 7);

        let save = unlocked_save(); // slash at level 2
        assert_eq!(session.skill_power(SkillId(1), &save).unwrap(), 1.5);

        // Unlearned skill contributes a neutral multiplier.
        let fresh = SaveData::default();
        assert_eq!(session.skill_power(SkillId(1), &fresh).unwrap(), 1.0);
    }

    #[test]
    fn lifesteal_heals_the_attacker() {
        let registry = content();
        let bus = EventBus::new();
        let mut session = LevelSession::new(registry.env(), bus, 7);

        let vampiric = player().with(Attribute::LifeSteal, 0.5);
        let mut wounded = vampiric.clone();
        wounded.modify(Attribute::Hp, -50.0);
        session.start(LevelId(1), wounded, &unlocked_save()).unwrap();

        let target = *session.monster_kinds.keys().next().unwrap();
        session
            .submit(SessionCommand::Attack {
                attacker: EntityId::PLAYER,
                defender: target,
                power_multiplier: 1.0,
            })
            .unwrap();

        // 20 damage dealt, half returned as healing: 50 → 60.
        assert_eq!(session.stats(EntityId::PLAYER).unwrap().get(Attribute::Hp), 60.0);
    }
}
