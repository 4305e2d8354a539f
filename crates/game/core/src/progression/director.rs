//! WaveDirector - the level progression state machine.

use std::sync::Arc;

use crate::env::{LevelDefinition, WaveDefinition};
use crate::error::{ErrorSeverity, GameError};

use super::events::{EventSink, GameEvent, Spawner};

/// Phase of a level run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectorState {
    /// No run in progress.
    Idle,
    /// Fighting wave `wave_index` (0-based).
    WaveActive { wave_index: usize },
    /// All waves cleared; the boss is up.
    BossActive,
    /// Terminal: the boss died.
    Victory,
    /// Terminal: the player died.
    Defeat,
}

impl DirectorState {
    /// Victory and Defeat absorb all further events.
    pub const fn is_terminal(self) -> bool {
        matches!(self, DirectorState::Victory | DirectorState::Defeat)
    }

    /// A run is in progress (monsters can still die meaningfully).
    pub const fn is_active(self) -> bool {
        matches!(self, DirectorState::WaveActive { .. } | DirectorState::BossActive)
    }
}

/// Mutable bookkeeping for one level attempt.
///
/// Created on [`WaveDirector::start`], discarded on level exit. Never
/// persisted.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunState {
    pub state: DirectorState,
    /// Monsters currently alive. Strictly decremented by death events,
    /// reset by each spawn batch, clamped at zero.
    pub alive: u32,
    pub boss_spawned: bool,
    /// Outcome of the last finished run, if any.
    pub last_victory: Option<bool>,
}

impl RunState {
    fn idle() -> Self {
        Self {
            state: DirectorState::Idle,
            alive: 0,
            boss_spawned: false,
            last_victory: None,
        }
    }
}

/// Errors surfaced by illegal use of the director.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectorError {
    /// `start` was called while a run was already in progress.
    #[error("level run already started (state {0:?})")]
    AlreadyStarted(DirectorState),
}

impl GameError for DirectorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            DirectorError::AlreadyStarted(_) => "DIRECTOR_ALREADY_STARTED",
        }
    }
}

/// Walks a [`LevelDefinition`], requesting spawns and advancing
/// wave → wave → boss → victory as deaths come in.
///
/// All transitions are synchronous and run on whichever call delivers the
/// triggering event. The director holds no queue and no locks; callers are
/// responsible for delivering death events one at a time, in order.
#[derive(Clone, Debug)]
pub struct WaveDirector {
    level: Option<Arc<LevelDefinition>>,
    run: RunState,
}

impl WaveDirector {
    pub fn new() -> Self {
        Self {
            level: None,
            run: RunState::idle(),
        }
    }

    pub fn state(&self) -> DirectorState {
        self.run.state
    }

    pub fn alive(&self) -> u32 {
        self.run.alive
    }

    pub fn last_victory(&self) -> Option<bool> {
        self.run.last_victory
    }

    /// The definition of the running (or last run) level.
    pub fn level(&self) -> Option<&Arc<LevelDefinition>> {
        self.level.as_ref()
    }

    /// Discard the current run and return to Idle.
    ///
    /// Called on level exit; `last_victory` survives until the next start so
    /// the shell can still read the outcome.
    pub fn reset(&mut self) {
        let last_victory = self.run.last_victory;
        self.level = None;
        self.run = RunState::idle();
        self.run.last_victory = last_victory;
    }

    /// Begin a run: transition Idle → WaveActive(0) and spawn wave 0.
    ///
    /// The definition is assumed validated by the loader (at least one wave,
    /// no empty spawn batches); the director does not re-validate.
    pub fn start(
        &mut self,
        level: Arc<LevelDefinition>,
        spawner: &mut dyn Spawner,
    ) -> Result<(), DirectorError> {
        if self.run.state != DirectorState::Idle {
            return Err(DirectorError::AlreadyStarted(self.run.state));
        }

        self.run = RunState::idle();
        self.enter_wave(&level, 0, spawner);
        self.level = Some(level);
        Ok(())
    }

    /// Process one monster death.
    ///
    /// Decrements the alive-count; on reaching zero, advances to the next
    /// wave, the boss, or victory. Deaths reported past zero (duplicate or
    /// late events) change nothing except a diagnosability warning, and a
    /// terminal state absorbs everything silently.
    pub fn on_monster_died(&mut self, spawner: &mut dyn Spawner, sink: &mut dyn EventSink) {
        if self.run.state.is_terminal() {
            return;
        }
        if !self.run.state.is_active() || self.run.alive == 0 {
            sink.emit(GameEvent::SpuriousMonsterDeath { state: self.run.state });
            return;
        }
        // is_active implies start() stored a level.
        let Some(level) = self.level.clone() else {
            return;
        };

        self.run.alive -= 1;
        if self.run.alive > 0 {
            return;
        }

        match self.run.state {
            DirectorState::WaveActive { wave_index } => {
                if wave_index < level.last_wave_index() {
                    self.enter_wave(&level, wave_index + 1, spawner);
                } else if let Some(boss) = &level.boss {
                    self.run.state = DirectorState::BossActive;
                    self.run.boss_spawned = true;
                    spawner.spawn(boss.monster, &boss.spawn_point);
                    self.run.alive = 1;
                } else {
                    // Boss-less level: clearing the last wave wins outright.
                    self.finish_victory(&level, sink);
                }
            }
            DirectorState::BossActive => self.finish_victory(&level, sink),
            // Idle/terminal handled above.
            _ => {}
        }
    }

    /// Process the player's death: any active state → Defeat.
    ///
    /// Defeat is decided outside the director (the player's HP reaching
    /// zero) and only reported here. Idempotent: repeated calls and calls
    /// in Idle are no-ops.
    pub fn on_player_died(&mut self, sink: &mut dyn EventSink) {
        if !self.run.state.is_active() {
            return;
        }

        self.run.state = DirectorState::Defeat;
        self.run.last_victory = Some(false);
        sink.emit(GameEvent::PlayerKilled {
            entity: crate::ids::EntityId::PLAYER,
        });
    }

    fn enter_wave(&mut self, level: &LevelDefinition, wave_index: usize, spawner: &mut dyn Spawner) {
        let wave = &level.waves[wave_index];
        self.run.state = DirectorState::WaveActive { wave_index };
        self.run.alive = Self::spawn_wave(wave, spawner);
    }

    /// Request every spawn in the wave, cycling through each entry's named
    /// spawn points. Returns the number of spawns actually issued, which is
    /// the alive-count for the wave.
    fn spawn_wave(wave: &WaveDefinition, spawner: &mut dyn Spawner) -> u32 {
        let mut spawned = 0;
        for entry in &wave.spawns {
            let mut points = entry.spawn_points.iter().cycle();
            for _ in 0..entry.count {
                if let Some(point) = points.next() {
                    spawner.spawn(entry.monster, point);
                    spawned += 1;
                }
            }
        }
        spawned
    }

    fn finish_victory(&mut self, level: &LevelDefinition, sink: &mut dyn EventSink) {
        self.run.state = DirectorState::Victory;
        self.run.last_victory = Some(true);
        sink.emit(GameEvent::LevelCompleted {
            level_id: level.id,
            reward_gold: level.reward_gold,
            reward_exp: level.reward_exp,
        });
    }
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self::new()
    }
}
