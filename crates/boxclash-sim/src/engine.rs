//! Simulation engine: the Combat Director.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs all systems, and produces `MatchSnapshot`s. It is completely
//! headless: an external driver calls `tick()` once per frame, which keeps
//! the engine deterministic under test.

use std::collections::VecDeque;

use hecs::World;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use boxclash_core::arena::Arena;
use boxclash_core::commands::MatchCommand;
use boxclash_core::components::PowerUp;
use boxclash_core::constants::{TIME_SCALE_MAX, TIME_SCALE_MIN};
use boxclash_core::enums::{GamePhase, MatchResult};
use boxclash_core::events::MatchEvent;
use boxclash_core::setup::{MatchSetup, SetupError};
use boxclash_core::state::MatchSnapshot;
use boxclash_core::types::SimTime;

use crate::stats::MatchStats;
use crate::systems;
use crate::systems::power_up_spawner::PowerUpSchedule;
use crate::world_setup;

/// Configuration for a new simulation engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    setup: Option<MatchSetup>,
    arena: Arena,
    next_agent_id: u32,
    next_projectile_id: u64,
    next_power_up_id: u64,
    power_up_schedule: PowerUpSchedule,
    command_queue: VecDeque<MatchCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<MatchEvent>,
    result: Option<MatchResult>,
    stats: MatchStats,
}

impl SimulationEngine {
    /// Create an engine in the `Setup` phase.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: clamp_time_scale(config.time_scale),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            setup: None,
            arena: Arena::default(),
            next_agent_id: 0,
            next_projectile_id: 0,
            next_power_up_id: 0,
            power_up_schedule: PowerUpSchedule::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            result: None,
            stats: MatchStats::default(),
        }
    }

    /// Validate `setup` and start a match from it.
    ///
    /// The setup is kept so `MatchCommand::Rematch` can replay it. An invalid
    /// setup leaves the engine untouched.
    pub fn start_match(&mut self, setup: MatchSetup) -> Result<(), SetupError> {
        setup.validate()?;
        info!(
            "starting match: {} teams, {} agents, arena {}, power-ups {:?}",
            setup.teams.len(),
            setup.total_agents(),
            setup.arena.name(),
            setup.power_ups
        );
        self.setup = Some(setup);
        self.reset_match();
        Ok(())
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MatchCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Outside the `Active` phase no system runs and nothing changes.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance(self.time_scale);
        }

        self.snapshot()
    }

    /// Current snapshot without advancing. Drains pending events.
    pub fn snapshot(&mut self) -> MatchSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.arena,
            &self.time,
            self.phase,
            self.time_scale,
            self.result.as_ref(),
            &self.stats,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// The terminal result, once the match is over.
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Running statistics for the current match.
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// The setup the current match was started from.
    pub fn setup(&self) -> Option<&MatchSetup> {
        self.setup.as_ref()
    }

    /// The arena of the current match.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage exact situations.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Remove every entity but keep the match running (for staged tests).
    #[cfg(test)]
    pub fn clear_entities(&mut self) {
        self.world.clear();
    }

    /// Spawn an agent at full health (for staged tests).
    #[cfg(test)]
    pub fn spawn_test_agent(
        &mut self,
        side: u32,
        position: boxclash_core::types::Position,
        velocity: boxclash_core::types::Velocity,
        cooldown: f64,
    ) -> (hecs::Entity, u32) {
        use boxclash_core::types::{SideId, TeamId};

        let id = self.next_agent_id;
        self.next_agent_id += 1;
        let entity = world_setup::spawn_agent(
            &mut self.world,
            id,
            TeamId(side),
            SideId(side),
            "#ffffff",
            position,
            velocity,
            cooldown,
        );
        (entity, id)
    }

    /// Spawn a projectile owned by `side` (for staged tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        side: u32,
        center: boxclash_core::types::Position,
        velocity: boxclash_core::types::Velocity,
        tracked: Option<u32>,
    ) -> hecs::Entity {
        use boxclash_core::components::Projectile;
        use boxclash_core::constants::PROJECTILE_DAMAGE;
        use boxclash_core::types::{SideId, TeamId};

        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        self.world.spawn((
            Projectile {
                id,
                owner_team: TeamId(side),
                owner_side: SideId(side),
                color: "#ffffff".into(),
                damage: PROJECTILE_DAMAGE,
                homing: tracked.is_some(),
                tracked,
            },
            center,
            velocity,
        ))
    }

    /// Spawn a power-up (for staged tests).
    #[cfg(test)]
    pub fn spawn_test_power_up(
        &mut self,
        kind: boxclash_core::enums::PowerUpKind,
        center: boxclash_core::types::Position,
    ) -> hecs::Entity {
        let id = self.next_power_up_id;
        self.next_power_up_id += 1;
        world_setup::spawn_power_up(&mut self.world, id, kind, center)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: MatchCommand) {
        match command {
            MatchCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            MatchCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            MatchCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                GamePhase::Setup | GamePhase::GameOver => {}
            },
            MatchCommand::SetTimeScale { scale } => {
                self.time_scale = clamp_time_scale(scale);
            }
            MatchCommand::Rematch => {
                if self.setup.is_some() {
                    info!("rematch");
                    self.reset_match();
                }
            }
            MatchCommand::ReturnToMenu => {
                self.world.clear();
                self.despawn_buffer.clear();
                self.result = None;
                self.phase = GamePhase::Setup;
            }
        }
    }

    /// Rebuild every collection from the stored setup and enter `Active`.
    fn reset_match(&mut self) {
        let Some(setup) = self.setup.as_ref() else {
            return;
        };

        self.world.clear();
        self.arena = Arena::from_catalog(setup.arena);
        self.next_agent_id = 0;
        self.next_projectile_id = 0;
        self.next_power_up_id = 0;
        world_setup::spawn_teams(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            setup,
            &mut self.next_agent_id,
        );
        self.power_up_schedule =
            PowerUpSchedule::new(setup.enabled_power_ups().to_vec(), &mut self.rng);

        self.time = SimTime::default();
        self.despawn_buffer.clear();
        self.events.clear();
        self.result = None;
        self.stats = MatchStats::default();
        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let time_scale = self.time_scale;

        // 1. Power-up spawning
        systems::power_up_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.power_up_schedule,
            &self.arena,
            &mut self.next_power_up_id,
            &mut self.events,
            &mut self.stats,
            time_scale,
        );
        // 2. Buff countdown
        systems::buffs::tick_down(&mut self.world, time_scale);
        // 3. Agent movement (walls + obstacles)
        systems::movement::run_agents(&mut self.world, &self.arena, time_scale);
        // 4. Targeting
        systems::targeting::run(&mut self.world);
        // 5. Firing
        systems::firing::run(
            &mut self.world,
            &mut self.next_projectile_id,
            &mut self.events,
            &mut self.stats,
            time_scale,
        );
        // 6. Homing guidance
        systems::projectile_kinematics::run(&mut self.world, time_scale);
        // 7. Projectile movement
        systems::movement::run_projectiles(&mut self.world, time_scale);
        // 8. Combat collisions
        systems::collision::run(
            &mut self.world,
            &self.arena,
            &mut self.events,
            &mut self.stats,
            &mut self.despawn_buffer,
        );
        // 9. Cleanup (dead agents, spent projectiles, collected power-ups)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 10. Termination
        if let Some(result) = systems::termination::evaluate(&self.world, self.setup.as_ref()) {
            self.finish(result);
        }
    }

    /// End the match: record the result, clear the pickups, stop ticking.
    fn finish(&mut self, result: MatchResult) {
        info!("match over after {} ticks: {result:?}", self.time.tick + 1);

        for (entity, _power_up) in self.world.query_mut::<&PowerUp>() {
            self.despawn_buffer.push(entity);
        }
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.events.push(MatchEvent::MatchOver {
            result: result.clone(),
        });
        self.result = Some(result);
        self.phase = GamePhase::GameOver;
    }
}

fn clamp_time_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(TIME_SCALE_MIN, TIME_SCALE_MAX)
}
