//! Session engine — the core of the game.
//!
//! `SessionEngine` owns the hecs world holding the pursuer population, the
//! viewer pose, and the wave schedule. It consumes queued player commands,
//! runs the per-tick systems in a fixed order, and produces a
//! [`FrameSnapshot`] every tick. All randomness flows through a single
//! seeded RNG, so two engines with the same seed and the same inputs
//! produce identical snapshot sequences.
//!
//! [`FrameSnapshot`]: nightswarm_core::state::FrameSnapshot

use std::collections::VecDeque;
use std::mem;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nightswarm_core::commands::{MoveInput, PlayerCommand};
use nightswarm_core::components::Pursuit;
use nightswarm_core::constants::{CONTACT_RADIUS, DEFAULT_ASPECT, WAVE_SIZE};
use nightswarm_core::enums::SessionStatus;
use nightswarm_core::events::SessionEvent;
use nightswarm_core::state::FrameSnapshot;
use nightswarm_core::types::{PointerTracker, SimTime, ViewerState};

use crate::systems;
use crate::systems::look::PointerEvent;
use crate::systems::wave_spawner::WaveScheduler;
use crate::world_setup;

/// Configuration for a new session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Seed for the spawn RNG. Two sessions with the same seed see the
    /// same pursuer positions.
    pub seed: u64,
    /// Initial viewport aspect ratio for the projection.
    pub aspect: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            aspect: DEFAULT_ASPECT,
        }
    }
}

/// The session engine. Owns all per-session state.
pub struct SessionEngine {
    world: World,
    viewer: ViewerState,
    pointer: PointerTracker,
    held: MoveInput,
    scheduler: WaveScheduler,
    time: SimTime,
    status: SessionStatus,
    rng: ChaCha8Rng,
    next_pursuer_id: u32,
    waves_spawned: u32,
    command_queue: VecDeque<PlayerCommand>,
    pointer_backlog: Vec<PointerEvent>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SessionEvent>,
}

impl SessionEngine {
    /// Create a new session: viewer at the default pose, then the first
    /// wave spawned immediately so the player is never alone.
    pub fn new(config: SessionConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            viewer: ViewerState {
                aspect: config.aspect,
                ..ViewerState::default()
            },
            pointer: PointerTracker::default(),
            held: MoveInput::default(),
            scheduler: WaveScheduler::default(),
            time: SimTime::default(),
            status: SessionStatus::Running,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_pursuer_id: 0,
            waves_spawned: 0,
            command_queue: VecDeque::new(),
            pointer_backlog: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };

        world_setup::spawn_wave(
            &mut engine.world,
            &mut engine.rng,
            &mut engine.next_pursuer_id,
            WAVE_SIZE,
        );
        engine.push_wave_event(WAVE_SIZE);

        engine
    }

    /// Queue a player command for processing at the start of the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue a batch of player commands, preserving order.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one tick of `dt` seconds and return the
    /// resulting snapshot.
    ///
    /// Non-finite or negative `dt` is clamped to zero: the tick still
    /// happens (input is applied, the tick counter advances) but nothing
    /// time-scaled moves. Once the session has ended, ticks return frozen
    /// snapshots and commands have no further effect.
    pub fn tick(&mut self, dt: f32) -> FrameSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.process_commands();

        if self.status == SessionStatus::Running {
            self.run_systems(dt);
            self.time.advance(dt);
        } else {
            self.pointer_backlog.clear();
        }

        let events = mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.time, self.status, &self.viewer, events)
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current viewer pose.
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    /// Read-only access to the world holding the pursuer population.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of pursuers currently alive.
    pub fn live_pursuers(&self) -> usize {
        let mut query = self.world.query::<&Pursuit>();
        query.iter().filter(|(_, pursuit)| pursuit.alive).count()
    }

    /// Total waves spawned so far, including the opening wave.
    pub fn waves_spawned(&self) -> u32 {
        self.waves_spawned
    }

    /// Drain the command queue. Commands only mutate input bookkeeping
    /// here; the systems consume the results at their step in the tick.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PointerMoved { x, y } => {
                self.pointer_backlog.push(PointerEvent::Sample { x, y });
            }
            PlayerCommand::SetMovement { forward, backward } => {
                self.held = MoveInput { forward, backward };
            }
            PlayerCommand::ResetPointer => {
                self.pointer_backlog.push(PointerEvent::Reset);
            }
            PlayerCommand::SetAspect { aspect } => {
                if aspect.is_finite() && aspect > 0.0 {
                    self.viewer.aspect = aspect;
                }
            }
        }
    }

    /// Run the per-tick pipeline. Order is load-bearing: movement uses the
    /// heading from before this tick's pointer input, contact is checked
    /// after pursuers advance, and no wave spawns on the tick that ends
    /// the session.
    fn run_systems(&mut self, dt: f32) {
        // 1. Ground movement from held input
        systems::movement::run(&mut self.viewer, self.held);

        // 2. Orientation from the pointer backlog
        systems::look::run(&mut self.viewer, &mut self.pointer, &mut self.pointer_backlog);

        // 3. Pursuit toward the viewer
        systems::pursuit::run(&mut self.world, self.viewer.position, dt);

        // 4. Terminal contact check
        if let Some(report) =
            systems::contact::check(&self.world, self.viewer.position, CONTACT_RADIUS)
        {
            self.events.push(SessionEvent::Contact {
                pursuer_id: report.id,
                distance: report.distance,
            });
            self.status = SessionStatus::Ended;
            return;
        }

        // 5. Wave schedule
        if let Some(count) = systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.scheduler,
            &mut self.next_pursuer_id,
            dt,
        ) {
            self.push_wave_event(count);
        }

        // 6. Reclaim flagged-dead pursuers
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn push_wave_event(&mut self, count: u32) {
        self.events.push(SessionEvent::WaveSpawned {
            wave_index: self.waves_spawned,
            count,
        });
        self.waves_spawned += 1;
    }

    /// Place a pursuer at an exact position for scenario tests.
    #[cfg(test)]
    pub fn spawn_pursuer_at(&mut self, position: glam::Vec3, speed: f32) -> Entity {
        world_setup::spawn_pursuer_at(&mut self.world, &mut self.next_pursuer_id, position, speed)
    }

    /// Clear a pursuer's liveness flag. No gameplay rule does this yet;
    /// tests use it to exercise the dead-skip and cleanup paths.
    #[cfg(test)]
    pub fn kill_pursuer(&mut self, entity: Entity) {
        if let Ok(mut pursuit) = self.world.get::<&mut Pursuit>(entity) {
            pursuit.alive = false;
        }
    }
}
