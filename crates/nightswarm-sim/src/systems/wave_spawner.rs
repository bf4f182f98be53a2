//! Wave scheduling and spawning.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use nightswarm_core::constants::{WAVE_INTERVAL_SECS, WAVE_SIZE};

use crate::world_setup;

/// Elapsed-time accumulator that decides when the next wave is due.
///
/// The accumulator sums tick durations and fires once it reaches the wave
/// interval, then resets to zero. Resetting to zero rather than subtracting
/// the interval means any overshoot is discarded: late ticks can delay a
/// wave but never cause two waves to fire back to back. The stored value is
/// never negative or non-finite; malformed dt is rejected at this boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveScheduler {
    elapsed_secs: f32,
}

impl WaveScheduler {
    /// Advance the accumulator by `dt` seconds. Returns true when a wave
    /// is due. At most one wave fires per call, however large `dt` is.
    pub fn tick(&mut self, dt: f32) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed_secs += dt;
        }
        if self.elapsed_secs >= WAVE_INTERVAL_SECS {
            self.elapsed_secs = 0.0;
            true
        } else {
            false
        }
    }

    /// Seconds accumulated toward the next wave.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }
}

/// Advance the schedule and spawn a wave if one is due.
///
/// Returns the number of pursuers spawned, or `None` when no wave fired.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scheduler: &mut WaveScheduler,
    next_id: &mut u32,
    dt: f32,
) -> Option<u32> {
    if scheduler.tick(dt) {
        world_setup::spawn_wave(world, rng, next_id, WAVE_SIZE);
        Some(WAVE_SIZE)
    } else {
        None
    }
}
