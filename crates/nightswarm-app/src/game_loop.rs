//! Session loop thread — runs the engine at the nominal tick rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for synchronous polling, last value wins. The
//! thread exits when the session ends, on `Shutdown`, or when every sender
//! is gone.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use nightswarm_core::commands::PlayerCommand;
use nightswarm_core::constants::{TICK_DT, TICK_RATE};
use nightswarm_core::enums::SessionStatus;
use nightswarm_core::state::FrameSnapshot;
use nightswarm_sim::engine::{SessionConfig, SessionEngine};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the host to the session loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Shut down the loop thread without waiting for the session to end.
    Shutdown,
}

/// Latest-snapshot cell shared between the loop thread and the host.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// Spawns the session loop in a new thread.
///
/// Returns the command sender for the host to use plus the join handle,
/// so the host can wait for the loop after the session ends.
pub fn spawn_session_loop(
    config: SessionConfig,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("nightswarm-session-loop".into())
        .spawn(move || {
            run_session_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The session loop. Runs until the session ends, a Shutdown command, or
/// channel disconnect.
fn run_session_loop(
    config: SessionConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = SessionEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(command)) => {
                    engine.queue_command(command);
                }
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(TICK_DT);
        let ended = snapshot.status == SessionStatus::Ended;

        // 3. Store the latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // The final snapshot stays in shared state for the host to read.
        if ended {
            return;
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Player(PlayerCommand::ResetPointer))
            .unwrap();
        tx.send(LoopCommand::Player(PlayerCommand::SetMovement {
            forward: true,
            backward: false,
        }))
        .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Player(PlayerCommand::ResetPointer)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Player(PlayerCommand::SetMovement {
                forward: true,
                backward: false,
            })
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_thread_lifecycle() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_session_loop(SessionConfig::default(), Arc::clone(&latest)).unwrap();

        // Wait for the loop to publish at least one snapshot.
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(snapshot) = latest.lock().unwrap().clone() {
                assert!(snapshot.time.tick >= 1);
                break;
            }
            assert!(
                Instant::now() < deadline,
                "Loop never published a snapshot"
            );
            std::thread::sleep(Duration::from_millis(5));
        }

        tx.send(LoopCommand::Shutdown).unwrap();
        handle.join().expect("Loop thread should exit cleanly");
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SessionEngine::new(SessionConfig::default());
        for _ in 0..50 {
            engine.tick(TICK_DT);
        }

        let snapshot = engine.tick(TICK_DT);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
