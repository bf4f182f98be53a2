//! Headless demo shell: runs a survival session and logs its outcome.
//!
//! By default the engine is driven directly on the main thread as fast as
//! it will go. `--realtime` runs it on the session loop thread at the
//! nominal tick rate instead, polling the shared snapshot for progress.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nightswarm_app::game_loop::{spawn_session_loop, LoopCommand, SharedSnapshot};
use nightswarm_core::constants::TICK_DT;
use nightswarm_core::enums::SessionStatus;
use nightswarm_core::events::SessionEvent;
use nightswarm_core::state::FrameSnapshot;
use nightswarm_sim::engine::{SessionConfig, SessionEngine};

#[derive(Parser)]
#[command(name = "nightswarm", about = "Headless survival-session demo")]
struct Cli {
    /// RNG seed for the pursuer spawn sequence
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Stop after this many ticks if the session is still running
    #[arg(short, long, default_value = "36000")]
    max_ticks: u64,

    /// Run at the nominal tick rate on the loop thread instead of
    /// fast-forwarding on the main thread
    #[arg(short, long)]
    realtime: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = SessionConfig {
        seed: cli.seed,
        ..Default::default()
    };

    let last = if cli.realtime {
        run_realtime(config, cli.max_ticks)?
    } else {
        run_fast_forward(config, cli.max_ticks)
    };

    report_outcome(&last);
    Ok(())
}

/// Drive the engine directly, one tick after another, no pacing.
fn run_fast_forward(config: SessionConfig, max_ticks: u64) -> FrameSnapshot {
    info!(seed = config.seed, "session started");
    let mut engine = SessionEngine::new(config);

    loop {
        let snapshot = engine.tick(TICK_DT);
        log_events(&snapshot);
        if snapshot.status == SessionStatus::Ended || snapshot.time.tick >= max_ticks {
            return snapshot;
        }
    }
}

/// Run the session on the loop thread at the nominal rate, polling the
/// shared snapshot for progress. Per-tick events can be missed between
/// polls; only the status lines here are best-effort.
fn run_realtime(config: SessionConfig, max_ticks: u64) -> anyhow::Result<FrameSnapshot> {
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let (cmd_tx, handle) = spawn_session_loop(config, Arc::clone(&latest))?;
    info!(seed = config.seed, "session loop started");

    let last = loop {
        std::thread::sleep(Duration::from_millis(250));
        let Some(snapshot) = latest.lock().ok().and_then(|guard| guard.clone()) else {
            continue;
        };
        info!(
            tick = snapshot.time.tick,
            pursuers = snapshot.agents.len(),
            "session running"
        );
        if snapshot.status == SessionStatus::Ended {
            break snapshot;
        }
        if snapshot.time.tick >= max_ticks {
            let _ = cmd_tx.send(LoopCommand::Shutdown);
            break snapshot;
        }
    };

    handle
        .join()
        .map_err(|_| anyhow::anyhow!("session loop thread panicked"))?;
    Ok(last)
}

fn log_events(snapshot: &FrameSnapshot) {
    for event in &snapshot.events {
        match event {
            SessionEvent::WaveSpawned { wave_index, count } => {
                info!(
                    wave = wave_index,
                    count,
                    pursuers = snapshot.agents.len(),
                    "wave spawned"
                );
            }
            SessionEvent::Contact {
                pursuer_id,
                distance,
            } => {
                info!(pursuer = pursuer_id, distance, "pursuer made contact");
            }
        }
    }
}

fn report_outcome(snapshot: &FrameSnapshot) {
    match snapshot.status {
        SessionStatus::Ended => info!(
            ticks = snapshot.time.tick,
            survived_secs = snapshot.time.elapsed_secs,
            "session over: the swarm won"
        ),
        SessionStatus::Running => info!(
            ticks = snapshot.time.tick,
            "tick limit reached with the session still running"
        ),
    }
}
