//! Game loop: a headless runner and a realtime thread at 60 Hz.
//!
//! The realtime engine is created inside its thread. Commands arrive via an
//! `mpsc` channel and the latest snapshot is published to shared state for
//! polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{error, info};

use boxclash_core::constants::TICK_RATE;
use boxclash_core::enums::GamePhase;
use boxclash_core::setup::MatchSetup;
use boxclash_core::state::MatchSnapshot;
use boxclash_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{LoopCommand, LoopHandle, SharedSnapshot};

/// Wall-clock duration of one tick. The time scale is applied inside the
/// engine, so pacing stays fixed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Result of a headless run.
#[derive(Debug, Clone)]
pub struct HeadlessOutcome {
    /// Snapshot after the last tick that ran.
    pub snapshot: MatchSnapshot,
    /// Ticks actually simulated.
    pub ticks: u64,
    /// `true` if the tick cap stopped the run before the match ended.
    pub timed_out: bool,
}

/// Run a match as fast as possible until it ends or `max_ticks` elapse.
pub fn run_headless(config: SimConfig, setup: MatchSetup, max_ticks: u64) -> Result<HeadlessOutcome> {
    let mut engine = SimulationEngine::new(config);
    engine.start_match(setup)?;

    let mut snapshot = engine.snapshot();
    let mut ticks = 0;
    while snapshot.phase == GamePhase::Active && ticks < max_ticks {
        snapshot = engine.tick();
        ticks += 1;
    }

    let timed_out = snapshot.phase != GamePhase::GameOver;
    if timed_out {
        info!("tick cap of {max_ticks} reached without a result");
    }
    Ok(HeadlessOutcome {
        snapshot,
        ticks,
        timed_out,
    })
}

/// Spawns the game loop in a new thread.
///
/// The setup is validated before the thread starts. Returns a handle holding
/// the command sender and the shared latest snapshot.
pub fn spawn_game_loop(config: SimConfig, setup: MatchSetup) -> Result<LoopHandle> {
    setup.validate()?;

    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("boxclash-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(config);
            if let Err(err) = engine.start_match(setup) {
                error!("game loop could not start: {err}");
                return;
            }
            run_game_loop(&mut engine, cmd_rx, &shared);
        })?;

    Ok(LoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut SimulationEngine,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<MatchSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Match(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxclash_core::commands::MatchCommand;
    use boxclash_core::enums::ArenaId;

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_time_scale_does_not_speed_up_pacing() {
        let handle = spawn_game_loop(
            SimConfig {
                seed: 3,
                time_scale: 3.0,
            },
            MatchSetup::two_teams(3, 3, ArenaId::Empty),
        )
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while handle.snapshot().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        let first = handle.snapshot().unwrap();
        assert_eq!(first.time_scale, 3.0);

        std::thread::sleep(Duration::from_millis(500));
        let later = handle.snapshot().unwrap();
        let ticks = later.time.tick - first.time.tick;
        // 60 Hz for half a second is 30 ticks; scaled pacing would give 90.
        assert!(ticks <= 45, "{ticks} ticks in 500ms");

        // Each tick still advances three ticks' worth of match time.
        if ticks > 0 && later.phase == GamePhase::Active {
            let per_tick = (later.time.elapsed_secs - first.time.elapsed_secs) / ticks as f64;
            assert!((per_tick - 3.0 / 60.0).abs() < 1e-9);
        }

        assert!(handle.send(LoopCommand::Shutdown));
        handle.thread.join().unwrap();
    }

    #[test]
    fn test_headless_duel_finishes() {
        let outcome = run_headless(
            SimConfig::default(),
            MatchSetup::two_teams(1, 1, ArenaId::Empty),
            100_000,
        )
        .unwrap();
        assert!(!outcome.timed_out);
        assert_eq!(outcome.snapshot.phase, GamePhase::GameOver);
        assert!(outcome.snapshot.result.is_some());
        assert_eq!(outcome.snapshot.time.tick, outcome.ticks);
    }

    #[test]
    fn test_headless_tick_cap() {
        let outcome = run_headless(
            SimConfig::default(),
            MatchSetup::two_teams(10, 10, ArenaId::Fortress),
            30,
        )
        .unwrap();
        assert!(outcome.timed_out);
        assert_eq!(outcome.ticks, 30);
        assert!(outcome.snapshot.result.is_none());
    }

    #[test]
    fn test_invalid_setup_is_an_error() {
        let setup = MatchSetup::two_teams(0, 4, ArenaId::Empty);
        assert!(run_headless(SimConfig::default(), setup.clone(), 10).is_err());
        assert!(spawn_game_loop(SimConfig::default(), setup).is_err());
    }

    #[test]
    fn test_loop_thread_pause_and_shutdown() {
        let handle = spawn_game_loop(
            SimConfig::default(),
            MatchSetup::two_teams(3, 3, ArenaId::CenterPillar),
        )
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while handle.snapshot().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(handle.snapshot().is_some());

        assert!(handle.send(LoopCommand::Match(MatchCommand::Pause)));
        let deadline = Instant::now() + Duration::from_secs(5);
        while handle.snapshot().map(|s| s.phase) != Some(GamePhase::Paused)
            && Instant::now() < deadline
        {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(handle.snapshot().map(|s| s.phase), Some(GamePhase::Paused));

        assert!(handle.send(LoopCommand::Shutdown));
        handle.thread.join().unwrap();
    }
}
