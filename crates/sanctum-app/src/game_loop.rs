//! Game loop thread. Runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it.
//! Messages arrive via `mpsc` channel. Each snapshot is handed to a sink and
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use sanctum_core::constants::{MAX_STEP_SECS, TICK_RATE};
use sanctum_core::input::InputState;
use sanctum_core::state::GameStateSnapshot;
use sanctum_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread's join handle.
pub fn spawn_game_loop<F>(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    sink: F,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("sanctum-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, sink);
        })?;

    Ok((cmd_tx, handle))
}

/// Fold a newly received input into the one pending for the next tick.
/// Held state comes from the newest message; look deltas add up.
pub fn merge_input(pending: InputState, incoming: InputState) -> InputState {
    InputState {
        look_delta: pending.look_delta + incoming.look_delta,
        ..incoming
    }
}

/// Measured wall delta scaled by `time_scale`, clamped to one engine step.
pub fn step_secs(elapsed: Duration, time_scale: f64) -> f64 {
    (elapsed.as_secs_f64() * time_scale).clamp(0.0, MAX_STEP_SECS)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<F>(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut sink: F,
) where
    F: FnMut(&GameStateSnapshot),
{
    let time_scale = config.time_scale;
    let mut engine = SimulationEngine::new(config);
    let mut input = InputState::default();
    let mut last_step = Instant::now();
    let mut next_tick_time = Instant::now();

    info!("game loop started");

    loop {
        // 1. Drain all pending messages. On shutdown, anything queued before it
        //    still gets one final step.
        let mut stopping = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Command(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Input(incoming)) => {
                    input = merge_input(input, incoming);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    stopping = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the measured delta (engine handles pause semantics internally)
        engine.set_input(input);
        input.look_delta = glam::Vec2::ZERO;
        let now = Instant::now();
        let dt = step_secs(now - last_step, time_scale);
        last_step = now;
        let snapshot = engine.advance(dt);

        // 3. Hand the snapshot to the consumer
        sink(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if stopping {
            info!(ticks = engine.time().tick, "game loop stopped");
            return;
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            debug!("game loop behind schedule, resetting tick clock");
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use sanctum_core::commands::PlayerCommand;
    use sanctum_core::enums::{GamePhase, WeaponId};

    #[test]
    fn test_merge_input_accumulates_look() {
        let first = InputState {
            forward: true,
            look_delta: Vec2::new(2.0, 1.0),
            ..Default::default()
        };
        let second = InputState {
            left: true,
            look_delta: Vec2::new(3.0, -1.0),
            ..Default::default()
        };
        let merged = merge_input(first, second);
        assert!(!merged.forward);
        assert!(merged.left);
        assert_eq!(merged.look_delta, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_step_secs_clamped() {
        assert_eq!(step_secs(Duration::from_secs(2), 1.0), MAX_STEP_SECS);
        let half = step_secs(Duration::from_millis(10), 0.5);
        assert!((half - 0.005).abs() < 1e-9);
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut engine = SimulationEngine::new(SimConfig::default());

        engine.queue_command(PlayerCommand::StartGame);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Playing);

        engine.queue_command(PlayerCommand::TogglePause);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
        let paused_tick = snap.time.tick;

        // Tick while paused, time should not advance
        let snap = engine.tick();
        assert_eq!(snap.time.tick, paused_tick);

        engine.queue_command(PlayerCommand::TogglePause);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!(snap.time.tick > paused_tick);
    }

    #[test]
    fn test_loop_thread_publishes_and_stops() {
        let latest = Arc::new(Mutex::new(None));
        let (snap_tx, snap_rx) = mpsc::channel();
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone(), move |s| {
            let _ = snap_tx.send(s.phase);
        })
        .unwrap();

        tx.send(GameLoopCommand::Command(PlayerCommand::StartGame))
            .unwrap();
        let playing = snap_rx
            .iter()
            .take(120)
            .any(|phase| phase == GamePhase::Playing);
        assert!(playing);
        // The slot is written right after each sink call.
        snap_rx.recv().unwrap();
        assert!(latest.lock().unwrap().is_some());

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_held_input_moves_player() {
        let latest = Arc::new(Mutex::new(None));
        let (snap_tx, snap_rx) = mpsc::channel();
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest, move |s| {
            let _ = snap_tx.send((s.phase, s.player.position.z));
        })
        .unwrap();

        tx.send(GameLoopCommand::Command(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputState {
            forward: true,
            ..Default::default()
        }))
        .unwrap();

        // Spawn is at z = 120 facing -Z.
        let moved = snap_rx
            .iter()
            .take(300)
            .any(|(phase, z)| phase == GamePhase::Playing && z < 119.0);
        assert!(moved);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_shutdown_applies_queued_commands() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone(), |_| {}).unwrap();

        tx.send(GameLoopCommand::Command(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Command(PlayerCommand::SelectSlot { slot: 3 }))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.weapon.active, WeaponId::Shotgun);
    }

    #[test]
    fn test_dropped_sender_stops_loop() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest, |_| {}).unwrap();
        drop(tx);
        handle.join().unwrap();
    }
}
