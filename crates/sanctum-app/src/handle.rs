//! Control surface over the game loop thread.
//!
//! A presentation layer drives the simulation through these methods.
//! They bridge requests to the game loop thread via channels.

use sanctum_core::commands::PlayerCommand;
use sanctum_core::input::InputState;
use sanctum_core::state::GameStateSnapshot;
use sanctum_sim::SimConfig;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Owns the shared state of one game loop thread.
#[derive(Default)]
pub struct SimulationHandle {
    state: AppState,
}

impl SimulationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the game loop thread. Each snapshot is passed to `sink`.
    pub fn start<F>(&self, config: SimConfig, sink: F) -> Result<(), AppError>
    where
        F: FnMut(&GameStateSnapshot) + Send + 'static,
    {
        let mut tx_lock = self.state.command_tx.lock()?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, self.state.latest_snapshot.clone(), sink)
                .map_err(AppError::Spawn)?;

        *tx_lock = Some(cmd_tx);
        *self.state.loop_thread.lock()? = Some(handle);
        Ok(())
    }

    pub fn is_running(&self) -> Result<bool, AppError> {
        Ok(self.state.command_tx.lock()?.is_some())
    }

    /// Send a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.send(GameLoopCommand::Command(command))
    }

    /// Send the current held input.
    pub fn send_input(&self, input: InputState) -> Result<(), AppError> {
        self.send(GameLoopCommand::Input(input))
    }

    /// Get the latest snapshot synchronously (for polling / initial state).
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        Ok(self.state.latest_snapshot.lock()?.clone())
    }

    /// Stop the loop thread and wait for it to exit.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let tx = self
            .state
            .command_tx
            .lock()?
            .take()
            .ok_or(AppError::NotRunning)?;
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);

        if let Some(handle) = self.state.loop_thread.lock()?.take() {
            handle.join().map_err(|_| AppError::ChannelClosed)?;
        }
        Ok(())
    }

    fn send(&self, message: GameLoopCommand) -> Result<(), AppError> {
        let tx_lock = self.state.command_tx.lock()?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(message).map_err(|_| AppError::ChannelClosed),
            None => Err(AppError::NotRunning),
        }
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use sanctum_core::enums::GamePhase;

    #[test]
    fn test_requires_start() {
        let handle = SimulationHandle::new();
        assert!(!handle.is_running().unwrap());
        assert!(matches!(
            handle.send_command(PlayerCommand::StartGame),
            Err(AppError::NotRunning)
        ));
        assert!(matches!(handle.shutdown(), Err(AppError::NotRunning)));
        assert!(handle.snapshot().unwrap().is_none());
    }

    #[test]
    fn test_start_twice_rejected() {
        let handle = SimulationHandle::new();
        handle.start(SimConfig::default(), |_| {}).unwrap();
        assert!(matches!(
            handle.start(SimConfig::default(), |_| {}),
            Err(AppError::AlreadyRunning)
        ));
        handle.shutdown().unwrap();
        assert!(!handle.is_running().unwrap());
    }

    #[test]
    fn test_commands_reach_engine() {
        let handle = SimulationHandle::new();
        handle.start(SimConfig::default(), |_| {}).unwrap();
        handle.send_command(PlayerCommand::StartGame).unwrap();

        let mut phase = None;
        for _ in 0..100 {
            std::thread::sleep(Duration::from_millis(10));
            phase = handle.snapshot().unwrap().map(|s| s.phase);
            if phase == Some(GamePhase::Playing) {
                break;
            }
        }
        assert_eq!(phase, Some(GamePhase::Playing));
        handle.shutdown().unwrap();
    }
}
