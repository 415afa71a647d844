//! State shared between the console and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use boxclash_core::commands::MatchCommand;
use boxclash_core::state::MatchSnapshot;

/// Commands sent from the console to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopCommand {
    /// A match command to forward to the simulation engine.
    Match(MatchCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop, for polling.
pub type SharedSnapshot = Arc<Mutex<Option<MatchSnapshot>>>;

/// Handle to a running game loop thread.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<LoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Forward a command. Returns `false` once the loop has exited.
    pub fn send(&self, command: LoopCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<MatchSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_handle_reports_closed_channel() {
        let (tx, rx) = mpsc::channel();
        let handle = LoopHandle {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
            thread: std::thread::spawn(|| {}),
        };

        assert!(handle.send(LoopCommand::Match(MatchCommand::Pause)));
        assert_eq!(rx.recv().unwrap(), LoopCommand::Match(MatchCommand::Pause));
        drop(rx);
        assert!(!handle.send(LoopCommand::Shutdown));
        assert!(handle.snapshot().is_none());
    }
}
