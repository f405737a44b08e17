//! Countdown driver. A spawned interval task sends one [`Tick`] per period into
//! the event loop; the session state itself never sees a clock.

use crate::session::TimerCommand;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Owns at most one repeating tick task. Every restart or cancel aborts the
/// previous task and bumps the generation, so ticks that were already queued
/// by an older task are rejected by [`Countdown::accepts`].
#[derive(Debug)]
pub struct Countdown {
    period: Duration,
    generation: u64,
    handle: Option<JoinHandle<()>>,
    tx: UnboundedSender<Tick>,
}

impl Countdown {
    pub fn new(period: Duration) -> (Self, UnboundedReceiver<Tick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let countdown = Self {
            period,
            generation: 0,
            handle: None,
            tx,
        };
        (countdown, rx)
    }

    /// Starts a fresh countdown; the first tick arrives one full period from now.
    /// Must be called from within a tokio runtime.
    pub fn restart(&mut self) {
        self.stop();
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.generation += 1;
    }

    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Keep => {}
            TimerCommand::Restart => self.restart(),
            TimerCommand::Cancel => self.cancel(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn accepts(&self, tick: Tick) -> bool {
        self.is_running() && tick.generation == self.generation
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
