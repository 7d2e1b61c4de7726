use std::time::{Duration, Instant};

use life_engine::SimulationEngine;
use log::info;

/// Steps the engine on a fixed interval while running.
///
/// Owned by the UI thread and polled from the frame loop, so every engine
/// call happens on one thread.
#[derive(Debug, Clone)]
pub struct Animator {
    interval: Duration,
    next_step: Option<Instant>,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_step: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_step.is_some()
    }

    /// The first generation is computed one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_step = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_step = None;
    }

    /// Advance the engine if a step is due. Returns whether it stepped.
    ///
    /// Stops by itself once every cell is dead.
    pub fn poll(&mut self, now: Instant, engine: &mut SimulationEngine) -> bool {
        match self.next_step {
            Some(due) if now >= due => {
                engine.update();
                if engine.life_over() {
                    info!("all cells are dead, stopping");
                    self.next_step = None;
                } else {
                    self.next_step = Some(now + self.interval);
                }
                true
            }
            _ => false,
        }
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_step.map(|due| due.saturating_duration_since(now))
    }
}
