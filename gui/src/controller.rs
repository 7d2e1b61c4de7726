use std::time::{Duration, Instant};

use life_engine::{randomize, Coord, SimulationEngine, PATTERNS};
use log::{info, warn};
use rand::Rng;

use crate::animation::Animator;

const RANDOM_DENSITY: f64 = 0.3;

/// Everything the buttons and the grid act on, independent of egui.
#[derive(Debug, Clone)]
pub struct Controller {
    engine: SimulationEngine,
    animator: Animator,
    generation: u64,
}

impl Controller {
    pub fn new(engine: SimulationEngine, step_interval: Duration) -> Self {
        Self {
            engine,
            animator: Animator::new(step_interval),
            generation: 0,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Called once per frame. Returns how long until the next step is due.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if self.animator.poll(now, &mut self.engine) {
            self.generation += 1;
        }
        self.animator.time_until_next(now)
    }

    pub fn start(&mut self, now: Instant) {
        if self.engine.life_over() {
            info!("nothing alive, not starting");
            return;
        }
        info!("starting with {} living cells", self.engine.living_cells().len());
        self.animator.start(now);
    }

    /// Cancel the pending step and clear the grid.
    pub fn stop(&mut self) {
        self.animator.stop();
        self.engine.reset();
        self.generation = 0;
        info!("stopped and reset");
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match randomize(&mut self.engine, rng, RANDOM_DENSITY) {
            Ok(()) => {
                self.generation = 0;
                info!("randomized, {} living cells", self.engine.living_cells().len());
            }
            Err(err) => warn!("randomize failed: {err}"),
        }
    }

    pub fn load_pattern(&mut self, index: usize) {
        let Some(pattern) = PATTERNS.get(index) else {
            return;
        };
        let origin = pattern.centered_origin(self.engine.rows(), self.engine.cols());
        match pattern.place(&mut self.engine, origin) {
            Ok(()) => {
                self.generation = 0;
                info!("loaded {}", pattern.name);
            }
            Err(err) => warn!("cannot load {}: {err}", pattern.name),
        }
    }

    /// Cells can only be edited while the animation is stopped.
    pub fn toggle_cell(&mut self, pos: Coord) {
        if self.animator.is_running() {
            return;
        }
        let result = if self.engine.is_alive(pos) {
            self.engine.set_dead(pos)
        } else {
            self.engine.set_alive(pos)
        };
        if let Err(err) = result {
            warn!("ignoring click: {err}");
        }
    }
}
