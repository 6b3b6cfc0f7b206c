//! Fixed-timestep tick loop around a system group.

use std::time::{Duration, Instant};

use ember_system::SystemGroup;
use tracing::{debug, info, warn};

/// Configuration for the tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Target ticks per second.
    pub tick_rate: f64,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_ticks: 0,
        }
    }
}

/// Drives a [`SystemGroup`] at a fixed rate.
pub struct TickLoop {
    /// Current tick counter.
    tick_id: u64,
    /// Tick configuration.
    config: TickConfig,
    /// The systems (and world) being simulated.
    group: SystemGroup,
}

impl TickLoop {
    /// Create a new tick loop over the given group.
    #[must_use]
    pub fn new(config: TickConfig, group: SystemGroup) -> Self {
        Self {
            tick_id: 0,
            config,
            group,
        }
    }

    /// Returns the current tick counter.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Returns a reference to the system group.
    #[must_use]
    pub fn group(&self) -> &SystemGroup {
        &self.group
    }

    /// Returns a mutable reference to the system group.
    pub fn group_mut(&mut self) -> &mut SystemGroup {
        &mut self.group
    }

    /// Run one tick of the simulation.
    pub fn tick(&mut self, dt: f32) {
        self.tick_id += 1;
        debug!(tick_id = self.tick_id, dt, "tick start");
        self.group.update(dt);
    }

    /// Run the tick loop for the configured number of ticks, or indefinitely.
    ///
    /// This is a blocking loop; each tick sleeps away the remainder of its
    /// time budget.
    pub fn run(&mut self) {
        let tick_duration = Duration::from_secs_f64(1.0 / self.config.tick_rate);
        let mut tick_count = 0u64;

        info!(
            tick_rate = self.config.tick_rate,
            max_ticks = self.config.max_ticks,
            "starting tick loop"
        );

        loop {
            let start = Instant::now();

            let dt = tick_duration.as_secs_f32();
            self.tick(dt);

            tick_count += 1;
            if self.config.max_ticks > 0 && tick_count >= self.config.max_ticks {
                info!(ticks = tick_count, "tick loop complete");
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            } else {
                warn!(
                    tick_id = self.tick_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = tick_duration.as_millis() as u64,
                    "tick exceeded time budget"
                );
            }
        }
    }
}
