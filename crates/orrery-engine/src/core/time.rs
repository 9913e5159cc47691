/// Monotonic simulation clock.
///
/// Advanced by a fixed step once per display refresh, never by wall time, so
/// the simulation runs at the same rate per frame whatever the refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    /// Current simulation time.
    time: f64,
    /// Increment applied by each `advance`.
    step: f64,
}

impl SimulationClock {
    /// Create a clock at time zero. `step` must be positive.
    pub fn new(step: f64) -> Self {
        debug_assert!(step > 0.0, "clock step must be positive");
        Self { time: 0.0, step }
    }

    /// Advance by exactly one step. Returns the new time.
    pub fn advance(&mut self) -> f64 {
        self.time += self.step;
        self.time
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The fixed increment per tick.
    pub fn step(&self) -> f64 {
        self.step
    }
}
