/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

/// Fraction of the initial displacement left when a damped spring is
/// considered to have arrived. Used to pick a stiffness from a duration.
const SETTLE_FRACTION: f32 = 0.001;

/// Upper bound on the derived natural frequency, in rad/s
const MAX_OMEGA: f32 = 10_000.0;

/// Longest integration step, in seconds
const MAX_STEP: f32 = 1.0 / 240.0;

impl SpringConfig {
    /// Default spring with pleasant overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
    };

    /// Build a spring from a damping ratio that settles in roughly `duration_secs`.
    ///
    /// `damping_ratio` 1.0 is critically damped; smaller values oscillate.
    /// A ratio of zero would never settle, so it is floored to keep the
    /// stiffness finite; the driver still snaps to the target at the end of
    /// the duration.
    pub fn from_damping_ratio(damping_ratio: f32, duration_secs: f32) -> Self {
        let ratio = if damping_ratio.is_finite() {
            damping_ratio.max(0.05)
        } else {
            1.0
        };
        let duration = if duration_secs.is_finite() {
            duration_secs.max(1e-3)
        } else {
            1.0
        };
        // Envelope e^(-ζωt) reaches SETTLE_FRACTION at t = duration
        let omega = (-SETTLE_FRACTION.ln() / (ratio.min(1.0) * duration)).min(MAX_OMEGA);
        Self {
            mass: 1.0,
            stiffness: omega * omega,
            damping: 2.0 * ratio * omega,
        }
    }

    /// Undamped angular frequency of this spring
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Integration step that keeps semi-implicit Euler stable for this spring.
    ///
    /// Both `omega * h` and `damping * h / mass` stay at or below 0.5.
    pub fn max_step(&self) -> f32 {
        let omega = self.natural_frequency();
        let decay = self.damping / self.mass;
        let mut h = MAX_STEP;
        if omega > 0.0 {
            h = h.min(0.5 / omega);
        }
        if decay > 0.0 {
            h = h.min(0.5 / decay);
        }
        h
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// State for spring physics simulation
#[derive(Clone, Debug)]
pub struct SpringState {
    /// Current position (0.0 = start, 1.0 = target)
    pub position: f32,
    /// Current velocity
    pub velocity: f32,
    /// Last evaluation time
    pub last_t: f32,
}

impl SpringState {
    /// Create a new spring state starting at position 0.0
    pub fn new() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            last_t: 0.0,
        }
    }

    /// Create a spring state with an initial velocity.
    ///
    /// `initial_velocity` is expressed relative to the full distance: 1.0
    /// means the whole distance would be covered in one second.
    pub fn with_velocity(initial_velocity: f32) -> Self {
        Self {
            velocity: initial_velocity,
            ..Self::new()
        }
    }

    /// Step the spring simulation forward using real elapsed time in seconds.
    ///
    /// `elapsed_secs` - Total elapsed time since animation started, in seconds
    /// Returns the current position (can overshoot 1.0)
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let mut dt = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = elapsed_secs;

        // Sub-step large gaps so stiff springs stay stable
        let max_dt = config.max_step();
        while dt > 1e-6 {
            let h = dt.min(max_dt);
            dt -= h;

            let target = 1.0;
            let displacement = self.position - target;
            let spring_force = -config.stiffness * displacement;
            let damping_force = -config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;

            // Semi-implicit Euler
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }

        self.position
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::new()
    }
}
