use std::f32::consts::TAU;

/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
    /// Velocity at the start of the animation, in units of the total
    /// distance per second (0.5 covers half the distance in one second)
    pub initial_velocity: f32,
}

impl SpringConfig {
    /// Spring described by a nominal duration and a damping ratio.
    ///
    /// The natural period equals `duration_secs`; `damping_ratio` below 1.0
    /// overshoots, 1.0 is critically damped.
    pub fn damped(duration_secs: f32, damping_ratio: f32, initial_velocity: f32) -> Self {
        let omega = TAU / duration_secs.max(f32::EPSILON);
        let stiffness = omega * omega;
        Self {
            mass: 1.0,
            stiffness,
            damping: 2.0 * damping_ratio * stiffness.sqrt(),
            initial_velocity,
        }
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
        Self::with_velocity(0.0)
    }

    /// Create a spring state that starts at 0.0 already moving toward the target
    pub fn with_velocity(velocity: f32) -> Self {
        Self {
            position: 0.0,
            velocity,
            last_t: 0.0,
        }
    }

    /// Step the spring simulation forward using real elapsed time in seconds.
    /// Unlike normalized time (0.0 to 1.0), this allows the spring to continue
    /// oscillating until it naturally settles, regardless of any duration setting.
    ///
    /// `elapsed_secs` - Total elapsed time since animation started, in seconds
    /// Returns the current position (can overshoot 1.0)
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let mut dt = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = elapsed_secs;

        // Integrate in small slices so a late frame doesn't destabilize the spring
        const MAX_DT: f32 = 1.0 / 240.0;
        while dt > 1e-6 {
            let slice = dt.min(MAX_DT);
            dt -= slice;

            // Target is always 1.0 (we're animating from 0 to 1)
            let displacement = self.position - 1.0;
            let spring_force = -config.stiffness * displacement;
            let damping_force = -config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;

            // Semi-implicit Euler
            self.velocity += acceleration * slice;
            self.position += self.velocity * slice;
        }

        self.position
    }

    /// Check if the spring has settled (position near target, velocity near zero)
    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::new()
    }
}
