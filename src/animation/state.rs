use std::time::Duration;

use super::{Animatable, SpringState, TimingFunction, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running, delayed, or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Animation state for a single animatable property.
///
/// Time is supplied by the caller as a monotonic `Duration` so the host's
/// frame clock drives every animation. An animation's clock starts at the
/// first `advance` after `animate_to`, so idle time before that frame is
/// never counted.
#[derive(Debug, Clone)]
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value being animated toward
    target: T,
    /// Value when animation started
    start: T,
    /// Progress from 0.0 to 1.0
    progress: f32,
    /// Clock time of the first frame of the running animation
    start_time: Option<Duration>,
    /// Transition configuration for the running animation
    transition: Transition,
    /// Spring state (for spring timing functions)
    spring_state: Option<SpringState>,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            start_time: None,
            transition: Transition::linear(0.0),
            spring_state: None,
        }
    }

    /// Start animating to a new target value.
    ///
    /// A running animation is superseded and the new one starts from the
    /// current value. Animating to the value already targeted is a no-op.
    pub fn animate_to(&mut self, new_target: T, transition: Transition) {
        if new_target == self.target {
            return;
        }

        self.spring_state = match transition.timing {
            TimingFunction::Spring(config) => {
                Some(SpringState::with_velocity(config.initial_velocity))
            }
            _ => None,
        };
        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.start_time = None;
        self.transition = transition;
    }

    /// Advance the animation to `now` and return whether the value changed
    pub fn advance(&mut self, now: Duration) -> AdvanceResult<T> {
        if !self.is_animating() {
            return AdvanceResult::NoChange;
        }

        let start_time = *self.start_time.get_or_insert(now);
        let elapsed_ms = now.saturating_sub(start_time).as_secs_f32() * 1000.0;
        let adjusted_elapsed = elapsed_ms - self.transition.delay_ms;

        if adjusted_elapsed <= 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        let new_value = match (&mut self.spring_state, &self.transition.timing) {
            (Some(spring_state), TimingFunction::Spring(config)) => {
                let position = spring_state.step(adjusted_elapsed / 1000.0, config);
                if spring_state.is_settled(0.01) {
                    self.progress = 1.0;
                    self.target.clone()
                } else {
                    T::lerp(&self.start, &self.target, position)
                }
            }
            _ => {
                let t = if self.transition.duration_ms > 0.0 {
                    (adjusted_elapsed / self.transition.duration_ms).min(1.0)
                } else {
                    1.0
                };
                self.progress = t;
                if t >= 1.0 {
                    self.target.clone()
                } else {
                    T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
                }
            }
        };

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Check if animation is still running (including its delay)
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
        self.start_time = None;
        self.spring_state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SpringConfig;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_animation_state_new() {
        let state = AnimationState::new(0.0f32);

        assert_eq!(*state.current(), 0.0);
        assert_eq!(*state.target(), 0.0);
        assert!(!state.is_animating()); // Starts completed
    }

    #[test]
    fn test_animation_state_animate_to() {
        let mut state = AnimationState::new(0.0f32);

        state.animate_to(100.0, Transition::linear(300.0));

        assert_eq!(*state.target(), 100.0);
        assert!(state.is_animating());
    }

    #[test]
    fn test_animation_state_animate_to_same_target() {
        let mut state = AnimationState::new(0.0f32);

        state.animate_to(100.0, Transition::linear(300.0));
        state.advance(ms(0));
        state.advance(ms(150));

        // Same target should not restart from the current value
        state.animate_to(100.0, Transition::linear(300.0));
        assert_eq!(state.start_time, Some(ms(0)));
    }

    #[test]
    fn test_clock_starts_on_first_advance() {
        let mut state = AnimationState::new(0.0f32);
        state.animate_to(10.0, Transition::linear(100.0));

        // A long idle gap before the first frame is not counted
        assert_eq!(state.advance(ms(10_000)), AdvanceResult::NoChange);
        assert_eq!(state.advance(ms(10_050)), AdvanceResult::Changed(5.0));
    }

    #[test]
    fn test_linear_advance() {
        let mut state = AnimationState::new(0.0f32);
        state.animate_to(10.0, Transition::linear(100.0));
        state.advance(ms(0));

        assert_eq!(state.advance(ms(50)), AdvanceResult::Changed(5.0));
        assert_eq!(state.advance(ms(100)), AdvanceResult::Changed(10.0));
        assert!(!state.is_animating());
        assert_eq!(state.advance(ms(200)), AdvanceResult::NoChange);
    }

    #[test]
    fn test_delay_holds_value() {
        let mut state = AnimationState::new(0.4f32);
        state.animate_to(1.0, Transition::linear(100.0).delay(100.0));
        state.advance(ms(0));

        assert_eq!(state.advance(ms(50)), AdvanceResult::NoChange);
        assert_eq!(*state.current(), 0.4);
        assert!(state.is_animating());

        state.advance(ms(150));
        assert!(*state.current() > 0.4);
    }

    #[test]
    fn test_supersede_restarts_from_current() {
        let mut state = AnimationState::new(0.0f32);
        state.animate_to(10.0, Transition::linear(100.0));
        state.advance(ms(0));
        state.advance(ms(50));

        state.animate_to(0.0, Transition::linear(100.0));
        state.advance(ms(50));
        state.advance(ms(100));
        assert_eq!(*state.current(), 2.5);
    }

    #[test]
    fn test_spring_lands_on_target() {
        let mut state = AnimationState::new(0.0f32);
        let config = SpringConfig::damped(0.3, 0.55, 0.3);
        state.animate_to(1.0, Transition::spring(config));

        let mut t = 0;
        while state.is_animating() && t < 3000 {
            state.advance(ms(t));
            t += 16;
        }

        assert!(!state.is_animating());
        assert_eq!(*state.current(), 1.0);
    }

    #[test]
    fn test_set_immediate() {
        let mut state = AnimationState::new(0.0f32);
        state.animate_to(1.0, Transition::linear(300.0));

        state.set_immediate(50.0);

        assert_eq!(*state.current(), 50.0);
        assert_eq!(*state.target(), 50.0);
        assert!(!state.is_animating());
    }
}
