use crate::config;

/// Linear count-up from zero to `target`, one `advance` per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(frame_ms.max(1));
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
            done: target == 0,
        }
    }

    pub fn for_target(target: u64) -> Self {
        Self::new(target, config::COUNTER_DURATION_MS, config::COUNTER_FRAME_MS)
    }

    pub fn advance(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame { value: self.target, done: true };
        }

        self.current += self.step;
        if self.current >= self.target as f64 {
            // Settle on the exact target whatever the float drift.
            self.done = true;
            return CounterFrame { value: self.target, done: true };
        }

        CounterFrame { value: self.current.floor() as u64, done: false }
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// A counter ticks once it has been seen and until it settles.
pub fn should_run(visible: bool, finished: bool) -> bool {
    visible && !finished
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut animation: CounterAnimation) -> Vec<u64> {
        let mut values = Vec::new();
        loop {
            let frame = animation.advance();
            values.push(frame.value);
            if frame.done {
                return values;
            }
            assert!(values.len() < 10_000, "animation never settled");
        }
    }

    #[test]
    fn counts_up_to_exact_target() {
        let values = run(CounterAnimation::for_target(100));

        assert_eq!(values.last(), Some(&100));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 100));
        // Roughly two seconds at 16ms a frame.
        assert!((124..=126).contains(&values.len()));
    }

    #[test]
    fn value_grows_over_time() {
        let values = run(CounterAnimation::for_target(100));
        assert!(values[10] < values[50]);
        assert!(values[50] < values[100]);
    }

    #[test]
    fn odd_targets_still_settle_exactly() {
        for target in [1, 7, 333, 12_345] {
            assert_eq!(run(CounterAnimation::for_target(target)).last(), Some(&target));
        }
    }

    #[test]
    fn runs_only_between_first_sight_and_settle() {
        assert!(!should_run(false, false));
        assert!(should_run(true, false));
        assert!(!should_run(true, true));
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let mut animation = CounterAnimation::for_target(0);
        assert!(animation.is_done());
        assert_eq!(animation.advance(), CounterFrame { value: 0, done: true });
    }
}
