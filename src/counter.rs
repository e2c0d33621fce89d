pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const COUNTER_TARGET_ATTR: &str = "data-count";
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const FRAME_MS: f64 = 16.0;
/// Fraction of the counter that must be on screen before it starts.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(i64),
    Finished(i64),
}

impl CounterFrame {
    pub fn value(self) -> i64 {
        match self {
            Self::Running(value) | Self::Finished(value) => value,
        }
    }
}

/// Count-up from zero to `target` in a fixed number of frame steps.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            step: target as f64 / (COUNTER_DURATION_MS / FRAME_MS),
            current: 0.0,
        }
    }

    pub fn parse_target(raw: &str) -> Option<i64> {
        raw.trim().parse::<i64>().ok()
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.step;

        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as i64)
        } else {
            CounterFrame::Finished(self.target)
        }
    }
}
