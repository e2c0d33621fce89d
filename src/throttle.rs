/// Cooldown gate: admits at most one call per `interval_ms`.
///
/// Calls inside the window are dropped, never queued. A call landing exactly
/// on the window boundary is admitted.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_admitted: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_admitted: None,
        }
    }

    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        let admitted = match self.last_admitted {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        };

        if admitted {
            self.last_admitted = Some(now_ms);
        }
        admitted
    }
}

/// Wraps `callback` so it runs at most once per `interval_ms` of `clock` time.
pub fn throttle<A>(
    interval_ms: u32,
    clock: impl Fn() -> f64,
    mut callback: impl FnMut(A),
) -> impl FnMut(A) {
    let mut gate = Throttle::new(interval_ms);

    move |arg: A| {
        if gate.try_acquire(clock()) {
            callback(arg);
        }
    }
}
