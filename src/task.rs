use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a self-rescheduling task.
///
/// Clones observe the same flag. A task checks it before every reschedule, so
/// cancelling takes effect no later than the next tick.
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_visible_through_clones() {
        let handle = TaskHandle::new();
        let observer = handle.clone();

        assert!(!observer.is_cancelled());
        handle.cancel();
        assert!(observer.is_cancelled());
    }
}
