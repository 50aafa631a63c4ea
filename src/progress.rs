//! Progress reporting for long-running vectorization.
//!
//! Embedding generation dominates the pipeline's runtime, so hosts driving a
//! UI want to hear about it. Progress is modeled as an observer port passed
//! into the vectorizer, not as shared mutable state: the vectorizer calls
//! [`ProgressObserver::on_progress`] with a monotonically increasing
//! fraction in `[0, 1)` as batches complete.

/// Observer notified with fractional progress during vectorization.
///
/// Implemented for any `Fn(f32)`, so a closure works directly:
///
/// ```rust
/// use graf::ProgressObserver;
///
/// let observer = |fraction: f32| eprintln!("{:.0}%", fraction * 100.0);
/// observer.on_progress(0.5);
/// ```
pub trait ProgressObserver {
    /// Called with a fraction in `[0, 1)`; successive calls never decrease.
    fn on_progress(&self, fraction: f32);
}

impl<F: Fn(f32)> ProgressObserver for F {
    fn on_progress(&self, fraction: f32) {
        self(fraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_observer() {
        let seen = RefCell::new(Vec::new());
        let observer = |fraction: f32| seen.borrow_mut().push(fraction);

        observer.on_progress(0.0);
        observer.on_progress(0.5);

        assert_eq!(*seen.borrow(), vec![0.0, 0.5]);
    }

    #[test]
    fn test_dyn_observer() {
        let observer = |_: f32| {};
        let as_dyn: &dyn ProgressObserver = &observer;
        as_dyn.on_progress(0.25);
    }
}
