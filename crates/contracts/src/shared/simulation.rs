//! Simulated latency.
//!
//! Every "asynchronous" step of the demo (chat typing, upload ticks,
//! processing, sign-up) is a fixed wait followed by a hardcoded outcome.
//! The wait goes through [`Delay`] so the browser can use real timers while
//! tests resolve immediately.

use std::future::Future;

/// Source of simulated latency.
pub trait Delay {
    /// Resolves after `millis` milliseconds.
    fn wait(&self, millis: u32) -> impl Future<Output = ()>;
}

impl<D: Delay + ?Sized> Delay for &D {
    fn wait(&self, millis: u32) -> impl Future<Output = ()> {
        (**self).wait(millis)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Delay;
    use std::cell::RefCell;
    use std::future::Future;

    /// Resolves instantly and remembers every requested wait.
    #[derive(Debug, Default)]
    pub struct RecordingDelay {
        waits: RefCell<Vec<u32>>,
    }

    impl RecordingDelay {
        pub fn waits(&self) -> Vec<u32> {
            self.waits.borrow().clone()
        }

        pub fn total(&self) -> u64 {
            self.waits.borrow().iter().map(|w| u64::from(*w)).sum()
        }
    }

    impl Delay for RecordingDelay {
        fn wait(&self, millis: u32) -> impl Future<Output = ()> {
            self.waits.borrow_mut().push(millis);
            std::future::ready(())
        }
    }
}
